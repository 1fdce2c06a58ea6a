use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use axum_macros::debug_handler;

use super::extract::{JsonBody, Path, location};
use crate::{
    AppState,
    dto::{CreateFolderRequest, ErrorResponse, FolderResponse, UpdateFolderRequest},
    error::ApiError,
};

const ENTITY: &str = "folder";

/// List and create, also mounted with a trailing slash.
pub fn collection() -> MethodRouter<AppState> {
    get(get_all_folders).post(create_folder)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", collection())
        .route(
            "/{id}",
            get(get_folder).patch(update_folder).delete(delete_folder),
        )
}

#[utoipa::path(
    get,
    path = "/api/folders",
    responses(
        (status = 200, description = "List of all folders", body = Vec<FolderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "folders"
)]
#[debug_handler]
pub async fn get_all_folders(State(state): State<AppState>) -> Result<Response, ApiError> {
    let folders = state.folders.get_all_folders().await?;
    Ok((StatusCode::OK, Json(folders)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/folders/{id}",
    params(
        ("id" = i64, Path, description = "Folder ID")
    ),
    responses(
        (status = 200, description = "Folder found", body = FolderResponse),
        (status = 404, description = "Folder not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "folders"
)]
#[debug_handler]
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    match state.folders.get_folder(id).await? {
        Some(folder) => Ok((StatusCode::OK, Json(folder)).into_response()),
        None => Err(ApiError::NotFound(ENTITY)),
    }
}

#[utoipa::path(
    post,
    path = "/api/folders",
    request_body = CreateFolderRequest,
    responses(
        (status = 201, description = "Folder created successfully", body = FolderResponse),
        (status = 400, description = "Required field missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "folders"
)]
#[debug_handler]
pub async fn create_folder(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(payload): JsonBody<CreateFolderRequest>,
) -> Result<Response, ApiError> {
    let new_folder = payload.validate()?;
    let folder = state.folders.create_folder(new_folder).await?;

    tracing::info!("created folder, id: {}", folder.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, folder.id))],
        Json(folder),
    )
        .into_response())
}

/// Answers 204 whether or not the folder exists.
#[utoipa::path(
    patch,
    path = "/api/folders/{id}",
    params(
        ("id" = i64, Path, description = "Folder ID")
    ),
    request_body = UpdateFolderRequest,
    responses(
        (status = 204, description = "Folder updated"),
        (status = 400, description = "No updatable field supplied", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "folders"
)]
#[debug_handler]
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateFolderRequest>,
) -> Result<Response, ApiError> {
    let patch = payload.validate()?;
    state.folders.update_folder(id, patch).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/folders/{id}",
    params(
        ("id" = i64, Path, description = "Folder ID")
    ),
    responses(
        (status = 204, description = "Folder deleted successfully"),
        (status = 404, description = "Folder not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "folders"
)]
#[debug_handler]
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if state.folders.delete_folder(id).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(ApiError::NotFound(ENTITY))
    }
}
