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
    dto::{CreateNoteRequest, ErrorResponse, NoteResponse, UpdateNoteRequest},
    error::ApiError,
};

const ENTITY: &str = "note";

/// List and create, also mounted with a trailing slash.
pub fn collection() -> MethodRouter<AppState> {
    get(get_all_notes).post(create_note)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", collection())
        .route("/{id}", get(get_note).patch(update_note).delete(delete_note))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(state): State<AppState>) -> Result<Response, ApiError> {
    let notes = state.notes.get_all_notes().await?;
    Ok((StatusCode::OK, Json(notes)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    match state.notes.get_note(id).await? {
        Some(note) => Ok((StatusCode::OK, Json(note)).into_response()),
        None => Err(ApiError::NotFound(ENTITY)),
    }
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Required field missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(payload): JsonBody<CreateNoteRequest>,
) -> Result<Response, ApiError> {
    let new_note = payload.validate()?;
    let note = state.notes.create_note(new_note).await?;

    tracing::info!("created note, id: {}, folder: {}", note.id, note.folder_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, note.id))],
        Json(note),
    )
        .into_response())
}

/// Answers 204 whether or not the note exists.
#[utoipa::path(
    patch,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 204, description = "Note updated"),
        (status = 400, description = "No updatable field supplied", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateNoteRequest>,
) -> Result<Response, ApiError> {
    let patch = payload.validate()?;
    state.notes.update_note(id, patch).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted successfully"),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if state.notes.delete_note(id).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(ApiError::NotFound(ENTITY))
    }
}
