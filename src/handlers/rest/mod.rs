mod extract;
pub mod folders;
pub mod notes;

use axum::{
    Router,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    AppState,
    dto::{
        CreateFolderRequest, CreateNoteRequest, ErrorMessage, ErrorResponse, FolderResponse,
        NoteResponse, UpdateFolderRequest, UpdateNoteRequest,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        folders::get_all_folders,
        folders::get_folder,
        folders::create_folder,
        folders::update_folder,
        folders::delete_folder,
        notes::get_all_notes,
        notes::get_note,
        notes::create_note,
        notes::update_note,
        notes::delete_note
    ),
    components(schemas(
        FolderResponse,
        CreateFolderRequest,
        UpdateFolderRequest,
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        ErrorResponse,
        ErrorMessage
    )),
    tags(
        (name = "folders", description = "Folder management API"),
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

/// Full HTTP surface: `/api/folders`, `/api/notes`, Swagger UI and the
/// landing route, wrapped in CORS and request tracing.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/folders", folders::router())
        .route("/api/folders/", folders::collection())
        .nest("/api/notes", notes::router())
        .route("/api/notes/", notes::collection())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> Response {
    (StatusCode::OK, "Hello, world!").into_response()
}
