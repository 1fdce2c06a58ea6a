use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    AppState,
    handlers::rest,
    repository::memory::MemoryRepository,
    service::{FolderService, NoteService},
};

pub struct TestApp {
    pub repo: Arc<MemoryRepository>,
    pub router: Router,
}

impl TestApp {
    pub fn empty() -> Self {
        Self::from_repo(MemoryRepository::default())
    }

    pub fn with_folders(names: &[&str]) -> Self {
        Self::from_repo(MemoryRepository::with_folders(names))
    }

    fn from_repo(repo: MemoryRepository) -> Self {
        let repo = Arc::new(repo);
        let state = AppState::new(
            FolderService::new(repo.clone()),
            NoteService::new(repo.clone()),
        );

        Self {
            repo,
            router: rest::router(state, &[]),
        }
    }
}

/// Sends a request, JSON encoding `body` when given. An empty response body
/// comes back as `Value::Null`.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, headers, json)
}

pub async fn send_raw(router: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");

    (status, String::from_utf8_lossy(&bytes).into_owned())
}
