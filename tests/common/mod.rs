//! Shared setup for the PostgreSQL backed endpoint tests.
//!
//! The tests run only when `TEST_PG_DSN` points at a scratch database; its
//! `folder` and `note` tables are truncated before every test.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header::CONTENT_TYPE},
};
use noteful_api::{
    AppState,
    handlers::rest,
    repository::Repository,
    service::{FolderService, NoteService},
};
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};
use tokio_postgres::{Client, NoTls};
use tower::ServiceExt;

// Tests in one binary share the database
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestDb {
    _guard: MutexGuard<'static, ()>,
    pub client: Client,
    pub router: Router,
}

pub async fn setup() -> Option<TestDb> {
    let Ok(dsn) = std::env::var("TEST_PG_DSN") else {
        eprintln!("TEST_PG_DSN is not set, skipping database test");
        return None;
    };

    let guard = DB_LOCK.lock().await;

    let mut repo = Repository::new(&dsn).await.expect("store connection");
    repo.migrate().await.expect("migrations");
    let repo = Arc::new(repo);

    let (client, con) = tokio_postgres::connect(&dsn, NoTls)
        .await
        .expect("fixture connection");
    tokio::spawn(async move {
        if let Err(e) = con.await {
            eprintln!("fixture connection error: {e}");
        }
    });

    client
        .batch_execute("TRUNCATE note, folder RESTART IDENTITY CASCADE")
        .await
        .expect("truncate tables");

    let state = AppState::new(
        FolderService::new(repo.clone()),
        NoteService::new(repo.clone()),
    );

    Some(TestDb {
        _guard: guard,
        client,
        router: rest::router(state, &[]),
    })
}

impl TestDb {
    pub async fn insert_folders(&self, names: &[&str]) {
        for name in names {
            self.client
                .execute("INSERT INTO folder (folder_name) VALUES ($1)", &[name])
                .await
                .expect("insert folder");
        }
    }

    pub async fn insert_note(&self, note_name: &str, note_content: &str, folder_id: i64) {
        self.client
            .execute(
                "INSERT INTO note (note_name, note_content, folder_id) VALUES ($1, $2, $3)",
                &[&note_name, &note_content, &folder_id],
            )
            .await
            .expect("insert note");
    }

    pub async fn send(
        &self,
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

        let response = self
            .router
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
}

pub const XSS_NAME: &str = r#"Naughty naughty very naughty <script>alert("xss");</script>"#;
pub const XSS_NAME_CLEAN: &str =
    r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#;
