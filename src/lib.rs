pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod sanitize;
pub mod service;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use service::{FolderService, NoteService};

/// Per-request context. Every handler reaches the store through these
/// services, nothing is cached between requests.
#[derive(Clone)]
pub struct AppState {
    pub folders: Arc<FolderService>,
    pub notes: Arc<NoteService>,
}

impl AppState {
    pub fn new(folders: FolderService, notes: NoteService) -> Self {
        Self {
            folders: Arc::new(folders),
            notes: Arc::new(notes),
        }
    }
}
