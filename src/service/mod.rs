use crate::{
    dto::{FolderResponse, NoteResponse},
    models::{FolderPatch, NewFolder, NewNote, NotePatch},
    repository::{FolderRepository, NoteRepository, RepositoryError},
};

use std::sync::Arc;

#[derive(Clone)]
pub struct FolderService {
    repo: Arc<dyn FolderRepository>,
}

impl FolderService {
    pub const fn new(repo: Arc<dyn FolderRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_folders(&self) -> Result<Vec<FolderResponse>, RepositoryError> {
        self.repo
            .get_all_folders()
            .await
            .map(|folders| folders.into_iter().map(FolderResponse::from).collect())
    }

    pub async fn get_folder(&self, id: i64) -> Result<Option<FolderResponse>, RepositoryError> {
        self.repo
            .get_folder(id)
            .await
            .map(|folder| folder.map(FolderResponse::from))
    }

    pub async fn create_folder(&self, folder: NewFolder) -> Result<FolderResponse, RepositoryError> {
        self.repo.insert_folder(folder).await.map(FolderResponse::from)
    }

    pub async fn update_folder(&self, id: i64, patch: FolderPatch) -> Result<u64, RepositoryError> {
        let rows = self.repo.update_folder(id, patch).await?;
        if rows == 0 {
            tracing::debug!("folder update matched no rows, id: {}", id);
        }
        Ok(rows)
    }

    /// `true` when a row was removed.
    pub async fn delete_folder(&self, id: i64) -> Result<bool, RepositoryError> {
        self.repo.delete_folder(id).await.map(|rows| rows > 0)
    }
}

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub const fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, RepositoryError> {
        self.repo
            .get_all_notes()
            .await
            .map(|notes| notes.into_iter().map(NoteResponse::from).collect())
    }

    pub async fn get_note(&self, id: i64) -> Result<Option<NoteResponse>, RepositoryError> {
        self.repo
            .get_note(id)
            .await
            .map(|note| note.map(NoteResponse::from))
    }

    pub async fn create_note(&self, note: NewNote) -> Result<NoteResponse, RepositoryError> {
        self.repo.insert_note(note).await.map(NoteResponse::from)
    }

    pub async fn update_note(&self, id: i64, patch: NotePatch) -> Result<u64, RepositoryError> {
        let rows = self.repo.update_note(id, patch).await?;
        if rows == 0 {
            tracing::debug!("note update matched no rows, id: {}", id);
        }
        Ok(rows)
    }

    /// `true` when a row was removed.
    pub async fn delete_note(&self, id: i64) -> Result<bool, RepositoryError> {
        self.repo.delete_note(id).await.map(|rows| rows > 0)
    }
}
