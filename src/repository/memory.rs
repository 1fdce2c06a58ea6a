//! In-process store used by the handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{FolderRepository, NoteRepository, RepositoryError};
use crate::models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    folders: Vec<Folder>,
    notes: Vec<Note>,
    next_folder_id: i64,
    next_note_id: i64,
}

impl MemoryRepository {
    pub fn with_folders(names: &[&str]) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.state.lock().unwrap();
            for name in names {
                state.next_folder_id += 1;
                let id = state.next_folder_id;
                state.folders.push(Folder {
                    id,
                    folder_name: (*name).to_string(),
                });
            }
        }
        repo
    }

    pub fn add_note(&self, note_name: &str, note_content: &str, folder_id: i64) -> Note {
        let mut state = self.state.lock().unwrap();
        state.next_note_id += 1;
        let note = Note {
            id: state.next_note_id,
            note_name: note_name.to_string(),
            note_content: note_content.to_string(),
            date_modified: Utc::now(),
            folder_id,
        };
        state.notes.push(note.clone());
        note
    }
}

#[async_trait]
impl FolderRepository for MemoryRepository {
    async fn get_all_folders(&self) -> Result<Vec<Folder>, RepositoryError> {
        Ok(self.state.lock().unwrap().folders.clone())
    }

    async fn get_folder(&self, id: i64) -> Result<Option<Folder>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.folders.iter().find(|f| f.id == id).cloned())
    }

    async fn insert_folder(&self, folder: NewFolder) -> Result<Folder, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_folder_id += 1;
        let folder = Folder {
            id: state.next_folder_id,
            folder_name: folder.folder_name,
        };
        state.folders.push(folder.clone());
        Ok(folder)
    }

    async fn update_folder(&self, id: i64, patch: FolderPatch) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(folder) = state.folders.iter_mut().find(|f| f.id == id) else {
            return Ok(0);
        };
        if let Some(folder_name) = patch.folder_name {
            folder.folder_name = folder_name;
        }
        Ok(1)
    }

    async fn delete_folder(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.folders.len();
        state.folders.retain(|f| f.id != id);
        let removed = before - state.folders.len();
        if removed > 0 {
            state.notes.retain(|n| n.folder_id != id);
        }
        Ok(removed as u64)
    }
}

#[async_trait]
impl NoteRepository for MemoryRepository {
    async fn get_all_notes(&self) -> Result<Vec<Note>, RepositoryError> {
        Ok(self.state.lock().unwrap().notes.clone())
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.notes.iter().find(|n| n.id == id).cloned())
    }

    async fn insert_note(&self, note: NewNote) -> Result<Note, RepositoryError> {
        Ok(self.add_note(&note.note_name, &note.note_content, note.folder_id))
    }

    async fn update_note(&self, id: i64, patch: NotePatch) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(note) = state.notes.iter_mut().find(|n| n.id == id) else {
            return Ok(0);
        };
        if let Some(note_name) = patch.note_name {
            note.note_name = note_name;
        }
        if let Some(note_content) = patch.note_content {
            note.note_content = note_content;
        }
        if let Some(folder_id) = patch.folder_id {
            note.folder_id = folder_id;
        }
        Ok(1)
    }

    async fn delete_note(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        Ok((before - state.notes.len()) as u64)
    }
}
