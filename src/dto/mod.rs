use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch},
    sanitize::sanitize,
};

pub const REQUIRED_FIELD_MISSING: &str = "required field missing";
pub const FOLDER_PATCH_SHAPE: &str = "req body must contain 'folder name' ";
pub const NOTE_PATCH_SHAPE: &str =
    "req body must contain 'note_content', 'note_name' and 'folder_id' ";

// Responses

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FolderResponse {
    /// Folder ID
    pub id: i64,
    /// Folder name, HTML escaped
    pub folder_name: String,
}

impl From<Folder> for FolderResponse {
    /// Public shape of a folder row, text fields sanitized.
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            folder_name: sanitize(&folder.folder_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note name, HTML escaped
    pub note_name: String,
    /// Note content, HTML escaped
    pub note_content: String,
    /// Last modification time, set by the store
    pub date_modified: DateTime<Utc>,
    /// ID of the owning folder
    pub folder_id: i64,
}

impl From<Note> for NoteResponse {
    /// Public shape of a note row, text fields sanitized.
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            note_name: sanitize(&note.note_name),
            note_content: sanitize(&note.note_content),
            date_modified: note.date_modified,
            folder_id: note.folder_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

// Requests
//
// Every field is optional at the schema level so that a missing field turns
// into the documented 400 instead of a generic deserialization rejection.

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateFolderRequest {
    /// Folder name
    pub folder_name: Option<String>,
}

impl CreateFolderRequest {
    /// Presence check only: an empty name is still a name.
    pub fn validate(self) -> Result<NewFolder, ApiError> {
        match self.folder_name {
            Some(folder_name) => Ok(NewFolder { folder_name }),
            None => Err(ApiError::Validation(REQUIRED_FIELD_MISSING.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateFolderRequest {
    /// New folder name
    pub folder_name: Option<String>,
}

impl UpdateFolderRequest {
    /// Rejects a payload without a single truthy value.
    pub fn validate(self) -> Result<FolderPatch, ApiError> {
        if !is_truthy_text(self.folder_name.as_deref()) {
            return Err(ApiError::Validation(FOLDER_PATCH_SHAPE.to_string()));
        }

        Ok(FolderPatch {
            folder_name: self.folder_name,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateNoteRequest {
    /// Note name
    pub note_name: Option<String>,
    /// Note content
    pub note_content: Option<String>,
    /// ID of the owning folder
    pub folder_id: Option<i64>,
}

impl CreateNoteRequest {
    /// Presence check only: empty strings and a zero folder id pass.
    pub fn validate(self) -> Result<NewNote, ApiError> {
        match (self.note_name, self.note_content, self.folder_id) {
            (Some(note_name), Some(note_content), Some(folder_id)) => Ok(NewNote {
                note_name,
                note_content,
                folder_id,
            }),
            _ => Err(ApiError::Validation(REQUIRED_FIELD_MISSING.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateNoteRequest {
    /// New note name
    pub note_name: Option<String>,
    /// New note content
    pub note_content: Option<String>,
    /// New owning folder
    pub folder_id: Option<i64>,
}

impl UpdateNoteRequest {
    /// Needs at least one truthy value. Once that holds, every supplied
    /// value is written, falsy ones included.
    pub fn validate(self) -> Result<NotePatch, ApiError> {
        let truthy = [
            is_truthy_text(self.note_name.as_deref()),
            is_truthy_text(self.note_content.as_deref()),
            self.folder_id.is_some_and(|id| id != 0),
        ]
        .into_iter()
        .filter(|&t| t)
        .count();

        if truthy == 0 {
            return Err(ApiError::Validation(NOTE_PATCH_SHAPE.to_string()));
        }

        Ok(NotePatch {
            note_name: self.note_name,
            note_content: self.note_content,
            folder_id: self.folder_id,
        })
    }
}

fn is_truthy_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}
