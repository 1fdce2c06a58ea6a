use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: i64,
    pub folder_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub note_name: String,
    pub note_content: String,
    pub date_modified: DateTime<Utc>,
    pub folder_id: i64,
}

/// Validated input for a folder insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub folder_name: String,
}

/// Validated input for a note insert. `folder_id` is not checked against
/// existing folders, the foreign key in the store takes care of that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub note_name: String,
    pub note_content: String,
    pub folder_id: i64,
}

/// Partial folder update, `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPatch {
    pub folder_name: Option<String>,
}

/// Partial note update, `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub note_name: Option<String>,
    pub note_content: Option<String>,
    pub folder_id: Option<i64>,
}
