mod embedded;
#[cfg(test)]
pub mod memory;

use embedded::migrations;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls, Row};

use crate::models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("migration error: {0}")]
    Migration(#[from] refinery::Error),
}

#[async_trait]
pub trait FolderRepository: Send + Sync {
    async fn get_all_folders(&self) -> Result<Vec<Folder>, RepositoryError>;

    async fn get_folder(&self, id: i64) -> Result<Option<Folder>, RepositoryError>;

    async fn insert_folder(&self, folder: NewFolder) -> Result<Folder, RepositoryError>;

    /// Returns the number of rows affected.
    async fn update_folder(&self, id: i64, patch: FolderPatch) -> Result<u64, RepositoryError>;

    /// Returns the number of rows affected.
    async fn delete_folder(&self, id: i64) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn get_all_notes(&self) -> Result<Vec<Note>, RepositoryError>;

    async fn get_note(&self, id: i64) -> Result<Option<Note>, RepositoryError>;

    async fn insert_note(&self, note: NewNote) -> Result<Note, RepositoryError>;

    /// Returns the number of rows affected.
    async fn update_note(&self, id: i64, patch: NotePatch) -> Result<u64, RepositoryError>;

    /// Returns the number of rows affected.
    async fn delete_note(&self, id: i64) -> Result<u64, RepositoryError>;
}

/// PostgreSQL backed store. Every operation is a single autocommit statement.
pub struct Repository {
    client: Client,
    connection: JoinHandle<()>,
}

impl Repository {
    pub async fn new(database_dsn: &str) -> Result<Self, RepositoryError> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        let connection = tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client, connection })
    }

    pub async fn migrate(&mut self) -> Result<(), RepositoryError> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    /// Drops the client and waits for the connection task to wind down.
    pub async fn close(self) {
        drop(self.client);

        if let Err(e) = self.connection.await {
            tracing::error!("connection task failed during shutdown: {}", e);
        }

        tracing::info!("DB connection closed");
    }
}

fn folder_from_row(row: &Row) -> Folder {
    Folder {
        id: row.get("id"),
        folder_name: row.get("folder_name"),
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        note_name: row.get("note_name"),
        note_content: row.get("note_content"),
        date_modified: row.get("date_modified"),
        folder_id: row.get("folder_id"),
    }
}

#[async_trait]
impl FolderRepository for Repository {
    async fn get_all_folders(&self) -> Result<Vec<Folder>, RepositoryError> {
        let rows = self
            .client
            .query("SELECT id, folder_name FROM folder ORDER BY id", &[])
            .await?;

        Ok(rows.iter().map(folder_from_row).collect())
    }

    async fn get_folder(&self, id: i64) -> Result<Option<Folder>, RepositoryError> {
        let row = self
            .client
            .query_opt("SELECT id, folder_name FROM folder WHERE id = $1", &[&id])
            .await?;

        Ok(row.as_ref().map(folder_from_row))
    }

    async fn insert_folder(&self, folder: NewFolder) -> Result<Folder, RepositoryError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO folder (folder_name) VALUES ($1) RETURNING id, folder_name",
                &[&folder.folder_name],
            )
            .await?;

        Ok(folder_from_row(&row))
    }

    async fn update_folder(&self, id: i64, patch: FolderPatch) -> Result<u64, RepositoryError> {
        let rows = self
            .client
            .execute(
                "UPDATE folder SET folder_name = COALESCE($2, folder_name) WHERE id = $1",
                &[&id, &patch.folder_name],
            )
            .await?;

        Ok(rows)
    }

    async fn delete_folder(&self, id: i64) -> Result<u64, RepositoryError> {
        let rows = self
            .client
            .execute("DELETE FROM folder WHERE id = $1", &[&id])
            .await?;

        Ok(rows)
    }
}

#[async_trait]
impl NoteRepository for Repository {
    async fn get_all_notes(&self) -> Result<Vec<Note>, RepositoryError> {
        let rows = self
            .client
            .query(
                "SELECT id, note_name, note_content, date_modified, folder_id FROM note ORDER BY id",
                &[],
            )
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let row = self
            .client
            .query_opt(
                "SELECT id, note_name, note_content, date_modified, folder_id FROM note WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn insert_note(&self, note: NewNote) -> Result<Note, RepositoryError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO note (note_name, note_content, folder_id) VALUES ($1, $2, $3) \
                 RETURNING id, note_name, note_content, date_modified, folder_id",
                &[&note.note_name, &note.note_content, &note.folder_id],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn update_note(&self, id: i64, patch: NotePatch) -> Result<u64, RepositoryError> {
        let rows = self
            .client
            .execute(
                "UPDATE note SET \
                 note_name = COALESCE($2, note_name), \
                 note_content = COALESCE($3, note_content), \
                 folder_id = COALESCE($4, folder_id) \
                 WHERE id = $1",
                &[&id, &patch.note_name, &patch.note_content, &patch.folder_id],
            )
            .await?;

        Ok(rows)
    }

    async fn delete_note(&self, id: i64) -> Result<u64, RepositoryError> {
        let rows = self
            .client
            .execute("DELETE FROM note WHERE id = $1", &[&id])
            .await?;

        Ok(rows)
    }
}
