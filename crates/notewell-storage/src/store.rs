// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the NoteStore trait.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use notewell_config::StorageConfig;
use notewell_core::{BodyCodec, Note, NoteBook, NoteStore, NotewellError};

use crate::database::Database;
use crate::queries;

/// SQLite-backed note store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules, with an injected [`BodyCodec`] for note bodies. The
/// database is opened on the first call to [`NoteStore::initialize`].
pub struct SqliteNoteStore {
    config: StorageConfig,
    codec: Arc<dyn BodyCodec>,
    db: OnceCell<Database>,
}

impl SqliteNoteStore {
    /// Create a new SqliteNoteStore with the given configuration and codec.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    ///
    /// [`initialize`]: NoteStore::initialize
    pub fn new(config: StorageConfig, codec: Arc<dyn BodyCodec>) -> Self {
        Self {
            config,
            codec,
            db: OnceCell::new(),
        }
    }

    /// Returns the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, NotewellError> {
        self.db.get().ok_or_else(|| NotewellError::Storage {
            source: "store not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn initialize(&self) -> Result<(), NotewellError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| NotewellError::Storage {
            source: "store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite note store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), NotewellError> {
        let db = self.db()?;
        // Checkpoint WAL; the worker itself is torn down on drop.
        db.connection()
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    async fn save_notebook(&self, notebook: &NoteBook) -> Result<NoteBook, NotewellError> {
        queries::notebooks::save_notebook(self.db()?, notebook).await
    }

    async fn delete_notebook(&self, notebook: &NoteBook) -> Result<(), NotewellError> {
        queries::notebooks::delete_notebook(self.db()?, notebook).await
    }

    async fn list_notebooks(&self) -> Result<Vec<NoteBook>, NotewellError> {
        queries::notebooks::list_notebooks(self.db()?).await
    }

    async fn list_notes(&self) -> Result<Vec<Note>, NotewellError> {
        queries::notes::list_notes(self.db()?, self.codec.as_ref()).await
    }

    async fn list_notes_and_notebooks(
        &self,
    ) -> Result<(Vec<Note>, Vec<NoteBook>), NotewellError> {
        queries::notes::list_notes_and_notebooks(self.db()?, self.codec.as_ref()).await
    }

    async fn save_note(&self, note: &Note) -> Result<Note, NotewellError> {
        queries::notes::save_note(self.db()?, self.codec.as_ref(), note).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notewell_codec_json::JsonBodyCodec;
    use notewell_core::NoteBody;
    use tempfile::tempdir;

    fn make_store(path: &str) -> SqliteNoteStore {
        let config = StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        };
        SqliteNoteStore::new(config, Arc::new(JsonBodyCodec::new()))
    }

    #[tokio::test]
    async fn initialize_opens_database_at_configured_path() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("init_test.db");
        let store = make_store(db_path.to_str().unwrap());

        store.initialize().await.unwrap();
        assert!(db_path.exists(), "database file should be created");
    }

    #[tokio::test]
    async fn initialize_twice_returns_error() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("double_init.db");
        let store = make_store(db_path.to_str().unwrap());

        store.initialize().await.unwrap();
        assert!(store.initialize().await.is_err());
    }

    #[tokio::test]
    async fn operations_fail_before_initialize() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("no_init.db");
        let store = make_store(db_path.to_str().unwrap());

        assert!(store.list_notes().await.is_err());
        assert!(store.close().await.is_err());
    }

    #[tokio::test]
    async fn full_note_lifecycle_through_store() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("lifecycle.db");
        let store = make_store(db_path.to_str().unwrap());
        store.initialize().await.unwrap();

        // First notebook gets pk 1.
        let work = store.save_notebook(&NoteBook::new("Work")).await.unwrap();
        assert_eq!(work.pk, Some(1));

        // First note gets pk 1, a fresh timestamp, and the notebook link.
        let mut note = Note::new("T1", NoteBody::from_plain("hello"));
        note.notebook = Some(work.clone());
        let saved = store.save_note(&note).await.unwrap();
        assert_eq!(saved.pk, Some(1));
        assert!(saved.last_updated > 0);

        // Joined read sees the filed note.
        let notes = store.list_notes().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].notebook.as_ref().map(|nb| nb.name.as_str()), Some("Work"));
        assert_eq!(notes[0].body.plain_text(), "hello");

        // Deleting the notebook trashes the note and unfiles it.
        store.delete_notebook(&work).await.unwrap();
        assert!(store.list_notebooks().await.unwrap().is_empty());
        let notes = store.list_notes().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].trash);
        assert!(notes[0].notebook.is_none());

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn combined_fetch_through_store() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("combined.db");
        let store = make_store(db_path.to_str().unwrap());
        store.initialize().await.unwrap();

        store.save_notebook(&NoteBook::new("Home")).await.unwrap();
        store
            .save_note(&Note::new("loose", NoteBody::from_plain("x")))
            .await
            .unwrap();

        let (notes, notebooks) = store.list_notes_and_notebooks().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notebooks.len(), 1);

        store.close().await.unwrap();
    }
}
