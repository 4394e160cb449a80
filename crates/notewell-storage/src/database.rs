// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All access is serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for the same file.

use std::path::Path;
use std::time::Duration;

use tokio_rusqlite::Connection;
use tracing::{debug, info};

use notewell_core::NotewellError;

use crate::migrations;

/// Bounded wait for lock acquisition when an external process holds the
/// database file.
const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle to the single serialized SQLite connection.
///
/// Wraps a `tokio_rusqlite::Connection`: one dedicated background thread owns
/// the underlying `rusqlite::Connection` and executes submitted closures one
/// at a time in FIFO order.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if absent) the database at `path` with WAL enabled.
    pub async fn open(path: &str) -> Result<Self, NotewellError> {
        Self::open_with(path, true).await
    }

    /// Open the database at `path`, creating the parent directory and schema
    /// if absent.
    ///
    /// Unlike a plain create-table-and-ignore-errors scheme, migration
    /// failures here are fatal: only "already applied" is silently skipped.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, NotewellError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| NotewellError::Storage {
                    source: Box::new(e),
                })?;
            }
        }

        let conn = Connection::open(path.to_owned())
            .await
            .map_err(|e| map_tr_err(e.into()))?;
        conn.call(move |conn| {
            conn.busy_timeout(BUSY_TIMEOUT)
                .map_err(|e| NotewellError::Storage {
                    source: Box::new(e),
                })?;
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL").map_err(|e| {
                    NotewellError::Storage {
                        source: Box::new(e),
                    }
                })?;
            }
            migrations::run_migrations(conn)
        })
        .await
        .map_err(|e| match e {
            tokio_rusqlite::Error::Error(e) => e,
            e => NotewellError::Storage {
                source: Box::new(e),
            },
        })?;

        info!(path, "database open, schema current");
        Ok(Self { conn })
    }

    /// The serialized connection; all queries go through `connection().call()`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoint the WAL and shut down the worker thread.
    pub async fn close(self) -> Result<(), NotewellError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        self.conn.close().await.map_err(map_tr_err)
    }
}

/// Map a tokio-rusqlite error into the workspace error type.
pub fn map_tr_err(e: tokio_rusqlite::Error) -> NotewellError {
    NotewellError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_file_and_parent_directory() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested/data/notewell.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        assert!(db_path.exists(), "database file should be created");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");

        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();

        // Second open must not fail on the already-created schema.
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        let count: i64 = db
            .connection()
            .call(|conn| {
                Ok::<_, rusqlite::Error>(conn.query_row(
                    "SELECT COUNT(*) FROM notebooks",
                    [],
                    |row| row.get(0),
                )?)
            })
            .await
            .unwrap();
        assert_eq!(count, 0);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_unwritable_path_fails() {
        // A plain file where the storage directory should be.
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let db_path = blocker.join("notewell.db");
        let result = Database::open(db_path.to_str().unwrap()).await;
        assert!(result.is_err(), "open should propagate filesystem errors");
    }
}
