// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notebook CRUD operations.

use rusqlite::params;
use tracing::{debug, error, info};

use notewell_core::NotewellError;

use crate::database::{Database, map_tr_err};
use crate::models::NoteBook;

/// Insert or update a notebook.
///
/// A notebook without a pk is inserted; the returned value carries the
/// store-assigned identifier. A notebook with a pk is updated in place.
/// The argument is never mutated.
pub async fn save_notebook(db: &Database, notebook: &NoteBook) -> Result<NoteBook, NotewellError> {
    let notebook = notebook.clone();
    db.connection()
        .call(move |conn| match notebook.pk {
            Some(pk) => {
                conn.execute(
                    "UPDATE notebooks SET name = ?1 WHERE id = ?2",
                    params![notebook.name, pk],
                )?;
                Ok(notebook)
            }
            None => {
                conn.execute(
                    "INSERT INTO notebooks (name) VALUES (?1)",
                    params![notebook.name],
                )?;
                let pk = conn.last_insert_rowid();
                debug!(pk, name = %notebook.name, "created notebook");
                Ok(NoteBook {
                    pk: Some(pk),
                    ..notebook
                })
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a notebook, soft-deleting its notes first.
///
/// One transaction: every note referencing the notebook is moved to trash
/// and unfiled, then the notebook row is removed. A missing notebook row is
/// logged as an error but does not fail the operation.
pub async fn delete_notebook(db: &Database, notebook: &NoteBook) -> Result<(), NotewellError> {
    let Some(pk) = notebook.pk else {
        error!(name = %notebook.name, "can't delete a notebook that was never saved");
        return Ok(());
    };
    let name = notebook.name.clone();
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let moved = tx.execute(
                "UPDATE notes SET is_in_trash = 1, notebook_id = NULL
                 WHERE notebook_id = ?1",
                params![pk],
            )?;
            info!(moved, "moved notes to trash");

            let deleted = tx.execute("DELETE FROM notebooks WHERE id = ?1", params![pk])?;
            tx.commit()?;

            if deleted > 0 {
                info!(pk, name = %name, "deleted notebook");
            } else {
                error!(pk, name = %name, "didn't find notebook to delete");
            }
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// All notebooks, in natural table order.
pub async fn list_notebooks(db: &Database) -> Result<Vec<NoteBook>, NotewellError> {
    db.connection()
        .call(|conn| Ok(select_all(conn)?))
        .await
        .map_err(map_tr_err)
}

/// Shared SELECT used by [`list_notebooks`] and the combined notes+notebooks
/// read in `queries::notes`.
pub(crate) fn select_all(conn: &rusqlite::Connection) -> Result<Vec<NoteBook>, rusqlite::Error> {
    let mut stmt = conn.prepare("SELECT id, name FROM notebooks")?;
    let rows = stmt.query_map([], |row| {
        Ok(NoteBook {
            pk: Some(row.get(0)?),
            name: row.get(1)?,
        })
    })?;
    rows.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    async fn count_notebooks(db: &Database) -> i64 {
        db.connection()
            .call(|conn| {
                Ok::<_, rusqlite::Error>(conn.query_row(
                    "SELECT COUNT(*) FROM notebooks",
                    [],
                    |row| row.get(0),
                )?)
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn first_insert_assigns_pk_one() {
        let (db, _dir) = setup_db().await;

        let transient = NoteBook::new("Work");
        let saved = save_notebook(&db, &transient).await.unwrap();
        assert_eq!(saved.pk, Some(1));
        assert_eq!(saved.name, "Work");
        // Caller's value is untouched.
        assert!(transient.pk.is_none());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn inserts_assign_strictly_increasing_pks() {
        let (db, _dir) = setup_db().await;

        let a = save_notebook(&db, &NoteBook::new("A")).await.unwrap();
        let b = save_notebook(&db, &NoteBook::new("B")).await.unwrap();
        let c = save_notebook(&db, &NoteBook::new("C")).await.unwrap();
        assert!(a.pk < b.pk && b.pk < c.pk);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn save_with_pk_updates_in_place() {
        let (db, _dir) = setup_db().await;

        let saved = save_notebook(&db, &NoteBook::new("Work")).await.unwrap();
        let renamed = NoteBook {
            name: "Projects".to_string(),
            ..saved.clone()
        };
        let updated = save_notebook(&db, &renamed).await.unwrap();
        assert_eq!(updated.pk, saved.pk);

        let all = list_notebooks(&db).await.unwrap();
        assert_eq!(all.len(), 1, "update must not create a second row");
        assert_eq!(all[0].name, "Projects");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_returns_all_notebooks() {
        let (db, _dir) = setup_db().await;

        for name in ["Work", "Home", "Recipes"] {
            save_notebook(&db, &NoteBook::new(name)).await.unwrap();
        }
        let all = list_notebooks(&db).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|nb| nb.pk.is_some()));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_notebook_row() {
        let (db, _dir) = setup_db().await;

        let saved = save_notebook(&db, &NoteBook::new("Work")).await.unwrap();
        delete_notebook(&db, &saved).await.unwrap();

        assert!(list_notebooks(&db).await.unwrap().is_empty());
        assert_eq!(count_notebooks(&db).await, 0);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_notebook_is_not_an_error() {
        let (db, _dir) = setup_db().await;

        let phantom = NoteBook {
            pk: Some(42),
            name: "gone".to_string(),
        };
        delete_notebook(&db, &phantom).await.unwrap();

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_transient_notebook_is_not_an_error() {
        let (db, _dir) = setup_db().await;
        delete_notebook(&db, &NoteBook::new("never saved"))
            .await
            .unwrap();
        db.close().await.unwrap();
    }
}
