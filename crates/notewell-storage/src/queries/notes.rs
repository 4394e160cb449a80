// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Note CRUD operations: save with store-stamped timestamps, joined reads,
//! and the combined notes+notebooks fetch.

use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;
use tracing::{debug, error};

use notewell_core::{BodyCodec, NotewellError};

use crate::database::{Database, map_tr_err};
use crate::models::{Note, NoteBook};
use crate::queries::notebooks;

/// A notes row before body decoding, as read off the worker thread.
struct RawNoteRow {
    pk: i64,
    title: String,
    contents: Vec<u8>,
    trash: bool,
    pinned: bool,
    notebook_pk: Option<i64>,
    notebook_name: Option<String>,
    last_updated: i64,
}

/// All notes joined with their notebook, pinned first, then most recently
/// updated first. Notes with no notebook still appear, unfiled.
pub async fn list_notes(db: &Database, codec: &dyn BodyCodec) -> Result<Vec<Note>, NotewellError> {
    let rows = db
        .connection()
        .call(|conn| Ok(select_note_rows(conn)?))
        .await
        .map_err(map_tr_err)?;
    rows.into_iter().map(|row| decode_note(codec, row)).collect()
}

/// Notes and notebooks fetched within one submitted unit of work, so the two
/// lists are consistent as of the same point in the serialized timeline.
pub async fn list_notes_and_notebooks(
    db: &Database,
    codec: &dyn BodyCodec,
) -> Result<(Vec<Note>, Vec<NoteBook>), NotewellError> {
    let (rows, notebooks) = db
        .connection()
        .call(|conn| {
            let rows = select_note_rows(conn)?;
            let notebooks = notebooks::select_all(conn)?;
            Ok((rows, notebooks))
        })
        .await
        .map_err(map_tr_err)?;
    let notes = rows
        .into_iter()
        .map(|row| decode_note(codec, row))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((notes, notebooks))
}

/// Insert or update a note.
///
/// The body preview is derived from the body as of call time; the body is
/// then encoded through the codec and written in a single statement, with
/// `last_updated` stamped by the store (unix seconds), never taken from the
/// caller. Returns a new fully-populated note; the argument is never
/// mutated. Encode failures abort before anything is written.
pub async fn save_note(
    db: &Database,
    codec: &dyn BodyCodec,
    note: &Note,
) -> Result<Note, NotewellError> {
    let mut saved = note.clone();
    saved.body_preview = note.body.preview();

    let contents = codec.encode(&note.body).map_err(|e| {
        error!(pk = ?note.pk, title = %note.title, error = %e, "failed to encode note body");
        e
    })?;

    let pk = saved.pk;
    let title = saved.title.clone();
    let notebook_pk = saved.notebook.as_ref().and_then(|nb| nb.pk);
    let (trash, pinned) = (saved.trash, saved.pinned);

    let (assigned_pk, stamped) = db
        .connection()
        .call(move |conn| {
            let now = unix_now();
            match pk {
                Some(id) => {
                    conn.execute(
                        "UPDATE notes
                         SET notebook_id = ?1, title = ?2, note_contents = ?3,
                             is_in_trash = ?4, is_pinned = ?5, last_updated = ?6
                         WHERE id = ?7",
                        params![notebook_pk, title, contents, trash, pinned, now, id],
                    )?;
                    Ok((id, now))
                }
                None => {
                    conn.execute(
                        "INSERT INTO notes
                         (notebook_id, title, note_contents, is_in_trash, is_pinned, last_updated)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                        params![notebook_pk, title, contents, trash, pinned, now],
                    )?;
                    Ok((conn.last_insert_rowid(), now))
                }
            }
        })
        .await
        .map_err(|e| {
            error!(pk = ?note.pk, title = %note.title, error = %e, "failed to store note");
            map_tr_err(e)
        })?;

    saved.pk = Some(assigned_pk);
    saved.last_updated = stamped;
    debug!(pk = assigned_pk, "saved note");
    Ok(saved)
}

fn select_note_rows(conn: &rusqlite::Connection) -> Result<Vec<RawNoteRow>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT n.id, n.title, n.note_contents, n.is_in_trash, n.is_pinned,
                nb.id, nb.name, n.last_updated
         FROM notes n
         LEFT OUTER JOIN notebooks nb ON n.notebook_id = nb.id
         ORDER BY n.is_pinned DESC, n.last_updated DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(RawNoteRow {
            pk: row.get(0)?,
            title: row.get(1)?,
            contents: row.get(2)?,
            trash: row.get(3)?,
            pinned: row.get(4)?,
            notebook_pk: row.get(5)?,
            notebook_name: row.get(6)?,
            last_updated: row.get(7)?,
        })
    })?;
    rows.collect()
}

fn decode_note(codec: &dyn BodyCodec, row: RawNoteRow) -> Result<Note, NotewellError> {
    let body = codec.decode(&row.contents).map_err(|e| {
        error!(pk = row.pk, title = %row.title, error = %e, "failed to decode stored note body");
        e
    })?;
    let notebook = match (row.notebook_pk, row.notebook_name) {
        (Some(pk), Some(name)) => Some(NoteBook { pk: Some(pk), name }),
        _ => None,
    };
    let body_preview = body.preview();
    Ok(Note {
        pk: Some(row.pk),
        title: row.title,
        body,
        notebook,
        trash: row.trash,
        pinned: row.pinned,
        last_updated: row.last_updated,
        body_preview,
    })
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        // The system clock predating 1970 is not a supported configuration.
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
