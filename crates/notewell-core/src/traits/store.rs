// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage seam consumed by UI collaborators.

use async_trait::async_trait;

use crate::error::NotewellError;
use crate::types::{Note, NoteBook};

/// Async repository API over notes and notebooks.
///
/// Every operation is submitted to a single serialized worker that owns the
/// storage connection; the returned future resolves once the unit of work
/// has run. A resolved future means the operation is durably committed; a
/// failed future means nothing was committed.
#[async_trait]
pub trait NoteStore: Send + Sync + 'static {
    /// Initializes the backend (directory creation, connection, migrations).
    async fn initialize(&self) -> Result<(), NotewellError>;

    /// Flushes pending writes and releases the backend.
    async fn close(&self) -> Result<(), NotewellError>;

    /// Insert or update a notebook. Returns a new value carrying the
    /// store-assigned identifier; the argument is never mutated.
    async fn save_notebook(&self, notebook: &NoteBook) -> Result<NoteBook, NotewellError>;

    /// Delete a notebook, moving its notes to trash first. Deleting a
    /// notebook that no longer exists is logged but not an error.
    async fn delete_notebook(&self, notebook: &NoteBook) -> Result<(), NotewellError>;

    /// All notebooks, in natural table order.
    async fn list_notebooks(&self) -> Result<Vec<NoteBook>, NotewellError>;

    /// All notes with their notebook (if any), pinned first, then most
    /// recently updated first.
    async fn list_notes(&self) -> Result<Vec<Note>, NotewellError>;

    /// Notes and notebooks read within one unit of work, so the two lists
    /// are consistent with each other.
    async fn list_notes_and_notebooks(
        &self,
    ) -> Result<(Vec<Note>, Vec<NoteBook>), NotewellError>;

    /// Insert or update a note, stamping `last_updated`. Returns a new
    /// fully-populated value; the argument is never mutated.
    async fn save_note(&self, note: &Note) -> Result<Note, NotewellError>;
}
