// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Notewell workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Maximum number of characters kept in a note's derived body preview.
pub const BODY_PREVIEW_MAX_CHARS: usize = 120;

/// A named grouping container for notes.
///
/// `pk` is `None` until the notebook has been persisted; the store assigns
/// the identifier on first insert and returns a new value carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBook {
    pub pk: Option<i64>,
    pub name: String,
}

impl NoteBook {
    /// Create a transient (not-yet-persisted) notebook.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            pk: None,
            name: name.into(),
        }
    }
}

/// Inline formatting applied to a span of body text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

/// A styled span within a note body, as byte offsets into the plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRun {
    pub start: usize,
    pub end: usize,
    pub style: TextStyle,
}

/// In-memory rich-text document of a note.
///
/// The storage core never inspects how a body is persisted; a
/// [`crate::BodyCodec`] converts between this type and the opaque blob
/// stored in the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBody {
    pub text: String,
    pub runs: Vec<FormatRun>,
}

impl NoteBody {
    /// Create a body from plain text with no formatting.
    pub fn from_plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    pub fn plain_text(&self) -> &str {
        &self.text
    }

    /// Derive the display preview: the first line of text, truncated to
    /// [`BODY_PREVIEW_MAX_CHARS`] characters.
    pub fn preview(&self) -> String {
        let first_line = self.text.lines().next().unwrap_or("");
        first_line.chars().take(BODY_PREVIEW_MAX_CHARS).collect()
    }
}

/// A titled document with a rich-text body, optional notebook association,
/// and pin/trash flags.
///
/// `last_updated` (unix seconds) is stamped by the store on every save and
/// never taken from the caller. `body_preview` is derived from the body and
/// is not source of truth; it is recomputed on both save and read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pk: Option<i64>,
    pub title: String,
    pub body: NoteBody,
    pub notebook: Option<NoteBook>,
    pub trash: bool,
    pub pinned: bool,
    pub last_updated: i64,
    pub body_preview: String,
}

impl Note {
    /// Create a transient note with the given title and body, unfiled and
    /// neither pinned nor trashed.
    pub fn new(title: impl Into<String>, body: NoteBody) -> Self {
        let body_preview = body.preview();
        Self {
            pk: None,
            title: title.into(),
            body,
            notebook: None,
            trash: false,
            pinned: false,
            last_updated: 0,
            body_preview,
        }
    }
}
