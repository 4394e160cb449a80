// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Notewell storage core.
//!
//! This crate provides the domain types, the error type, and the trait
//! seams (`BodyCodec`, `NoteStore`) used throughout the Notewell workspace.
//! The persistence implementation lives in `notewell-storage`.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::NotewellError;
pub use traits::{BodyCodec, NoteStore};
pub use types::{FormatRun, Note, NoteBody, NoteBook, TextStyle};
