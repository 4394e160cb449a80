// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Notewell storage core.

use thiserror::Error;

/// The primary error type used across the Notewell trait seams and storage
/// operations.
#[derive(Debug, Error)]
pub enum NotewellError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, migration, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Body codec errors (encoding a note body for persistence, or decoding
    /// a stored blob back into a document).
    #[error("codec error: {message}")]
    Codec {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
