// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Notewell note-taking core.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, and typed CRUD operations for
//! notebooks and notes with soft-delete (trash), pinning, and pluggable
//! rich-text body encoding.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod store;
pub mod writer;

pub use database::Database;
pub use models::*;
pub use store::SqliteNoteStore;
