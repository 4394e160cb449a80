// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-writer documentation and enforcement.
//!
//! All storage operations in notewell-storage are serialized through
//! `tokio-rusqlite`'s single background thread. The `Database` struct IS the
//! serialized executor. Query modules accept `&Database` and call through
//! `connection().call()`.
//!
//! **Do NOT create additional Connection instances for the same file.**

// The single-writer pattern is enforced by design:
// - `Database` wraps a single `tokio_rusqlite::Connection`
// - All query functions accept `&Database` and use `database.connection().call()`
// - tokio-rusqlite executes all submitted closures on one background thread,
//   in submission (FIFO) order
// - This eliminates read/write races and SQLITE_BUSY errors under concurrent
//   callers without any explicit locking
