// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded database migrations using refinery.
//!
//! SQL migration files are compiled into the binary at build time via
//! `embed_migrations!`. Migrations run automatically on database open.
//! Refinery tracks applied migrations in its own history table, so reopening
//! an existing database is a no-op while any genuine failure (disk full,
//! permissions, corrupt file) propagates as a fatal open error.

use notewell_core::NotewellError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Run all pending migrations against the given connection.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), NotewellError> {
    embedded::migrations::runner()
        .run(conn)
        .map_err(|e| NotewellError::Storage {
            source: Box::new(e),
        })?;
    Ok(())
}
