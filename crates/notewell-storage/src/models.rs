// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `notewell-core::types` for use across
//! the trait seams. This module re-exports them for convenience within the
//! storage crate.

pub use notewell_core::types::{Note, NoteBody, NoteBook};
