// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the storage core and its collaborators.

pub mod codec;
pub mod store;

pub use codec::BodyCodec;
pub use store::NoteStore;
