// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules over the serialized connection.

pub mod notebooks;
pub mod notes;
