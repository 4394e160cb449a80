// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Body codec capability: converts between an in-memory rich-text document
//! and its persisted byte representation.

use crate::error::NotewellError;
use crate::types::NoteBody;

/// Converts note bodies to and from the opaque blob stored in the database.
///
/// The storage core treats the persisted form as a black box; the codec owns
/// forward/backward compatibility of stored notes. Implementations must be
/// pure with respect to the body: `decode(encode(b))` yields a body
/// behaviorally equivalent to `b`.
pub trait BodyCodec: Send + Sync + 'static {
    /// Serialize a body for persistence.
    fn encode(&self, body: &NoteBody) -> Result<Vec<u8>, NotewellError>;

    /// Reconstruct a body from its persisted form.
    fn decode(&self, bytes: &[u8]) -> Result<NoteBody, NotewellError>;
}
