// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON implementation of the Notewell body codec.
//!
//! Stores note bodies as a versioned JSON envelope so the on-disk format can
//! evolve without breaking previously saved notes. The storage core only
//! sees opaque bytes; this crate owns the encoding.

use serde::{Deserialize, Serialize};

use notewell_core::{BodyCodec, NoteBody, NotewellError};

/// Envelope format version written by this codec.
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    body: NoteBody,
}

/// Body codec persisting bodies as versioned JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBodyCodec;

impl JsonBodyCodec {
    pub fn new() -> Self {
        Self
    }
}

impl BodyCodec for JsonBodyCodec {
    fn encode(&self, body: &NoteBody) -> Result<Vec<u8>, NotewellError> {
        let envelope = Envelope {
            version: FORMAT_VERSION,
            body: body.clone(),
        };
        serde_json::to_vec(&envelope).map_err(|e| NotewellError::Codec {
            message: "failed to encode note body".to_string(),
            source: Some(Box::new(e)),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<NoteBody, NotewellError> {
        let envelope: Envelope =
            serde_json::from_slice(bytes).map_err(|e| NotewellError::Codec {
                message: "failed to decode stored note body".to_string(),
                source: Some(Box::new(e)),
            })?;
        if envelope.version > FORMAT_VERSION {
            return Err(NotewellError::Codec {
                message: format!(
                    "stored note body uses format version {} (this build reads up to {FORMAT_VERSION})",
                    envelope.version
                ),
                source: None,
            });
        }
        Ok(envelope.body)
    }
}
