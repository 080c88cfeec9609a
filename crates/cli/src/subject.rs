// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Encoding modes and the subject values patterns are applied to.

use serde::{Deserialize, Serialize};

/// How positions are counted and how patterns interpret the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// UTF-8 text; positions count codepoints.
    #[default]
    Utf8Text,
    /// Raw bytes; positions count bytes.
    RawBytes,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Utf8Text => f.write_str("STRING"),
            Encoding::RawBytes => f.write_str("BYTES"),
        }
    }
}

/// A borrowed input value. The engine never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject<'a> {
    bytes: &'a [u8],
    encoding: Encoding,
}

impl<'a> Subject<'a> {
    /// A text value.
    pub fn text(s: &'a str) -> Self {
        Self { bytes: s.as_bytes(), encoding: Encoding::Utf8Text }
    }

    /// A text value whose bytes may not be valid UTF-8.
    pub fn text_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes, encoding: Encoding::Utf8Text }
    }

    /// A bytes value.
    pub fn bytes(bytes: &'a [u8]) -> Self {
        Self { bytes, encoding: Encoding::RawBytes }
    }

    pub fn new(bytes: &'a [u8], encoding: Encoding) -> Self {
        Self { bytes, encoding }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
