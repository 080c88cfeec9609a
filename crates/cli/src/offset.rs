// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation between 1-based logical positions and byte offsets.
//!
//! Text subjects count codepoints, byte subjects count bytes. Text that is
//! not valid UTF-8 is tolerated: from the first undecodable byte onward,
//! every byte counts as one position.

use crate::error::{RegexpError, Result};
use crate::subject::{Encoding, Subject};

/// Map a 1-based logical position to a byte offset into the subject.
///
/// Positions past the end map to the subject length. Only `position < 1`
/// is an error.
pub fn to_byte_offset(subject: &Subject<'_>, position: i64) -> Result<usize> {
    if position < 1 {
        return Err(RegexpError::InvalidArgument("position must be positive".to_string()));
    }
    let len = subject.len();
    let skip = usize::try_from(position - 1).unwrap_or(usize::MAX);
    match subject.encoding() {
        Encoding::RawBytes => Ok(skip.min(len)),
        Encoding::Utf8Text => {
            let bytes = subject.as_bytes();
            let valid = valid_prefix(bytes);
            let chars = valid.char_indices().map(|(i, _)| i);
            Ok(chars.chain(valid.len()..len).nth(skip).unwrap_or(len))
        }
    }
}

/// Map a byte offset back to its 1-based logical position.
///
/// Offsets past the end are clamped to the subject length.
pub fn to_logical_position(subject: &Subject<'_>, byte_offset: usize) -> i64 {
    let offset = byte_offset.min(subject.len());
    let units = match subject.encoding() {
        Encoding::RawBytes => offset,
        Encoding::Utf8Text => {
            let valid = valid_prefix(subject.as_bytes());
            if offset <= valid.len() {
                valid.char_indices().take_while(|(i, _)| *i < offset).count()
            } else {
                valid.chars().count() + (offset - valid.len())
            }
        }
    };
    i64::try_from(units).unwrap_or(i64::MAX).saturating_add(1)
}

/// Width in bytes of the smallest encoding unit starting at `offset`.
///
/// Always at least one, so callers can use it to step past empty matches.
pub fn unit_width(subject: &Subject<'_>, offset: usize) -> usize {
    if subject.encoding() == Encoding::RawBytes {
        return 1;
    }
    let bytes = subject.as_bytes();
    let Some(&lead) = bytes.get(offset) else {
        return 1;
    };
    let width = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return 1,
    };
    match bytes.get(offset..offset + width) {
        Some(unit) if std::str::from_utf8(unit).is_ok() => width,
        _ => 1,
    }
}

/// The longest prefix of `bytes` that decodes as UTF-8.
fn valid_prefix(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(s) => s,
        // Slicing at valid_up_to always yields valid UTF-8.
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "offset_tests.rs"]
mod tests;
