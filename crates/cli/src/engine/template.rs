// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replacement templates with `\N` backreferences.

use super::guard::OutputGuard;
use crate::error::{RegexpError, Result};
use crate::pattern::CaptureSpans;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'t> {
    Literal(&'t [u8]),
    Group(usize),
}

/// A validated template, split into literal runs and group references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template<'t> {
    pieces: Vec<Piece<'t>>,
}

impl<'t> Template<'t> {
    /// Parse `template` against a pattern with `groups` capture groups.
    ///
    /// `\0`..`\9` reference groups, `\\` is a literal backslash. Any other
    /// escape, or a trailing backslash, is rejected, as is a reference past
    /// the last group.
    pub(crate) fn parse(template: &'t [u8], groups: usize) -> Result<Self> {
        let mut pieces = Vec::new();
        let mut rest = 0;
        while let Some(found) = memchr::memchr(b'\\', &template[rest..]) {
            let at = rest + found;
            if at > rest {
                pieces.push(Piece::Literal(&template[rest..at]));
            }
            match template.get(at + 1) {
                Some(&b'\\') => pieces.push(Piece::Literal(b"\\")),
                Some(&d) if d.is_ascii_digit() => {
                    let index = usize::from(d - b'0');
                    if index > groups {
                        return Err(RegexpError::InvalidBackreference { index, groups });
                    }
                    pieces.push(Piece::Group(index));
                }
                _ => return Err(RegexpError::InvalidEscapeSequence { offset: at }),
            }
            rest = at + 2;
        }
        if rest < template.len() {
            pieces.push(Piece::Literal(&template[rest..]));
        }
        Ok(Self { pieces })
    }

    #[cfg(test)]
    pub(crate) fn pieces(&self) -> &[Piece<'t>] {
        &self.pieces
    }

    /// Append the expansion for one match to `out`.
    ///
    /// Groups that did not participate expand to nothing.
    pub(crate) fn expand(
        &self,
        haystack: &[u8],
        spans: &CaptureSpans,
        out: &mut OutputGuard,
    ) -> Result<()> {
        for piece in &self.pieces {
            match *piece {
                Piece::Literal(bytes) => out.push(bytes)?,
                Piece::Group(index) => {
                    if let Some(span) = spans.get(index) {
                        out.push(span.slice(haystack))?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
