// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-value and streaming extraction.
//!
//! Both walk the same chain of matches: after a non-empty match the next
//! search resumes at its end, after an empty match it resumes one unit
//! later. A search never starts at the end of a non-empty subject; an empty
//! subject is searched exactly once.

use std::iter::FusedIterator;

use crate::error::{RegexpError, Result};
use crate::offset::{to_byte_offset, to_logical_position, unit_width};
use crate::pattern::{CaptureSpans, CompiledPattern};
use crate::subject::Subject;

/// Resumable position in a streaming extraction.
///
/// Cursors are plain values: each step consumes one and hands back the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractCursor<'s> {
    subject: Subject<'s>,
    offset: usize,
    finished: bool,
}

impl<'s> ExtractCursor<'s> {
    fn at(subject: Subject<'s>, offset: usize) -> Self {
        Self { subject, offset, finished: false }
    }

    pub fn subject(&self) -> Subject<'s> {
        self.subject
    }

    /// Byte offset the next search starts from.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Logical (1-based) position the next search starts from.
    pub fn position(&self) -> i64 {
        to_logical_position(&self.subject, self.offset)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Outcome of one streaming step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractStep<'s> {
    /// The next extracted value and the cursor to continue from.
    Item(&'s [u8], ExtractCursor<'s>),
    /// No further matches.
    Finished,
}

/// Iterator over every extracted value of a subject.
#[derive(Debug)]
pub struct ExtractAll<'p, 's> {
    pattern: &'p CompiledPattern,
    cursor: Option<ExtractCursor<'s>>,
}

impl<'s> Iterator for ExtractAll<'_, 's> {
    type Item = &'s [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        let (value, next) = self.pattern.advance(cursor)?;
        self.cursor = Some(next);
        Some(value.unwrap_or_default())
    }
}

impl FusedIterator for ExtractAll<'_, '_> {}

impl CompiledPattern {
    /// Extract the `occurrence`-th match counted from logical `position`.
    ///
    /// Returns the whole match, or the single capture group when the pattern
    /// has one. `None` means no such match, or a group that did not take
    /// part in it.
    pub fn extract<'s>(
        &self,
        subject: Subject<'s>,
        position: i64,
        occurrence: i64,
    ) -> Result<Option<&'s [u8]>> {
        self.check_subject(&subject)?;
        let start = to_byte_offset(&subject, position)?;
        if occurrence < 1 {
            return Err(RegexpError::InvalidArgument("occurrence must be positive".to_string()));
        }
        self.check_extract_groups()?;

        if start >= subject.len() && !(subject.is_empty() && position == 1) {
            return Ok(None);
        }

        let mut cursor = ExtractCursor::at(subject, start);
        let mut remaining = occurrence;
        while let Some((value, next)) = self.advance(cursor) {
            remaining -= 1;
            if remaining == 0 {
                return Ok(value);
            }
            cursor = next;
        }
        Ok(None)
    }

    /// Start a streaming extraction at the beginning of `subject`.
    pub fn extract_all_reset<'s>(&self, subject: Subject<'s>) -> ExtractCursor<'s> {
        ExtractCursor::at(subject, 0)
    }

    /// Advance a streaming extraction by one value.
    ///
    /// A capture group that did not participate yields an empty value.
    pub fn extract_all_next<'s>(&self, cursor: ExtractCursor<'s>) -> Result<ExtractStep<'s>> {
        self.check_subject(&cursor.subject)?;
        self.check_extract_groups()?;
        match self.advance(cursor) {
            Some((value, next)) => Ok(ExtractStep::Item(value.unwrap_or_default(), next)),
            None => {
                tracing::debug!("extraction finished at position {}", cursor.position());
                Ok(ExtractStep::Finished)
            }
        }
    }

    /// Iterate over every extracted value of `subject`.
    pub fn extract_all<'s>(&self, subject: Subject<'s>) -> Result<ExtractAll<'_, 's>> {
        self.check_subject(&subject)?;
        self.check_extract_groups()?;
        Ok(ExtractAll { pattern: self, cursor: Some(self.extract_all_reset(subject)) })
    }

    fn check_extract_groups(&self) -> Result<()> {
        match self.capture_group_count() {
            0 | 1 => Ok(()),
            count => Err(RegexpError::InvalidCaptureGroupCount { count }),
        }
    }

    /// Find the next match from `cursor`.
    ///
    /// Returns the extracted value (`None` for a non-participating group)
    /// and the cursor for the following search.
    fn advance<'s>(
        &self,
        cursor: ExtractCursor<'s>,
    ) -> Option<(Option<&'s [u8]>, ExtractCursor<'s>)> {
        if cursor.finished {
            return None;
        }
        let subject = cursor.subject;
        let bytes = subject.as_bytes();
        let mut spans = CaptureSpans::default();
        if !self.automaton().find_at(bytes, cursor.offset, &mut spans) {
            return None;
        }
        let whole = spans.whole()?;

        let len = bytes.len();
        let resume =
            if whole.is_empty() { whole.end + unit_width(&subject, whole.end) } else { whole.end };
        let finished = resume > len || (resume == len && len > 0);
        let next = ExtractCursor { subject, offset: resume.min(len), finished };

        let span = if self.capture_group_count() == 0 { Some(whole) } else { spans.get(1) };
        Some((span.map(|s| s.slice(bytes)), next))
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
