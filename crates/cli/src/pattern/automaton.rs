// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The matching capability the engine is layered on.
//!
//! Any backend that can report the leftmost match (with capture spans) at
//! or after a byte offset can drive the engine.

use std::fmt::Debug;

/// A half-open byte range `[start, end)` into a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes this span covers in `haystack`.
    pub fn slice<'h>(&self, haystack: &'h [u8]) -> &'h [u8] {
        &haystack[self.start..self.end]
    }
}

/// Spans of the last match: index 0 is the whole match, 1.. are groups.
///
/// A `None` entry is a group that did not participate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSpans {
    spans: Vec<Option<MatchSpan>>,
}

impl CaptureSpans {
    /// Clear all spans and size the table for `slots` entries.
    pub fn reset(&mut self, slots: usize) {
        self.spans.clear();
        self.spans.resize(slots, None);
    }

    pub fn set(&mut self, index: usize, span: Option<MatchSpan>) {
        if index >= self.spans.len() {
            self.spans.resize(index + 1, None);
        }
        self.spans[index] = span;
    }

    pub fn get(&self, index: usize) -> Option<MatchSpan> {
        self.spans.get(index).copied().flatten()
    }

    /// Span of the overall match.
    pub fn whole(&self) -> Option<MatchSpan> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// A compiled matcher. Implementations must be immutable after construction.
pub trait Automaton: Send + Sync + Debug {
    /// Number of capturing groups, not counting the whole match.
    fn capture_group_count(&self) -> usize;

    /// Find the leftmost match starting at or after `start`.
    ///
    /// Assertions such as `^` and `\b` see the entire haystack, not just the
    /// part after `start`. On success `spans` holds the whole match and
    /// every group; on failure its contents are unspecified.
    fn find_at(&self, haystack: &[u8], start: usize, spans: &mut CaptureSpans) -> bool;

    /// Whether some match covers the haystack from its first to its last byte.
    fn is_full_match(&self, haystack: &[u8]) -> bool;
}
