// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The pattern operations: containment, full match, extraction and replace.
//!
//! All operations are methods on [`CompiledPattern`] and are pure functions
//! of the pattern, the subject and their arguments. Only extraction over
//! all matches carries state, and that state lives in an [`ExtractCursor`]
//! owned by the caller.

mod extract;
mod guard;
mod replace;
mod template;

pub use extract::{ExtractAll, ExtractCursor, ExtractStep};
pub use guard::OutputGuard;

use crate::error::Result;
use crate::pattern::{CaptureSpans, CompiledPattern};
use crate::subject::Subject;

impl CompiledPattern {
    /// Whether the pattern matches anywhere in the subject.
    pub fn contains(&self, subject: Subject<'_>) -> Result<bool> {
        self.check_subject(&subject)?;
        let mut spans = CaptureSpans::default();
        Ok(self.automaton().find_at(subject.as_bytes(), 0, &mut spans))
    }

    /// Whether the pattern matches the entire subject.
    ///
    /// An empty pattern only matches an empty subject.
    pub fn matches(&self, subject: Subject<'_>) -> Result<bool> {
        self.check_subject(&subject)?;
        Ok(self.automaton().is_full_match(subject.as_bytes()))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
