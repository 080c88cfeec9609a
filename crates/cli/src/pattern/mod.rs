// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation.
//!
//! A [`CompiledPattern`] owns an [`Automaton`], the encoding it was compiled
//! for and its capture group count. It is immutable and can be shared
//! across threads; the operations live in [`crate::engine`].

pub mod automaton;
pub mod backend;

pub use automaton::{Automaton, CaptureSpans, MatchSpan};
pub use backend::RegexAutomaton;

use crate::error::{RegexpError, Result};
use crate::subject::{Encoding, Subject};

/// Knobs for the default backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Upper bound on the compiled program size, in bytes.
    pub size_limit: Option<usize>,
}

/// A pattern ready to be applied to subjects of one encoding.
#[derive(Debug)]
pub struct CompiledPattern {
    automaton: Box<dyn Automaton>,
    encoding: Encoding,
    capture_group_count: usize,
}

impl CompiledPattern {
    /// Compile with the default backend and options.
    pub fn compile(pattern: &[u8], encoding: Encoding) -> Result<Self> {
        Self::compile_with(pattern, encoding, &CompileOptions::default())
    }

    /// Compile with the default backend.
    ///
    /// Syntax errors, invalid UTF-8 in a text pattern and oversized
    /// programs are all reported as [`RegexpError::InvalidPattern`].
    pub fn compile_with(
        pattern: &[u8],
        encoding: Encoding,
        options: &CompileOptions,
    ) -> Result<Self> {
        let automaton = RegexAutomaton::compile(pattern, encoding, options)?;
        let compiled = Self::with_automaton(Box::new(automaton), encoding);
        tracing::debug!(
            "compiled {} pattern {:?} with {} capture group(s)",
            encoding,
            String::from_utf8_lossy(pattern),
            compiled.capture_group_count
        );
        Ok(compiled)
    }

    /// Wrap an already-built automaton.
    pub fn with_automaton(automaton: Box<dyn Automaton>, encoding: Encoding) -> Self {
        let capture_group_count = automaton.capture_group_count();
        Self { automaton, encoding, capture_group_count }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn capture_group_count(&self) -> usize {
        self.capture_group_count
    }

    pub(crate) fn automaton(&self) -> &dyn Automaton {
        self.automaton.as_ref()
    }

    /// Reject subjects whose encoding differs from the pattern's.
    pub(crate) fn check_subject(&self, subject: &Subject<'_>) -> Result<()> {
        if subject.encoding() == self.encoding {
            Ok(())
        } else {
            Err(RegexpError::encoding_mismatch(self.encoding, subject.encoding()))
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
