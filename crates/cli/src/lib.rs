// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regular-expression evaluation for SQL pattern functions.
//!
//! Implements `REGEXP_CONTAINS`, `REGEXP_MATCH`, `REGEXP_EXTRACT`,
//! `REGEXP_EXTRACT_ALL` and `REGEXP_REPLACE` over two domains:
//! - STRING values: UTF-8 text, positions counted in codepoints
//! - BYTES values: raw bytes, positions counted in bytes
//!
//! Compile a pattern once with [`CompiledPattern::compile`], then apply it
//! to any number of [`Subject`]s, from any number of threads.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod offset;
pub mod pattern;
pub mod subject;

#[cfg(test)]
pub mod test_utils;

pub use engine::{ExtractAll, ExtractCursor, ExtractStep, OutputGuard};
pub use error::{ErrorKind, RegexpError, Result};
pub use pattern::{Automaton, CaptureSpans, CompileOptions, CompiledPattern, MatchSpan};
pub use subject::{Encoding, Subject};
