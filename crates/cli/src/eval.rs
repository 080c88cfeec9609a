// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of a single SQL pattern function call.
//!
//! Binds an [`Operation`] and its arguments to a compiled pattern, and runs
//! it over one subject or, in parallel, over many subjects sharing the
//! same pattern.

use rayon::prelude::*;
use serde_json::{Value, json};

use crate::error::Result;
use crate::pattern::CompiledPattern;
use crate::subject::{Encoding, Subject};

/// A pattern function and its non-subject arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Contains,
    Match,
    Extract { position: i64, occurrence: i64 },
    ExtractAll,
    Replace { template: Vec<u8>, max_output_bytes: Option<usize> },
}

impl Operation {
    /// SQL function name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Contains => "REGEXP_CONTAINS",
            Operation::Match => "REGEXP_MATCH",
            Operation::Extract { .. } => "REGEXP_EXTRACT",
            Operation::ExtractAll => "REGEXP_EXTRACT_ALL",
            Operation::Replace { .. } => "REGEXP_REPLACE",
        }
    }
}

/// Result of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Bool(bool),
    /// A possibly-null value.
    Value(Option<Vec<u8>>),
    Values(Vec<Vec<u8>>),
}

/// Run `op` over a single subject.
pub fn evaluate(op: &Operation, pattern: &CompiledPattern, subject: Subject<'_>) -> Result<Outcome> {
    Ok(match op {
        Operation::Contains => Outcome::Bool(pattern.contains(subject)?),
        Operation::Match => Outcome::Bool(pattern.matches(subject)?),
        Operation::Extract { position, occurrence } => Outcome::Value(
            pattern.extract(subject, *position, *occurrence)?.map(<[u8]>::to_vec),
        ),
        Operation::ExtractAll => {
            Outcome::Values(pattern.extract_all(subject)?.map(<[u8]>::to_vec).collect())
        }
        Operation::Replace { template, max_output_bytes } => {
            Outcome::Value(Some(pattern.replace(subject, template, *max_output_bytes)?))
        }
    })
}

/// Run `op` over many subjects in parallel, preserving input order.
pub fn evaluate_batch(
    op: &Operation,
    pattern: &CompiledPattern,
    subjects: &[&[u8]],
) -> Vec<Result<Outcome>> {
    let encoding = pattern.encoding();
    subjects
        .par_iter()
        .map(|bytes| evaluate(op, pattern, Subject::new(bytes, encoding)))
        .collect()
}

/// Render a value for display: text lossily, bytes with ASCII escapes.
pub fn render_bytes(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8Text => String::from_utf8_lossy(bytes).into_owned(),
        Encoding::RawBytes => bytes.escape_ascii().to_string(),
    }
}

/// Plain-text rendering. Nulls print as `NULL`, arrays one value per line.
pub fn render_text(outcome: &Outcome, encoding: Encoding) -> String {
    match outcome {
        Outcome::Bool(b) => b.to_string(),
        Outcome::Value(None) => "NULL".to_string(),
        Outcome::Value(Some(v)) => render_bytes(v, encoding),
        Outcome::Values(values) => values
            .iter()
            .map(|v| render_bytes(v, encoding))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// One-line rendering for batches, so output lines follow input lines.
///
/// Arrays print as compact JSON lists (`[]` when empty).
pub fn render_line(outcome: &Outcome, encoding: Encoding) -> String {
    match outcome {
        Outcome::Values(_) => render_json(outcome, encoding).to_string(),
        _ => render_text(outcome, encoding),
    }
}

/// JSON rendering. Nulls are `null`, arrays are JSON arrays.
pub fn render_json(outcome: &Outcome, encoding: Encoding) -> Value {
    match outcome {
        Outcome::Bool(b) => json!(b),
        Outcome::Value(None) => Value::Null,
        Outcome::Value(Some(v)) => json!(render_bytes(v, encoding)),
        Outcome::Values(values) => {
            Value::Array(values.iter().map(|v| json!(render_bytes(v, encoding))).collect())
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
