// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy surfaced to the SQL evaluator.
//!
//! Every failure the engine can produce (pattern compilation, argument
//! validation, template validation, output budget) is mapped into
//! [`RegexpError`] before it leaves the crate.

use thiserror::Error;

use crate::subject::Encoding;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, RegexpError>;

/// Errors returned by pattern compilation and the pattern operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexpError {
    /// The pattern failed to compile.
    #[error("cannot parse regular expression: {message}")]
    InvalidPattern { message: String },

    /// Extraction was requested with a pattern that has more than one capturing group.
    #[error(
        "regular expressions passed into extraction functions must not have more than 1 \
         capturing group, found {count}"
    )]
    InvalidCaptureGroupCount { count: usize },

    /// A positional argument or the subject itself is unusable.
    #[error("{0}")]
    InvalidArgument(String),

    /// The replacement template names a group the pattern does not have.
    #[error(
        "replacement template references group {index}, but the regular expression only has \
         {groups} capturing group(s)"
    )]
    InvalidBackreference { index: usize, groups: usize },

    /// The replacement template contains a backslash not followed by a digit or backslash.
    #[error("invalid escape sequence in replacement template at byte {offset}")]
    InvalidEscapeSequence { offset: usize },

    /// The replacement result would exceed the configured output budget.
    #[error("replacement output exceeds the maximum of {limit} bytes")]
    ResourceExceeded { limit: usize },
}

/// Stable error categories consumed by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPattern,
    InvalidCaptureGroupCount,
    InvalidArgument,
    InvalidBackreference,
    ResourceExceeded,
}

impl ErrorKind {
    /// Snake-case name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidPattern => "invalid_pattern",
            ErrorKind::InvalidCaptureGroupCount => "invalid_capture_group_count",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::InvalidBackreference => "invalid_backreference",
            ErrorKind::ResourceExceeded => "resource_exceeded",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RegexpError {
    /// Classify the error into its taxonomy category.
    ///
    /// Malformed template escapes share the backreference category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegexpError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            RegexpError::InvalidCaptureGroupCount { .. } => ErrorKind::InvalidCaptureGroupCount,
            RegexpError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            RegexpError::InvalidBackreference { .. } | RegexpError::InvalidEscapeSequence { .. } => {
                ErrorKind::InvalidBackreference
            }
            RegexpError::ResourceExceeded { .. } => ErrorKind::ResourceExceeded,
        }
    }

    pub(crate) fn invalid_pattern(message: impl Into<String>) -> Self {
        RegexpError::InvalidPattern { message: message.into() }
    }

    pub(crate) fn encoding_mismatch(pattern: Encoding, subject: Encoding) -> Self {
        RegexpError::InvalidArgument(format!(
            "cannot apply a {pattern} pattern to a {subject} value"
        ))
    }
}

impl From<regex::Error> for RegexpError {
    fn from(err: regex::Error) -> Self {
        match err {
            regex::Error::Syntax(message) => RegexpError::InvalidPattern { message },
            regex::Error::CompiledTooBig(limit) => RegexpError::InvalidPattern {
                message: format!("pattern exceeds the compiled size limit of {limit} bytes"),
            },
            other => RegexpError::InvalidPattern { message: other.to_string() },
        }
    }
}

impl From<regex_syntax::Error> for RegexpError {
    fn from(err: regex_syntax::Error) -> Self {
        RegexpError::InvalidPattern { message: err.to_string() }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
