// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-bounded output buffer for replace.

use crate::error::{RegexpError, Result};

/// Growing output that refuses to exceed an optional byte budget.
///
/// The projected length is checked before anything is appended, and the
/// buffer never reserves capacity past the budget.
#[derive(Debug, Default)]
pub struct OutputGuard {
    buf: Vec<u8>,
    limit: Option<usize>,
}

impl OutputGuard {
    pub fn new(limit: Option<usize>) -> Self {
        Self { buf: Vec::new(), limit }
    }

    /// Append `bytes`, or fail without modifying the buffer.
    pub fn push(&mut self, bytes: &[u8]) -> Result<()> {
        let projected = self.buf.len().saturating_add(bytes.len());
        if let Some(limit) = self.limit {
            if projected > limit {
                tracing::debug!("replace output would reach {projected} bytes, limit is {limit}");
                return Err(RegexpError::ResourceExceeded { limit });
            }
            if projected > self.buf.capacity() {
                let target = self.buf.capacity().saturating_mul(2).max(projected).min(limit);
                self.buf.reserve_exact(target - self.buf.len());
            }
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
