// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Global replace.

use super::guard::OutputGuard;
use super::template::Template;
use crate::error::Result;
use crate::offset::unit_width;
use crate::pattern::{CaptureSpans, CompiledPattern};
use crate::subject::Subject;

impl CompiledPattern {
    /// Replace every non-overlapping match in `subject` with `template`.
    ///
    /// An empty match that touches the end of the previous match is not
    /// replaced; the unit after it is copied instead, so an empty pattern
    /// over N units inserts the template N+1 times. When
    /// `max_output_bytes` is set, exceeding it fails the whole call.
    pub fn replace(
        &self,
        subject: Subject<'_>,
        template: &[u8],
        max_output_bytes: Option<usize>,
    ) -> Result<Vec<u8>> {
        self.check_subject(&subject)?;
        let template = Template::parse(template, self.capture_group_count())?;

        let bytes = subject.as_bytes();
        let len = bytes.len();
        let mut out = OutputGuard::new(max_output_bytes);
        let mut spans = CaptureSpans::default();
        let mut pos = 0;
        let mut last_end = None;

        while pos <= len && self.automaton().find_at(bytes, pos, &mut spans) {
            let Some(whole) = spans.whole() else {
                break;
            };
            if whole.is_empty() && last_end == Some(whole.start) {
                if whole.start >= len {
                    break;
                }
                let next = whole.start + unit_width(&subject, whole.start);
                out.push(&bytes[pos..next])?;
                pos = next;
                continue;
            }
            out.push(&bytes[pos..whole.start])?;
            template.expand(bytes, &spans, &mut out)?;
            pos = whole.end;
            last_end = Some(whole.end);
        }
        if pos < len {
            out.push(&bytes[pos..])?;
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
