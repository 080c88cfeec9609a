// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default automaton backed by the `regex` crate.

use std::borrow::Cow;

use regex::bytes::{Regex, RegexBuilder};

use super::CompileOptions;
use super::automaton::{Automaton, CaptureSpans, MatchSpan};
use crate::error::{RegexpError, Result};
use crate::offset::unit_width;
use crate::subject::{Encoding, Subject};

/// Leftmost-first matcher with a separately anchored twin for full matches.
#[derive(Debug)]
pub struct RegexAutomaton {
    search: Regex,
    full: Regex,
    encoding: Encoding,
}

impl RegexAutomaton {
    /// Compile `pattern` for the given encoding.
    ///
    /// Text patterns must be UTF-8, get Unicode-aware classes and may only
    /// match valid UTF-8, so `(?-u:.)` is rejected. Byte patterns match
    /// single bytes and treat non-ASCII pattern bytes as literal bytes.
    pub fn compile(pattern: &[u8], encoding: Encoding, options: &CompileOptions) -> Result<Self> {
        let source = pattern_source(pattern, encoding)?;
        if encoding == Encoding::Utf8Text {
            regex_syntax::ParserBuilder::new().utf8(true).unicode(true).build().parse(&source)?;
        }
        let search = build(&source, encoding, options)?;
        let full = build_anchored(&source, encoding, options)?;
        Ok(Self { search, full, encoding })
    }
}

impl Automaton for RegexAutomaton {
    fn capture_group_count(&self) -> usize {
        self.search.captures_len().saturating_sub(1)
    }

    fn find_at(&self, haystack: &[u8], start: usize, spans: &mut CaptureSpans) -> bool {
        let mut locs = self.search.capture_locations();
        let mut at = start;
        loop {
            let Some(found) = self.search.captures_read_at(&mut locs, haystack, at) else {
                return false;
            };
            // Empty matches inside a codepoint (e.g. from `\B`) are skipped.
            if self.encoding == Encoding::Utf8Text
                && found.is_empty()
                && splits_codepoint(haystack, found.start())
            {
                at = found.start() + 1;
                continue;
            }
            break;
        }
        spans.reset(locs.len());
        for index in 0..locs.len() {
            spans.set(index, locs.get(index).map(|(s, e)| MatchSpan::new(s, e)));
        }
        true
    }

    fn is_full_match(&self, haystack: &[u8]) -> bool {
        self.full.is_match(haystack)
    }
}

/// Turn raw pattern bytes into the source string the regex parser accepts.
fn pattern_source(pattern: &[u8], encoding: Encoding) -> Result<Cow<'_, str>> {
    match encoding {
        Encoding::Utf8Text => std::str::from_utf8(pattern)
            .map(Cow::Borrowed)
            .map_err(|e| RegexpError::invalid_pattern(format!("pattern is not valid UTF-8: {e}"))),
        Encoding::RawBytes => Ok(escape_non_ascii(pattern)),
    }
}

/// Rewrite every non-ASCII byte as a `\xNN` escape.
///
/// With Unicode disabled the regex parser reads `\xNN` as a single byte, so
/// the pattern keeps its byte-for-byte meaning, including inside classes.
/// An escaped non-ASCII byte (`\` followed by it) is the byte itself.
pub(crate) fn escape_non_ascii(pattern: &[u8]) -> Cow<'_, str> {
    if let Ok(ascii) = std::str::from_utf8(pattern)
        && ascii.is_ascii()
    {
        return Cow::Borrowed(ascii);
    }
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < pattern.len() {
        let b = pattern[i];
        match (b, pattern.get(i + 1)) {
            (b'\\', Some(&next)) if next.is_ascii() => {
                out.push('\\');
                out.push(char::from(next));
                i += 2;
            }
            (b'\\', Some(&next)) => {
                push_byte_escape(&mut out, next);
                i += 2;
            }
            _ if b.is_ascii() => {
                out.push(char::from(b));
                i += 1;
            }
            _ => {
                push_byte_escape(&mut out, b);
                i += 1;
            }
        }
    }
    Cow::Owned(out)
}

/// Whether `offset` falls strictly inside a valid multi-byte codepoint.
fn splits_codepoint(haystack: &[u8], offset: usize) -> bool {
    let subject = Subject::text_bytes(haystack);
    (1..=3).any(|back| offset >= back && unit_width(&subject, offset - back) > back)
}

fn push_byte_escape(out: &mut String, b: u8) {
    out.push_str(&format!("\\x{b:02X}"));
}

fn build(source: &str, encoding: Encoding, options: &CompileOptions) -> Result<Regex> {
    let mut builder = RegexBuilder::new(source);
    builder.unicode(encoding == Encoding::Utf8Text);
    if let Some(limit) = options.size_limit {
        builder.size_limit(limit);
    }
    Ok(builder.build()?)
}

fn build_anchored(source: &str, encoding: Encoding, options: &CompileOptions) -> Result<Regex> {
    match build(&format!(r"\A(?:{source})\z"), encoding, options) {
        Ok(re) => Ok(re),
        // A trailing `(?x)` comment swallows the closing group; end it first.
        Err(_) => build(&format!("\\A(?:{source}\n)\\z"), encoding, options),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
