//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the sqlre crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::pattern::CompiledPattern;
use crate::subject::Encoding;

/// Compiles a STRING pattern, panicking on failure.
pub fn text_pattern(pattern: &str) -> CompiledPattern {
    CompiledPattern::compile(pattern.as_bytes(), Encoding::Utf8Text)
        .unwrap_or_else(|e| panic!("pattern {pattern:?} should compile: {e}"))
}

/// Compiles a BYTES pattern, panicking on failure.
pub fn bytes_pattern(pattern: &[u8]) -> CompiledPattern {
    CompiledPattern::compile(pattern, Encoding::RawBytes)
        .unwrap_or_else(|e| panic!("pattern {pattern:?} should compile: {e}"))
}

/// Compiles a pattern in either encoding.
pub fn pattern(pattern: &[u8], encoding: Encoding) -> CompiledPattern {
    match encoding {
        Encoding::Utf8Text => text_pattern(std::str::from_utf8(pattern).unwrap()),
        Encoding::RawBytes => bytes_pattern(pattern),
    }
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sqlre.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
