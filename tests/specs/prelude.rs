//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the sqlre binary.
///
/// The environment is scrubbed of sqlre variables and the working
/// directory is an empty temp dir, so no stray config is discovered.
pub fn sqlre_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sqlre"));
    cmd.env_remove("SQLRE_CONFIG").env_remove("SQLRE_LOG");
    cmd.current_dir(std::env::temp_dir());
    cmd
}

/// Run sqlre with `args` and return stdout, asserting success.
pub fn stdout_of(args: &[&str]) -> String {
    let output = sqlre_cmd().args(args).output().expect("command should run");
    assert!(
        output.status.success(),
        "sqlre {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

/// A scratch directory holding config and input files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        // Keep config discovery inside the temp dir.
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: impl AsRef<[u8]>) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// A command running inside the project.
    pub fn cmd(&self) -> Command {
        let mut cmd = sqlre_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Assert that sqlre succeeds with `args` and prints exactly `expected`.
pub fn assert_stdout(args: &[&str], expected: &str) {
    let actual = stdout_of(args);
    similar_asserts::assert_eq!(actual.as_str(), expected);
}
