// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! The engine itself holds no global settings; configuration only supplies
//! the defaults the command line passes into each call.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::pattern::CompileOptions;

/// Errors raised while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {found} (expected {})", defaults::VERSION)]
    UnsupportedVersion { found: u32 },
}

/// Parsed `sqlre.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_version")]
    pub version: u32,

    #[serde(default)]
    pub replace: ReplaceConfig,

    #[serde(default)]
    pub pattern: PatternConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            replace: ReplaceConfig::default(),
            pattern: PatternConfig::default(),
        }
    }
}

impl Config {
    pub(crate) fn default_version() -> u32 {
        defaults::VERSION
    }
}

/// `[replace]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceConfig {
    /// Output budget for replace, in bytes (default: unbounded).
    #[serde(default = "ReplaceConfig::default_max_output_bytes")]
    pub max_output_bytes: Option<usize>,
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self { max_output_bytes: Self::default_max_output_bytes() }
    }
}

impl ReplaceConfig {
    pub(crate) fn default_max_output_bytes() -> Option<usize> {
        defaults::replace::MAX_OUTPUT_BYTES
    }
}

/// `[pattern]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Compiled program size limit, in bytes.
    #[serde(default = "PatternConfig::default_size_limit")]
    pub size_limit: Option<usize>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self { size_limit: Self::default_size_limit() }
    }
}

impl PatternConfig {
    pub(crate) fn default_size_limit() -> Option<usize> {
        defaults::pattern::SIZE_LIMIT
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions { size_limit: self.size_limit }
    }
}

/// Parse config file contents.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    if config.version != defaults::VERSION {
        return Err(ConfigError::UnsupportedVersion { found: config.version });
    }
    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Find `sqlre.toml` starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(defaults::CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
