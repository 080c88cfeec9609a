// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "sqlre.toml";

/// The only config schema version understood.
pub const VERSION: u32 = 1;

/// Replace defaults.
pub mod replace {
    /// Replace output is unbounded unless configured.
    pub const MAX_OUTPUT_BYTES: Option<usize> = None;
}

/// Pattern compilation defaults.
pub mod pattern {
    /// Use the regex crate's own compiled size limit.
    pub const SIZE_LIMIT: Option<usize> = None;
}
