// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{TrieError, TrieResult};

/// Builds the level filter. `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(config))
}

/// Filter for the configured level alone, ignoring the environment.
pub fn level_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::new(&config.level)
}

/// Installs the global tracing subscriber described by `config`.
///
/// Logs go to standard error so command output on standard output stays clean.
///
/// # Errors
///
/// `TrieError::Custom` if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> TrieResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed.map_err(|e| TrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
