// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list input configuration module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// How word lists are read into a tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordsConfig {
    /// Word list file (None reads standard input)
    pub source: Option<PathBuf>,

    /// Whether to strip surrounding whitespace from each line
    pub trim: bool,

    /// Whether to skip lines that are empty (after trimming, if enabled)
    pub skip_blank: bool,

    /// Lines starting with this prefix are ignored
    pub comment_prefix: Option<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            source: None,
            trim: true,
            skip_blank: true,
            comment_prefix: None,
        }
    }
}

impl Validate for WordsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(prefix) = &self.comment_prefix {
            if prefix.is_empty() {
                return Err(ConfigError::ValidationError(
                    "comment_prefix must not be empty".to_string(),
                ));
            }
        }

        if let Some(source) = &self.source {
            if source.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "source must not be an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}
