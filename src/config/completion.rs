// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Completion output configuration module.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Upper bound accepted for `max_results`.
const MAX_RESULTS_LIMIT: usize = 1_000_000;

/// How completions are presented to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionConfig {
    /// Maximum number of completions reported (0 for unlimited)
    pub max_results: usize,

    /// Whether the prefix itself is reported when it is a stored string
    pub include_prefix: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_results: 0,
            include_prefix: true,
        }
    }
}

impl CompletionConfig {
    /// Applies these settings to the output of `TrieTree::complete`.
    ///
    /// Order is preserved; truncation keeps the first `max_results` entries.
    pub fn apply(&self, prefix: &str, mut completions: Vec<String>) -> Vec<String> {
        if !self.include_prefix {
            completions.retain(|s| s != prefix);
        }
        if self.max_results > 0 {
            completions.truncate(self.max_results);
        }
        completions
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "completion.max_results".to_string(),
                message: format!("must be at most {MAX_RESULTS_LIMIT}"),
            });
        }
        Ok(())
    }
}
