// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list error module.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::trie_tree::TrieTreeError;

/// Errors raised while reading a word list into a tree.
#[derive(Error, Debug)]
pub enum WordListError {
    /// The word list file could not be opened.
    #[error("Failed to open word list {path}: {source}")]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Reading from the word source failed part way.
    #[error("Failed to read word list at line {line}: {source}")]
    Read {
        /// 1-based line number
        line: usize,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A line was rejected by the tree.
    #[error("Invalid word at line {line}: {source}")]
    InvalidWord {
        /// 1-based line number
        line: usize,
        /// Rejection reason
        #[source]
        source: TrieTreeError,
    },
}
