// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Trie Tree.

/// Errors that can occur in Trie Tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieTreeError {
    /// Input that is not a well-formed string.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A child for this symbol already exists and would be overwritten.
    #[error("Child for symbol '{symbol}' already exists")]
    DuplicateChild {
        /// The occupied symbol.
        symbol: char,
    },

    /// The node handed to `add_child` was built for another symbol.
    #[error("Node for symbol {found:?} cannot be stored under '{expected}'")]
    SymbolMismatch {
        /// The key the node was to be stored under.
        expected: char,
        /// The symbol the node actually carries.
        found: Option<char>,
    },
}
