// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trietree Library
//!
//! A prefix tree (trie) storing a set of strings, with membership testing,
//! prefix completion and full enumeration, plus the configuration, error and
//! word-list plumbing used by the `trietree` command-line tool.
//!
//! # Architecture
//!
//! - [`data_structures::trie_tree`] holds the tree itself and has no I/O.
//! - [`utils`] reads word lists into a tree and sets up logging.
//! - [`config`] and [`error`] provide the layered configuration and the
//!   crate-wide error types.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod utils;

#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::trie_tree::{TrieNode, TrieTree};

/// Version information for trietree.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
