// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for trietree.

pub mod trie_tree;

// Re-export common data structures
pub use trie_tree::{TrieNode, TrieTree, TrieTreeError, TrieTreeResult};
