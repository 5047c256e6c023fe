// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie Tree Implementation
//!
//! A prefix tree that stores a set of strings and answers membership and
//! prefix-completion queries. Every edge is labelled with one `char`; a node
//! is *terminal* when an inserted string ends exactly there.
//!
//! # Example
//!
//! ```
//! use trietree_lib::data_structures::trie_tree::TrieTree;
//!
//! let tree = TrieTree::from_strings(["cat", "car", "cart"]);
//!
//! assert!(tree.contains("cat"));
//! assert!(!tree.contains("ca"));
//! assert_eq!(tree.complete("car"), vec!["car", "cart"]);
//! assert!(tree.complete("dog").is_empty());
//! ```
//!
//! # Ordering
//!
//! Enumeration is a pre-order walk: a terminal node is reported before any of
//! its descendants, and children are visited in ascending `char` order. The
//! output of [`TrieTree::complete`] and [`TrieTree::all_tree_strings`] is
//! therefore sorted by `char` sequence.
//!
//! # Thread safety
//!
//! The tree carries no internal locking. Callers that share a tree between
//! threads and mutate it must wrap the whole tree in a single lock.

mod error;
mod iter;
mod node;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub use error::TrieTreeError;
pub use iter::Strings;
pub use node::TrieNode;

/// Result type for Trie Tree operations
pub type TrieTreeResult<T> = Result<T, TrieTreeError>;

/// A prefix tree over `char` symbols.
///
/// Serialises as the sequence of its stored strings and deserialises by
/// inserting them in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TrieTree {
    /// The root node, never absent
    root: TrieNode,

    /// Number of terminal nodes (accepted strings)
    size: usize,
}

impl TrieTree {
    /// Creates a new empty `TrieTree`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            size: 0,
        }
    }

    /// Creates a tree holding `strings`, inserted in the given order.
    ///
    /// # Arguments
    ///
    /// * `strings` - Strings to insert. Duplicates are accepted and counted once.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        let mut offered = 0usize;
        for s in strings {
            tree.insert(s.as_ref());
            offered += 1;
        }
        debug!(offered, stored = tree.size, "built trie tree");
        tree
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns `true` if no string has been inserted.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Total number of nodes, root included.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Inserts a string into the tree.
    ///
    /// Missing nodes along the path are created one per symbol. Inserting the
    /// empty string marks the root terminal.
    ///
    /// # Returns
    ///
    /// `true` if the string was new, `false` if it was already stored (the
    /// tree is left unchanged in that case).
    pub fn insert(&mut self, s: &str) -> bool {
        let mut node = &mut self.root;
        for symbol in s.chars() {
            node = node.child_or_insert(symbol);
        }

        let is_new = node.mark_terminal();
        if is_new {
            self.size += 1;
            trace!(string = s, size = self.size, "inserted new string");
        }
        is_new
    }

    /// Returns `true` if `s` was inserted.
    ///
    /// A path that exists only as the prefix of longer strings does not count.
    pub fn contains(&self, s: &str) -> bool {
        self.find_node(s).is_some_and(TrieNode::is_terminal)
    }

    /// Returns the node reached by following every symbol of `s` from the root.
    ///
    /// This is all-or-nothing: if any symbol is missing, `None` is returned
    /// rather than the deepest partial match.
    pub fn find_node(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for symbol in s.chars() {
            node = node.get_child(symbol)?;
        }
        Some(node)
    }

    /// Returns every stored string that starts with `prefix`, `prefix` itself
    /// included if it was inserted.
    ///
    /// An unknown prefix yields an empty list.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let mut found = Vec::new();
        match self.find_node(prefix) {
            Some(node) => Self::traverse(node, prefix, |s| found.push(s.to_owned())),
            None => trace!(prefix, "no node for prefix"),
        }
        found
    }

    /// Returns every stored string.
    pub fn all_tree_strings(&self) -> Vec<String> {
        self.complete("")
    }

    /// Walks the subtree under `node`, calling `visit` with the full string of
    /// each terminal node.
    ///
    /// `prefix` is the string `node` itself stands for. A terminal node is
    /// visited before its children; children are visited in ascending symbol
    /// order. The walk keeps its own stack, so depth is bounded by memory
    /// rather than by the thread's stack size.
    pub fn traverse<F>(node: &TrieNode, prefix: &str, mut visit: F)
    where
        F: FnMut(&str),
    {
        for s in Strings::new(node, prefix) {
            visit(&s);
        }
    }

    /// Iterates over every stored string without recursion.
    ///
    /// Yields exactly the sequence [`all_tree_strings`](Self::all_tree_strings)
    /// returns.
    pub fn iter(&self) -> Strings<'_> {
        Strings::new(&self.root, "")
    }

    /// Iterates over the stored strings starting with `prefix`.
    pub fn iter_prefix(&self, prefix: &str) -> Strings<'_> {
        match self.find_node(prefix) {
            Some(node) => Strings::new(node, prefix),
            None => Strings::empty(),
        }
    }

    /// Inserts raw bytes that must form a valid UTF-8 string.
    ///
    /// # Errors
    ///
    /// `TrieTreeError::InvalidArgument` if `bytes` is not UTF-8. Nothing is
    /// inserted in that case.
    pub fn insert_bytes(&mut self, bytes: &[u8]) -> TrieTreeResult<bool> {
        let s = decode(bytes)?;
        Ok(self.insert(s))
    }

    /// Byte-input counterpart of [`contains`](Self::contains).
    ///
    /// # Errors
    ///
    /// `TrieTreeError::InvalidArgument` if `bytes` is not UTF-8.
    pub fn contains_bytes(&self, bytes: &[u8]) -> TrieTreeResult<bool> {
        decode(bytes).map(|s| self.contains(s))
    }

    /// Byte-input counterpart of [`complete`](Self::complete).
    ///
    /// # Errors
    ///
    /// `TrieTreeError::InvalidArgument` if `bytes` is not UTF-8.
    pub fn complete_bytes(&self, bytes: &[u8]) -> TrieTreeResult<Vec<String>> {
        decode(bytes).map(|s| self.complete(s))
    }
}

/// Checks that `bytes` is a well-formed string and returns it.
///
/// # Errors
///
/// `TrieTreeError::InvalidArgument` if `bytes` is not UTF-8.
pub fn decode(bytes: &[u8]) -> TrieTreeResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        warn!(error = %e, "rejected non-UTF-8 input");
        TrieTreeError::InvalidArgument(format!("input is not valid UTF-8: {e}"))
    })
}

impl<S: AsRef<str>> FromIterator<S> for TrieTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_strings(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for TrieTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.insert(s.as_ref());
        }
    }
}

impl<'a> IntoIterator for &'a TrieTree {
    type Item = String;
    type IntoIter = Strings<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<String>> for TrieTree {
    fn from(strings: Vec<String>) -> Self {
        Self::from_strings(strings)
    }
}

impl From<TrieTree> for Vec<String> {
    fn from(tree: TrieTree) -> Self {
        tree.all_tree_strings()
    }
}
