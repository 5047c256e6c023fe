// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Trie Tree.
//!
//! Nodes are the building blocks of the tree. Each node owns its children
//! outright, so a subtree lives exactly as long as its parent.
//!
//! A single long string produces a chain as deep as it has characters, so
//! every whole-subtree operation here (drop, clone, equality, counting) runs
//! on an explicit stack instead of the call stack.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;

use super::error::TrieTreeError;
use super::TrieTreeResult;

/// A node in the Trie Tree.
///
/// Each node represents one character on a key path. Terminal nodes mark the
/// end of an inserted string.
#[derive(Default)]
pub struct TrieNode {
    /// The character this node represents (`None` for the root)
    symbol: Option<char>,

    /// Map of characters to child nodes, iterated in ascending order
    children: BTreeMap<char, TrieNode>,

    /// Whether this node represents the end of a string
    terminal: bool,
}

impl TrieNode {
    /// Creates the symbol-less node used as a tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a new non-terminal node for `symbol` with no children.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol: Some(symbol),
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// The character this node represents, `None` on the root.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Returns `true` if a child exists for exactly `symbol`.
    pub fn has_child(&self, symbol: char) -> bool {
        self.children.contains_key(&symbol)
    }

    /// Returns the child for `symbol`, if any.
    pub fn get_child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Adds `node` as the child for `symbol` and returns a handle to it.
    ///
    /// # Errors
    ///
    /// * `TrieTreeError::DuplicateChild` if a child for `symbol` exists. The
    ///   existing subtree is left untouched.
    /// * `TrieTreeError::SymbolMismatch` if `node` carries a different symbol.
    pub fn add_child(&mut self, symbol: char, node: TrieNode) -> TrieTreeResult<&mut TrieNode> {
        if node.symbol != Some(symbol) {
            return Err(TrieTreeError::SymbolMismatch {
                expected: symbol,
                found: node.symbol,
            });
        }

        match self.children.entry(symbol) {
            Entry::Occupied(_) => Err(TrieTreeError::DuplicateChild { symbol }),
            Entry::Vacant(slot) => Ok(slot.insert(node)),
        }
    }

    /// Returns `true` if an inserted string ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Iterates over `(symbol, child)` pairs in ascending symbol order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Descends into the child for `symbol`, creating it when missing.
    pub(crate) fn child_or_insert(&mut self, symbol: char) -> &mut TrieNode {
        self.children
            .entry(symbol)
            .or_insert_with(|| TrieNode::new(symbol))
    }

    /// Marks this node terminal. Returns `true` if it was not terminal before.
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }

    /// Children in ascending symbol order, borrowed for the tree's lifetime.
    pub(crate) fn child_iter(&self) -> btree_map::Iter<'_, char, TrieNode> {
        self.children.iter()
    }

    /// Counts this node and every node below it.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }

    /// Copy of this node without its children.
    fn detached(&self) -> Self {
        Self {
            symbol: self.symbol,
            children: BTreeMap::new(),
            terminal: self.terminal,
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
            // `node` drops here with no children left.
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut root = self.detached();
        // One child iterator per open level; `copies[i]` is the copy being
        // filled for the node whose children `sources[i + 1]` walks.
        let mut sources = vec![self.children.iter()];
        let mut copies: Vec<(char, TrieNode)> = Vec::new();

        while let Some(children) = sources.last_mut() {
            if let Some((&symbol, child)) = children.next() {
                sources.push(child.children.iter());
                copies.push((symbol, child.detached()));
                continue;
            }

            sources.pop();
            if let Some((symbol, done)) = copies.pop() {
                let parent = match copies.last_mut() {
                    Some((_, parent)) => parent,
                    None => &mut root,
                };
                parent.children.insert(symbol, done);
            }
        }
        root
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.symbol != b.symbol
                || a.terminal != b.terminal
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for ((sa, ca), (sb, cb)) in a.children.iter().zip(b.children.iter()) {
                if sa != sb {
                    return false;
                }
                pending.push((ca, cb));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    // Shallow: lists child symbols only, since a full dump of a deep chain
    // would recurse once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("symbol", &self.symbol)
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
