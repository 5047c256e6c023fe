// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Stack-based string iterator for the Trie Tree.

use std::collections::btree_map;

use super::node::TrieNode;

/// Iterator over the strings stored below a node.
///
/// Yields the same sequence as [`TrieTree::traverse`](super::TrieTree::traverse)
/// (terminal node before its children, children in ascending symbol order)
/// without recursing, so arbitrarily long strings cannot exhaust the call stack.
#[derive(Debug, Clone)]
pub struct Strings<'a> {
    // One frame per node on the current path, deepest on top
    stack: Vec<Frame<'a>>,
    // The string the top frame's node stands for
    buf: String,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    node: &'a TrieNode,
    children: btree_map::Iter<'a, char, TrieNode>,
    visited: bool,
}

impl<'a> Frame<'a> {
    fn new(node: &'a TrieNode) -> Self {
        Self {
            node,
            children: node.child_iter(),
            visited: false,
        }
    }
}

impl<'a> Strings<'a> {
    pub(crate) fn new(node: &'a TrieNode, prefix: &str) -> Self {
        Self {
            stack: vec![Frame::new(node)],
            buf: prefix.to_owned(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            buf: String::new(),
        }
    }
}

impl<'a> Iterator for Strings<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            if !frame.visited {
                frame.visited = true;
                if frame.node.is_terminal() {
                    return Some(self.buf.clone());
                }
                continue;
            }

            match frame.children.next() {
                Some((&symbol, child)) => {
                    self.buf.push(symbol);
                    self.stack.push(Frame::new(child));
                }
                None => {
                    self.stack.pop();
                    // The starting node's prefix was given, not pushed.
                    if !self.stack.is_empty() {
                        self.buf.pop();
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Strings<'_> {}
