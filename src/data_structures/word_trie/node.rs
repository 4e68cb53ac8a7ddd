// Copyright (c) 2025 Spellcheck Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the word trie.
//!
//! Nodes live in a flat arena owned by the trie and refer to each other by
//! [`NodeId`]. Nothing is ever removed, so an id stays valid for the
//! lifetime of the trie that handed it out.

use fnv::FnvHashMap;

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root always occupies the first arena slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single character position in the trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Character on the edge leading here. `None` only for the root.
    character: Option<char>,

    /// Children in the order they were first created.
    children: Vec<NodeId>,

    /// Character lookup into `children`.
    index: FnvHashMap<char, NodeId>,

    /// Whether the path from the root to this node spells an inserted word.
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates the sentinel root node.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Creates a non-terminal node for `character`.
    pub(crate) fn new(character: char) -> Self {
        Self {
            character: Some(character),
            ..Self::default()
        }
    }

    /// The character this node stands for, `None` for the root.
    pub(crate) fn character(&self) -> Option<char> {
        self.character
    }

    /// Looks up the child reached through `c`.
    pub(crate) fn child(&self, c: char) -> Option<NodeId> {
        self.index.get(&c).copied()
    }

    /// Appends a child after the existing ones.
    ///
    /// The caller guarantees no child for `c` exists yet.
    pub(crate) fn push_child(&mut self, c: char, id: NodeId) {
        debug_assert!(!self.index.contains_key(&c), "duplicate child edge {c:?}");
        self.index.insert(c, id);
        self.children.push(id);
    }

    /// Children in insertion order.
    pub(crate) fn children(&self) -> &[NodeId] {
        &self.children
    }
}
