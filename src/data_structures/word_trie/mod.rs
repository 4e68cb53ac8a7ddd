// Copyright (c) 2025 Spellcheck Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie
//!
//! A prefix tree over a dictionary of words that answers membership queries
//! and proposes single-character edits:
//!
//! * **completions** extend the input by one character,
//! * **end corrections** replace the last character of the input,
//! * **corrections** replace the character where the input first leaves
//!   the trie.
//!
//! Children of every node are visited in the order they were first
//! inserted, so suggestion lists are deterministic.
//!
//! # Example
//!
//! ```
//! use spellcheck_lib::data_structures::word_trie::WordTrie;
//!
//! let trie = WordTrie::from_words(["cat", "car", "cart", "dog"]);
//!
//! assert!(trie.is_word("cat"));
//! assert!(!trie.is_word("ca"));
//! assert_eq!(trie.one_char_completions("ca"), vec!["cat", "car"]);
//! assert_eq!(trie.one_char_corrections("cae"), vec!["cat", "car"]);
//! assert_eq!(trie.one_char_end_corrections("cas").unwrap(), vec!["cat", "car"]);
//! ```

mod error;
mod node;

#[cfg(test)]
mod tests;

pub use error::{WordTrieError, WordTrieResult};
use node::{NodeId, TrieNode};

/// Where a walk from the root stopped.
#[derive(Debug, Clone, Copy)]
struct Walk {
    /// Last node successfully reached.
    node: NodeId,

    /// Byte length of the matched prefix.
    matched: usize,

    /// Whether every character of the input was matched.
    complete: bool,
}

/// A prefix tree of dictionary words.
///
/// The trie only grows: words can be added at any time but never removed.
/// Queries borrow the trie immutably and never fail on unknown input, they
/// just come back empty.
#[derive(Debug, Clone)]
pub struct WordTrie {
    /// Node arena; slot 0 is the root.
    nodes: Vec<TrieNode>,

    /// Number of distinct words inserted.
    words: usize,
}

impl WordTrie {
    /// Creates an empty trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            words: 0,
        }
    }

    /// Builds a trie by adding every word of `words`, in order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Inserts `word` into the trie.
    ///
    /// Missing nodes are appended after any existing siblings. The empty
    /// string marks the root itself as terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before, `false` if it was.
    pub fn add(&mut self, word: &str) -> bool {
        let mut current = NodeId::ROOT;

        for c in word.chars() {
            current = match self.node(current).child(c) {
                Some(next) => next,
                None => {
                    let next = NodeId::new(self.nodes.len());
                    self.nodes.push(TrieNode::new(c));
                    self.node_mut(current).push_child(c, next);
                    next
                }
            };
        }

        let node = self.node_mut(current);
        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.words += 1;
        }
        is_new
    }

    /// Returns `true` if `word` was inserted into the trie.
    ///
    /// A prefix of an inserted word is not a word on its own.
    pub fn is_word(&self, word: &str) -> bool {
        self.descend(word)
            .is_some_and(|id| self.node(id).is_terminal)
    }

    /// Lists the words that are `word` followed by exactly one character.
    ///
    /// `word` itself must be a path in the trie (a word or a prefix of one),
    /// otherwise nothing is returned. Suggestions follow child insertion
    /// order.
    pub fn one_char_completions(&self, word: &str) -> Vec<String> {
        let suggestions = match self.descend(word) {
            Some(id) => self.splice_terminal_children(id, word, ""),
            None => Vec::new(),
        };
        tracing::trace!(word, count = suggestions.len(), "one char completions");
        suggestions
    }

    /// Lists the words obtained by replacing the last character of `word`.
    ///
    /// Everything but the last character must be a path in the trie. The
    /// result can contain `word` itself when it is a dictionary word. A
    /// single-character input proposes every single-character word.
    ///
    /// # Errors
    ///
    /// Returns [`WordTrieError::EmptyWord`] for the empty string, which has
    /// no last character to replace.
    pub fn one_char_end_corrections(&self, word: &str) -> WordTrieResult<Vec<String>> {
        let mut chars = word.chars();
        if chars.next_back().is_none() {
            return Err(WordTrieError::EmptyWord {
                operation: "end corrections",
            });
        }
        let stem = chars.as_str();

        let suggestions = match self.descend(stem) {
            Some(id) => self.splice_terminal_children(id, stem, ""),
            None => Vec::new(),
        };
        tracing::trace!(word, count = suggestions.len(), "one char end corrections");
        Ok(suggestions)
    }

    /// Lists the words obtained by replacing the first character of `word`
    /// that has no matching edge in the trie.
    ///
    /// The longest prefix of `word` present in the trie is kept, the
    /// character right after it is swapped for each terminal child of the
    /// node reached, and the rest of `word` is appended unchanged. When the
    /// mismatch is on the last character every suggestion is a dictionary
    /// word differing from `word` in one position. When it happens earlier
    /// the unchanged tail is still appended, so suggestions are not
    /// guaranteed to be words.
    ///
    /// Returns nothing when the whole of `word` is a path in the trie,
    /// including for the empty string.
    pub fn one_char_corrections(&self, word: &str) -> Vec<String> {
        let walk = self.walk(word);
        if walk.complete {
            return Vec::new();
        }

        let rest = &word[walk.matched..];
        let tail = rest
            .chars()
            .next()
            .map_or(rest, |mismatch| &rest[mismatch.len_utf8()..]);
        let suggestions =
            self.splice_terminal_children(walk.node, &word[..walk.matched], tail);
        tracing::trace!(word, count = suggestions.len(), "one char corrections");
        suggestions
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    /// Follows `word` from the root as far as the trie allows.
    fn walk(&self, word: &str) -> Walk {
        let mut walk = Walk {
            node: NodeId::ROOT,
            matched: 0,
            complete: true,
        };

        for (offset, c) in word.char_indices() {
            match self.node(walk.node).child(c) {
                Some(next) => {
                    walk.node = next;
                    walk.matched = offset + c.len_utf8();
                }
                None => {
                    walk.complete = false;
                    break;
                }
            }
        }

        walk
    }

    /// Node spelled by the whole of `word`, if any.
    fn descend(&self, word: &str) -> Option<NodeId> {
        let walk = self.walk(word);
        walk.complete.then_some(walk.node)
    }

    /// Builds `head + c + tail` for every terminal child `c` of `id`.
    fn splice_terminal_children(&self, id: NodeId, head: &str, tail: &str) -> Vec<String> {
        self.node(id)
            .children()
            .iter()
            .map(|&child| self.node(child))
            .filter(|child| child.is_terminal)
            .filter_map(TrieNode::character)
            .map(|c| {
                let mut suggestion = String::with_capacity(head.len() + c.len_utf8() + tail.len());
                suggestion.push_str(head);
                suggestion.push(c);
                suggestion.push_str(tail);
                suggestion
            })
            .collect()
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for WordTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        let before = self.words;
        for word in words {
            self.add(word.as_ref());
        }
        tracing::debug!(
            added = self.words - before,
            words = self.words,
            nodes = self.nodes.len(),
            "extended word trie"
        );
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}
