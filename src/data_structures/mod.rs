//! Data structures for the spell checker.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Deterministic iteration order wherever results are user-visible
//! - Structures only grow; nothing is removed once inserted

pub mod word_trie;

pub use word_trie::{WordTrie, WordTrieError, WordTrieResult};
