//! Spellcheck Library
//!
//! A dictionary membership and single-edit suggestion engine built on a
//! prefix tree. The library is designed to be used by the `spellcheck`
//! binary, but the trie can also be embedded directly:
//!
//! ```
//! use spellcheck_lib::WordTrie;
//!
//! let trie: WordTrie = ["cat", "car", "cart", "dog"].into_iter().collect();
//! assert!(trie.is_word("cart"));
//! assert_eq!(trie.one_char_completions("car"), vec!["cart"]);
//! ```
//!
//! # Architecture
//!
//! - [`data_structures::word_trie`] holds the trie and its traversals
//! - [`dictionary`] turns a word list file into a trie
//! - [`query`] dispatches the supported questions and renders answers
//! - [`config`] and [`error`] provide the ambient configuration and error layers

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod query;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::WordTrie;
pub use query::{Query, QueryOutput};

/// Version information for the spell checker.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
