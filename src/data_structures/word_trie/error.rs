// Copyright (c) 2025 Spellcheck Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the word trie.

/// Errors that can occur in word trie queries.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum WordTrieError {
    /// The query needs at least one character to work on.
    #[error("Empty word not allowed for {operation}")]
    EmptyWord {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

/// Result type for word trie operations
pub type WordTrieResult<T> = Result<T, WordTrieError>;
