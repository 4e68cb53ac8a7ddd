//! Dictionary error module.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word list file does not exist.
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),

    /// The word list exists but could not be read.
    #[error("Failed to read dictionary {path}: {source}")]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: io::Error,
    },

    /// The word list held no words while at least one was required.
    #[error("Dictionary {0} contains no words")]
    Empty(PathBuf),
}

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;
