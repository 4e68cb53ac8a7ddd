//! Word list loading.
//!
//! Reads a plain-text dictionary, one word per line, and builds a
//! [`WordTrie`] from it in file order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::DictionaryConfig;
use crate::data_structures::word_trie::WordTrie;
use crate::error::dictionary::{DictionaryError, DictionaryResult};

/// Reads words from `reader`, applying the line rules of `config`.
///
/// Lines are split on `\n` only. Without trimming, the `\r` of a CRLF file
/// and any trailing spaces stay part of the word. Leading whitespace is
/// always kept.
pub fn read_words<R: BufRead>(reader: R, config: &DictionaryConfig) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in reader.split(b'\n') {
        let line = String::from_utf8(line?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let word = if config.trim {
            line.trim_end().to_string()
        } else {
            line
        };

        if config.skip_blank && word.is_empty() {
            skipped += 1;
            continue;
        }
        words.push(word);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped blank dictionary lines");
    }

    Ok(words)
}

/// Loads the dictionary described by `config` into a new trie.
///
/// # Errors
///
/// * [`DictionaryError::FileNotFound`] if the file does not exist
/// * [`DictionaryError::Read`] if it cannot be opened or is not valid UTF-8
/// * [`DictionaryError::Empty`] if `require_words` is set and no word was read
pub fn load(config: &DictionaryConfig) -> DictionaryResult<WordTrie> {
    let path = &config.path;
    if !path.exists() {
        return Err(DictionaryError::FileNotFound(path.clone()));
    }

    let read_error = |source| DictionaryError::Read {
        path: path.clone(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let words = read_words(BufReader::new(file), config).map_err(read_error)?;

    if config.require_words && words.is_empty() {
        return Err(DictionaryError::Empty(path.clone()));
    }

    let trie = WordTrie::from_words(&words);
    tracing::info!(
        path = %path.display(),
        lines = words.len(),
        words = trie.len(),
        nodes = trie.node_count(),
        "dictionary loaded"
    );

    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_words_trims_crlf() {
        let input = Cursor::new("cat\r\ncar\r\n\r\ndog \t\n");
        let words = read_words(input, &DictionaryConfig::default()).unwrap();
        assert_eq!(words, vec!["cat", "car", "dog"]);
    }

    #[test]
    fn test_read_words_keeps_leading_whitespace() {
        let input = Cursor::new("  dog \r\n");
        let words = read_words(input, &DictionaryConfig::default()).unwrap();
        assert_eq!(words, vec!["  dog"]);
    }

    #[test]
    fn test_read_words_keeps_lines_verbatim() {
        let config = DictionaryConfig {
            trim: false,
            skip_blank: false,
            ..Default::default()
        };
        let input = Cursor::new("cat\r\n\ndog \n");
        let words = read_words(input, &config).unwrap();
        assert_eq!(words, vec!["cat\r", "", "dog "]);
    }

    #[test]
    fn test_read_words_rejects_invalid_utf8() {
        let input = Cursor::new(vec![b'c', 0xff, b'\n']);
        let err = read_words(input, &DictionaryConfig::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
