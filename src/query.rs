//! Query dispatch.
//!
//! Maps a requested query onto the matching [`WordTrie`] operation and
//! renders the answer either as plain lines or as JSON.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::data_structures::word_trie::WordTrie;
use crate::error::SpellResult;

/// The questions that can be asked about a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Is the word in the dictionary?
    Check,
    /// Which words extend it by one character?
    Complete,
    /// Which words differ from it where it first leaves the dictionary?
    Correct,
    /// Which words differ from it in the last character?
    EndCorrect,
}

/// Answer to a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    /// Membership answer
    Verdict(bool),
    /// Suggested words, in trie order
    Suggestions(Vec<String>),
}

impl Query {
    /// Runs the query for `word` against `trie`.
    pub fn run(self, trie: &WordTrie, word: &str) -> SpellResult<QueryOutput> {
        let output = match self {
            Query::Check => QueryOutput::Verdict(trie.is_word(word)),
            Query::Complete => QueryOutput::Suggestions(trie.one_char_completions(word)),
            Query::Correct => QueryOutput::Suggestions(trie.one_char_corrections(word)),
            Query::EndCorrect => QueryOutput::Suggestions(trie.one_char_end_corrections(word)?),
        };
        Ok(output)
    }
}

impl QueryOutput {
    /// Renders the answer as a JSON value.
    pub fn to_json(&self) -> SpellResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Plain rendering: `correct`/`incorrect`, or one suggestion per line.
impl Display for QueryOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutput::Verdict(true) => writeln!(f, "correct"),
            QueryOutput::Verdict(false) => writeln!(f, "incorrect"),
            QueryOutput::Suggestions(words) => words.iter().try_for_each(|w| writeln!(f, "{w}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SpellError, WordTrieError};
    use test_case::test_case;

    fn trie() -> WordTrie {
        WordTrie::from_words(["cat", "car", "cart", "dog"])
    }

    #[test_case(Query::Check, "cat", "correct\n" ; "check known word")]
    #[test_case(Query::Check, "ca", "incorrect\n" ; "check prefix")]
    #[test_case(Query::Complete, "ca", "cat\ncar\n" ; "complete")]
    #[test_case(Query::Correct, "cae", "cat\ncar\n" ; "correct")]
    #[test_case(Query::EndCorrect, "cas", "cat\ncar\n" ; "end correct")]
    #[test_case(Query::Complete, "zz", "" ; "nothing to suggest")]
    fn test_plain_rendering(query: Query, word: &str, expected: &str) {
        let output = query.run(&trie(), word).unwrap();
        assert_eq!(output.to_string(), expected);
    }

    #[test]
    fn test_json_rendering() {
        let verdict = Query::Check.run(&trie(), "dog").unwrap();
        assert_eq!(verdict.to_json().unwrap(), "true");

        let suggestions = Query::Complete.run(&trie(), "car").unwrap();
        assert_eq!(suggestions.to_json().unwrap(), r#"["cart"]"#);
    }

    #[test]
    fn test_end_correct_propagates_empty_word() {
        let err = Query::EndCorrect.run(&trie(), "").unwrap_err();
        assert!(matches!(err, SpellError::Trie(WordTrieError::EmptyWord { .. })));
    }
}
