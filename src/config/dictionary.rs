//! Dictionary configuration module.
//!
//! Controls where the word list comes from and how its lines become words.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default word list location, relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "words_alpha.txt";

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to a file holding one word per line
    pub path: PathBuf,

    /// Strip trailing whitespace (including the `\r` of CRLF files) from every line
    pub trim: bool,

    /// Ignore lines that are empty after trimming
    pub skip_blank: bool,

    /// Fail to load when the file yields no words
    pub require_words: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            trim: true,
            skip_blank: true,
            require_words: false,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dictionary_config() {
        let config = DictionaryConfig::default();
        assert_eq!(config.path, PathBuf::from("words_alpha.txt"));
        assert!(config.trim);
        assert!(config.skip_blank);
        assert!(!config.require_words);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let config = DictionaryConfig {
            path: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
