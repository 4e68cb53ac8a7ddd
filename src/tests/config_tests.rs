//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, DictionaryConfig, LogConfig, SpellConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = SpellConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = SpellConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.dictionary.path = PathBuf::new();
    assert!(config.validate().is_err());
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_defaults_without_file() {
    let loader = ConfigLoader::new(None::<PathBuf>, "TEST_DEFAULTS");
    assert_eq!(loader.load().unwrap(), SpellConfig::default());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_toml_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "spellcheck.toml",
            r#"
            [dictionary]
            path = "/usr/share/dict/words"
            skip_blank = false

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_TOML").load().unwrap();

    assert_eq!(config.dictionary.path, PathBuf::from("/usr/share/dict/words"));
    assert!(!config.dictionary.skip_blank);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert!(config.dictionary.trim);
    assert!(!config.log.json);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "spellcheck.json",
            r#"{ "dictionary": { "require_words": true }, "log": { "json": true } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();

    assert!(config.dictionary.require_words);
    assert!(config.log.json);
    assert_eq!(config.dictionary, DictionaryConfig {
        require_words: true,
        ..DictionaryConfig::default()
    });
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("env.toml", "[dictionary]\npath = \"file-words.txt\"\n")
        .unwrap();

    fixture.set_env("TEST_ENV__DICTIONARY__PATH", "env-words.txt");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "error");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    assert_eq!(config.dictionary.path, PathBuf::from("env-words.txt"));
    assert_eq!(config.log, LogConfig {
        level: "error".to_string(),
        ..LogConfig::default()
    });
}

/// Test the error cases of the loader.
#[test]
fn test_load_errors() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    let err = ConfigLoader::new(Some(&missing), "TEST_ERR").load().unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(path) if path == missing));

    let ini = fixture.create_file("config.ini", "level = debug").unwrap();
    let err = ConfigLoader::new(Some(&ini), "TEST_ERR").load().unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

    let broken = fixture.create_file("broken.toml", "[dictionary\npath = ").unwrap();
    let err = ConfigLoader::new(Some(&broken), "TEST_ERR").load().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));

    let invalid = fixture.create_file("invalid.toml", "[log]\nlevel = \"loud\"\n").unwrap();
    let err = ConfigLoader::new(Some(&invalid), "TEST_ERR").load().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let toml = toml::to_string_pretty(&SpellConfig::default()).unwrap();
    assert!(toml.contains("[dictionary]"));
    assert!(toml.contains("words_alpha.txt"));

    let parsed: SpellConfig = toml::from_str(&toml).unwrap();
    assert_eq!(parsed, SpellConfig::default());
}
