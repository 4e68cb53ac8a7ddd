//! Crate-level test suites for the spell checker.
//!
//! Component unit tests live next to their code; the suites here cover
//! configuration loading, error reporting and dictionary files, which need
//! temporary files or global state.

pub mod config_tests;

pub use test_utils::{create_test_dir, TestFixture};
