//! Test utilities and fixtures for Mauka Patterns.
//!
//! This module provides reusable test components, fixtures, and helpers
//! for property-based testing and configuration tests.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// Maximum word list length for generated test data.
const MAX_WORD_COUNT: usize = 24;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for words over a small alphabet.
///
/// A small alphabet makes shared prefixes, and therefore interesting trie
/// shapes, far more likely than uniformly random strings would.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), 0..MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for lists of words, possibly with repeats.
pub fn word_list_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..MAX_WORD_COUNT).boxed()
}

/// Generate a strategy for arbitrary Unicode strings.
pub fn string_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::any(), 0..max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Test fixture for tests that need files on disk.
///
/// This struct helps with setting up and tearing down test environments
/// in a consistent way.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = create_test_dir()?;
        Ok(Self {
            temp_dir,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Create a file within the fixture directory.
    ///
    /// # Parameters
    ///
    /// * `contents` - The contents to write to the file.
    /// * `extension` - The file extension to use, including the dot.
    ///
    /// # Returns
    ///
    /// A result containing the path to the file or an error.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        contents: C,
        extension: &str,
    ) -> std::io::Result<std::path::PathBuf> {
        let file = tempfile::Builder::new()
            .suffix(extension)
            .tempfile_in(&self.temp_dir)?;
        std::fs::write(file.path(), contents.as_ref())?;
        // Keep the file on disk until the directory itself is removed
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
