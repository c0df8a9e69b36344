//! Test modules for Mauka Patterns.
//!
//! This module contains the crate-level testing infrastructure:
//! - Unit tests for configuration and error handling
//! - Property-based tests for the Niihau trie using proptest
//! - Test fixtures and utilities
//!
//! Automaton tests live next to the automaton in its own `tests` module.

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, string_strategy, word_list_strategy, word_strategy, TestFixture,
};
