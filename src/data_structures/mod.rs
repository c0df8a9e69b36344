//! Data structures for Mauka Patterns.
//!
//! This module contains the string indexing structures of the toolkit.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single ownership of every node; back references are plain indices
//! - Explicit errors for invalid input, never panics on caller data

pub mod aho_corasick_automaton;
pub mod niihau_trie;

// Re-export common data structures
pub use aho_corasick_automaton::{AhoCorasickAutomaton, AhoCorasickError, AutomatonConfig, Match};
pub use niihau_trie::{NiihauTrie, NiihauTrieConfig, NiihauTrieError, NiihauTrieResult};
