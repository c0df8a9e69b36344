// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Aho-Corasick automaton for multi-pattern string searching.
//!
//! This module provides an implementation of the Aho-Corasick algorithm, which
//! finds every occurrence of every pattern from a fixed set in a single pass
//! over the text. Patterns are inserted into a trie-shaped goto graph, failure
//! links are computed breadth-first, and the text is then streamed through the
//! automaton.
//!
//! # Features
//!
//! - Reports all matches, including overlapping ones and patterns that are
//!   suffixes of other patterns
//! - Optional case-insensitive matching
//! - Explicit handling of duplicate patterns
//! - Lazy iterator interface alongside collected results
//!
//! # Example
//!
//! ```
//! use mauka_patterns_lib::data_structures::aho_corasick_automaton::{AhoCorasickAutomaton, Match};
//!
//! let automaton = AhoCorasickAutomaton::build(["he", "she", "his", "hers"]).unwrap();
//! let matches = automaton.search("ahishers").unwrap();
//!
//! let found: Vec<(usize, &str)> = matches
//!     .iter()
//!     .map(|m| (m.start, automaton.pattern(m.pattern).unwrap()))
//!     .collect();
//! assert_eq!(found, vec![(1, "his"), (3, "she"), (4, "he"), (4, "hers")]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Construction: O(total pattern length) states, with amortized O(1)
//!   failure-chain work per state
//! - Search: O(n + z) where n is the text length and z the number of matches
//! - Space: one arena entry per distinct pattern prefix

mod automaton;
mod config;
mod error;
mod matcher;
mod state;

// Re-exports
pub use automaton::AhoCorasickAutomaton;
pub use config::{AutomatonConfig, DuplicatePolicy, DEFAULT_MAX_PATTERN_LENGTH};
pub use error::{AhoCorasickError, Result};
pub use matcher::{FindIter, Match};
pub use state::{PatternId, StateId, ROOT};

#[cfg(test)]
mod tests;
