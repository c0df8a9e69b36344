// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Aho-Corasick automaton.

use super::state::PatternId;

/// Error types for Aho-Corasick automaton operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum AhoCorasickError {
    /// Empty pattern provided
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// Pattern is too large
    #[error("Pattern of {length} characters exceeds maximum allowed length of {max_length}")]
    PatternTooLong {
        /// Length of the rejected pattern in characters
        length: usize,
        /// Configured maximum
        max_length: usize,
    },

    /// Pattern repeats an earlier one while duplicates are rejected
    #[error("Pattern '{pattern}' duplicates pattern #{existing}")]
    DuplicatePattern {
        /// The rejected pattern
        pattern: String,
        /// Index of the pattern it duplicates
        existing: PatternId,
    },

    /// Search attempted before failure links were built
    #[error("Automaton is not initialized: failure links have not been built")]
    NotInitialized,

    /// Construction attempted after failure links were built
    #[error("Automaton is already built and cannot be modified")]
    AlreadyBuilt,
}

/// Result type for Aho-Corasick automaton operations
pub type Result<T> = std::result::Result<T, AhoCorasickError>;
