// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Aho-Corasick automaton.

use serde::{Deserialize, Serialize};

/// Maximum allowed pattern length in characters
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 1024 * 32;

/// What to do when a pattern string is added twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Matches report the index of the first occurrence in the pattern list
    #[default]
    KeepFirst,

    /// Matches report the index of the last occurrence in the pattern list
    KeepLast,

    /// Adding a duplicate fails with `AhoCorasickError::DuplicatePattern`
    Reject,
}

/// Options for configuring automaton construction and matching.
#[derive(Debug, Clone)]
pub struct AutomatonConfig {
    /// Whether to fold case on patterns and text
    pub case_insensitive: bool,

    /// Handling of repeated patterns
    pub duplicate_policy: DuplicatePolicy,

    /// Longest accepted pattern, in characters
    pub max_pattern_length: usize,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            duplicate_policy: DuplicatePolicy::KeepFirst,
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
        }
    }
}

impl AutomatonConfig {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should be case-insensitive.
    ///
    /// Folding maps each character to its single-character lowercase form
    /// (characters whose lowercase form is longer are kept as-is), so pattern
    /// lengths and text positions are unaffected.
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Sets the duplicate pattern policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Sets the maximum pattern length in characters.
    pub fn max_pattern_length(mut self, max: usize) -> Self {
        self.max_pattern_length = max;
        self
    }

    #[inline]
    pub(crate) fn fold(&self, c: char) -> char {
        if self.case_insensitive {
            fold_char(c)
        } else {
            c
        }
    }
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
