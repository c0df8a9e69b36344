//! Automaton configuration module.
//!
//! This module defines the `[automaton]` configuration section used when
//! building Aho-Corasick automata from configured pattern sets.

use super::{ConfigResult, Validate};
use crate::data_structures::aho_corasick_automaton::{
    AutomatonConfig, DuplicatePolicy, DEFAULT_MAX_PATTERN_LENGTH,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Automaton configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonSettings {
    /// Whether matching ignores case
    pub case_insensitive: bool,

    /// Handling of repeated patterns (keep_first, keep_last, reject)
    pub duplicate_policy: DuplicatePolicy,

    /// Longest accepted pattern in characters
    pub max_pattern_length: usize,

    /// Patterns to search for in addition to those given on the command line
    pub patterns: Vec<String>,
}

impl Default for AutomatonSettings {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            duplicate_policy: DuplicatePolicy::default(),
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            patterns: Vec::new(),
        }
    }
}

impl Validate for AutomatonSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_pattern_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "automaton.max_pattern_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if let Some(index) = self.patterns.iter().position(String::is_empty) {
            return Err(ConfigError::ValidationError(format!(
                "automaton.patterns[{index}] is empty"
            )));
        }

        if let Some(pattern) = self
            .patterns
            .iter()
            .find(|p| p.chars().count() > self.max_pattern_length)
        {
            return Err(ConfigError::ValidationError(format!(
                "automaton pattern '{pattern}' exceeds max_pattern_length of {}",
                self.max_pattern_length
            )));
        }

        Ok(())
    }
}

impl AutomatonSettings {
    /// Converts this section into automaton options.
    pub fn to_automaton_config(&self) -> AutomatonConfig {
        AutomatonConfig::new()
            .case_insensitive(self.case_insensitive)
            .duplicate_policy(self.duplicate_policy)
            .max_pattern_length(self.max_pattern_length)
    }
}
