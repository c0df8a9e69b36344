//! Trie configuration module.
//!
//! This module defines the `[trie]` configuration section, which controls how
//! word lists are indexed by the Niihau trie.

use super::{ConfigResult, Validate};
use crate::data_structures::niihau_trie::{Alphabet, NiihauTrieConfig, DEFAULT_MAX_DEPTH};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieSettings {
    /// Whether keys are case-sensitive
    pub case_sensitive: bool,

    /// Maximum key length in characters
    pub max_depth: usize,

    /// Characters accepted on insert (None accepts any character)
    pub allowed_chars: Option<String>,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_depth: DEFAULT_MAX_DEPTH,
            allowed_chars: None,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.allowed_chars.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "trie.allowed_chars must not be empty; omit it to accept any character"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

impl TrieSettings {
    /// Converts this section into a trie configuration.
    pub fn to_trie_config(&self) -> NiihauTrieConfig {
        let alphabet = self
            .allowed_chars
            .as_deref()
            .map_or(Alphabet::Any, Alphabet::from_chars);

        NiihauTrieConfig::new()
            .with_case_sensitive(self.case_sensitive)
            .with_max_depth(self.max_depth)
            .with_alphabet(alphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_trie_config() {
        let settings = TrieSettings {
            case_sensitive: false,
            max_depth: 12,
            allowed_chars: Some("abc".to_string()),
        };
        let config = settings.to_trie_config();

        assert!(!config.case_sensitive);
        assert_eq!(config.max_depth, 12);
        assert!(config.alphabet.contains('b'));
        assert!(!config.alphabet.contains('d'));

        assert_eq!(TrieSettings::default().to_trie_config().alphabet, Alphabet::Any);
    }

    #[test]
    fn test_validation() {
        assert!(TrieSettings::default().validate().is_ok());

        let settings = TrieSettings {
            max_depth: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = TrieSettings {
            allowed_chars: Some(String::new()),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
