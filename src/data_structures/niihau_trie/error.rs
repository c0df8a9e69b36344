//! Error types for Niihau Trie.
//!
//! This module defines the error types that can occur during Niihau Trie operations.
//! Lookups and removals of absent words are not errors; only inserts that violate
//! the configured limits fail.

/// Errors that can occur in Niihau Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum NiihauTrieError {
    /// Error when a key exceeds the maximum depth allowed.
    #[error("Key '{key}' exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Error when a key contains a character outside the configured alphabet.
    #[error("Character {character:?} in key '{key}' is outside the configured alphabet")]
    InvalidCharacter {
        /// The rejected key.
        key: String,
        /// The first offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NiihauTrieError::KeyTooLong {
            key: "test".to_string(),
            max_depth: 3,
        };
        assert_eq!(err.to_string(), "Key 'test' exceeds maximum trie depth of 3");

        let err = NiihauTrieError::InvalidCharacter {
            key: "caf\u{e9}".to_string(),
            character: '\u{e9}',
        };
        assert_eq!(
            err.to_string(),
            "Character '\u{e9}' in key 'caf\u{e9}' is outside the configured alphabet"
        );
    }
}
