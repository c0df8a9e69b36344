//! Configuration for the Niihau Trie.

use std::collections::BTreeSet;

/// Default maximum key depth, in characters.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// The set of characters a trie accepts on insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Any Unicode scalar value
    #[default]
    Any,

    /// The 26 lowercase ASCII letters
    AsciiLowercase,

    /// An explicit character set
    Chars(BTreeSet<char>),
}

impl Alphabet {
    /// Builds an explicit alphabet from the characters of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        Self::Chars(chars.chars().collect())
    }

    /// Returns whether `c` belongs to this alphabet.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::AsciiLowercase => c.is_ascii_lowercase(),
            Self::Chars(set) => set.contains(&c),
        }
    }
}

/// Configuration options for the Niihau Trie
#[derive(Debug, Clone)]
pub struct NiihauTrieConfig {
    /// Whether to use case-sensitive keys
    pub case_sensitive: bool,

    /// Maximum key length in characters
    pub max_depth: usize,

    /// Characters accepted on insert
    pub alphabet: Alphabet,
}

impl Default for NiihauTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_depth: DEFAULT_MAX_DEPTH,
            alphabet: Alphabet::Any,
        }
    }
}

impl NiihauTrieConfig {
    /// Creates a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: true
    /// - max_depth: 1024
    /// - alphabet: any character
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether keys are compared case-sensitively.
    ///
    /// When disabled, keys are lowercased before every operation.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum key length in characters.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Restrict the characters accepted on insert.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_membership() {
        assert!(Alphabet::Any.contains('\u{1F600}'));
        assert!(Alphabet::AsciiLowercase.contains('q'));
        assert!(!Alphabet::AsciiLowercase.contains('Q'));

        let dna = Alphabet::from_chars("acgt");
        assert!(dna.contains('g'));
        assert!(!dna.contains('u'));
    }

    #[test]
    fn test_builder() {
        let config = NiihauTrieConfig::new()
            .with_case_sensitive(false)
            .with_max_depth(8)
            .with_alphabet(Alphabet::AsciiLowercase);

        assert!(!config.case_sensitive);
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.alphabet, Alphabet::AsciiLowercase);
    }
}
