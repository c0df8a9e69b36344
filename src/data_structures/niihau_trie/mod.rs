//! Niihau Trie Implementation
//!
//! This module provides a prefix tree storing a dynamic set of words with
//! exact-match lookup, prefix checks and removal. Removing a word prunes every
//! node that no longer leads to a stored word, so the trie never keeps dead
//! branches around.
//!
//! # Example
//!
//! ```
//! use mauka_patterns_lib::data_structures::niihau_trie::NiihauTrie;
//!
//! let mut trie = NiihauTrie::new();
//! trie.insert("app").unwrap();
//! trie.insert("apple").unwrap();
//!
//! assert!(trie.search("app"));
//! assert!(trie.starts_with("appl"));
//! assert!(!trie.search("appl"));
//!
//! assert!(trie.remove("apple"));
//! assert!(trie.search("app"));
//! assert!(!trie.starts_with("appl"));
//! ```
//!
//! The empty word is an ordinary word: inserting it marks the root terminal.

mod config;
mod error;
mod node;

use std::borrow::Cow;

pub use config::{Alphabet, NiihauTrieConfig, DEFAULT_MAX_DEPTH};
pub use error::NiihauTrieError;
use node::TrieNode;

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Niihau Trie is a prefix tree over a dynamic set of words.
///
/// Key features:
/// * Exact-match search and prefix checks in O(key length)
/// * Eager pruning of dead branches on removal
/// * Optional case folding and alphabet restriction
#[derive(Debug)]
pub struct NiihauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of stored words
    len: usize,

    /// Configuration options
    config: NiihauTrieConfig,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            config,
        }
    }

    /// Returns the configuration this trie was created with.
    pub fn config(&self) -> &NiihauTrieConfig {
        &self.config
    }

    fn normalize<'k>(&self, key: &'k str) -> Cow<'k, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Inserting a word that is already stored leaves the trie unchanged.
    ///
    /// # Arguments
    ///
    /// * `key` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new, `false` if it was already stored.
    /// * `Err(NiihauTrieError)` - If the word is longer than `max_depth` or uses a
    ///   character outside the configured alphabet.
    pub fn insert<K>(&mut self, key: K) -> NiihauTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());

        if key.chars().count() > self.config.max_depth {
            return Err(NiihauTrieError::KeyTooLong {
                key: key.into_owned(),
                max_depth: self.config.max_depth,
            });
        }

        if let Some(character) = key.chars().find(|&c| !self.config.alphabet.contains(c)) {
            return Err(NiihauTrieError::InvalidCharacter {
                key: key.into_owned(),
                character,
            });
        }

        Ok(self.mark(&key))
    }

    /// Creates the path for an already validated key and marks it terminal.
    fn mark(&mut self, key: &str) -> bool {
        let node = key
            .chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default());

        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;
        if is_new {
            self.len += 1;
        }

        is_new
    }

    /// Follows `key` from the root, returning the node it ends at.
    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// Checks whether `key` is a stored word.
    pub fn search<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        self.find_node(&key).is_some_and(|node| node.is_end_of_word)
    }

    /// Alias for [`NiihauTrie::search`].
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.search(key)
    }

    /// Checks whether any stored word starts with `prefix`.
    ///
    /// A prefix path can only exist while some word below it is stored, so
    /// reaching the end of the prefix is enough.
    pub fn starts_with<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        self.find_node(&prefix).is_some()
    }

    /// Removes a word from the trie, pruning nodes no other word needs.
    ///
    /// # Arguments
    ///
    /// * `key` - The word to remove.
    ///
    /// # Returns
    ///
    /// `true` if the word was removed, `false` if it was not stored (in which
    /// case the trie is untouched).
    pub fn remove<K>(&mut self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        let chars: Vec<char> = key.chars().collect();

        // The edge below the deepest node that outlives the removal is cut
        let mut cut = 0;
        let mut node = &self.root;
        for (depth, c) in chars.iter().enumerate() {
            if node.is_end_of_word || node.children.len() > 1 {
                cut = depth;
            }
            match node.children.get(c) {
                Some(child) => node = child,
                None => return false,
            }
        }

        if !node.is_end_of_word {
            return false;
        }
        let prune = !chars.is_empty() && node.children.is_empty();

        if prune {
            if let Some(anchor) = Self::walk_mut(&mut self.root, &chars[..cut]) {
                anchor.children.remove(&chars[cut]);
                tracing::trace!(
                    character = %chars[cut],
                    depth = cut,
                    pruned = chars.len() - cut,
                    "pruned trie branch"
                );
            }
        } else if let Some(target) = Self::walk_mut(&mut self.root, &chars) {
            target.is_end_of_word = false;
        }
        self.len -= 1;

        true
    }

    /// Follows `chars` from `node` along existing edges.
    fn walk_mut<'n>(node: &'n mut TrieNode, chars: &[char]) -> Option<&'n mut TrieNode> {
        chars
            .iter()
            .try_fold(node, |node, c| node.children.get_mut(c))
    }

    /// Finds all stored words that start with `prefix`, in lexicographic order.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        let mut result = Vec::new();

        if let Some(node) = self.find_node(&prefix) {
            // Depth-first with an explicit stack; `path` holds the characters
            // between the prefix node and the node being visited.
            let mut path: Vec<char> = Vec::new();
            let mut stack: Vec<(Option<char>, &TrieNode, usize)> = vec![(None, node, 0)];

            while let Some((edge, node, depth)) = stack.pop() {
                path.truncate(depth);
                path.extend(edge);

                if node.is_end_of_word {
                    let mut word = String::with_capacity(prefix.len() + path.len());
                    word.push_str(&prefix);
                    word.extend(path.iter());
                    result.push(word);
                }

                let depth = path.len();
                stack.extend(
                    node.children
                        .iter()
                        .map(|(&c, child)| (Some(c), child, depth)),
                );
            }
        }

        result.sort_unstable();
        result
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live nodes, including the root.
    ///
    /// A trie holding no words always has exactly one node.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Returns the number of edges leaving the root.
    pub fn root_degree(&self) -> usize {
        self.root.children.len()
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for NiihauTrie {
    /// Rebuilds the stored words into a fresh trie without recursing.
    fn clone(&self) -> Self {
        let mut trie = Self::with_config(self.config.clone());
        for word in self.words_with_prefix("") {
            trie.mark(&word);
        }
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for NiihauTrie {
    /// Inserts every word, skipping (and logging) words the configuration rejects.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            if let Err(e) = self.insert(word) {
                tracing::warn!(error = %e, "skipping word rejected by trie configuration");
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for NiihauTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = NiihauTrie::new();

        assert!(trie.is_empty());

        assert!(trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        assert!(trie.search("hello"));
        assert!(trie.contains("hello"));
        assert!(!trie.search("hell"));
        assert!(trie.starts_with("hell"));
        assert!(!trie.search("nonexistent"));
        assert!(!trie.starts_with("nonexistent"));

        // Default configuration is case-sensitive
        assert!(!trie.search("HELLO"));

        // Re-insertion is a no-op
        assert!(!trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);

        assert!(trie.remove("hello"));
        assert!(trie.is_empty());
        assert!(!trie.remove("hello"));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_shared_prefix_survives_removal() {
        let mut trie = NiihauTrie::new();
        trie.insert("app").unwrap();
        trie.insert("apple").unwrap();

        assert!(trie.remove("apple"));
        assert!(trie.search("app"));
        assert!(trie.starts_with("app"));
        assert!(!trie.starts_with("appl"));
        // root + a + p + p
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_removing_prefix_word_keeps_longer_word() {
        let mut trie = NiihauTrie::new();
        trie.insert("app").unwrap();
        trie.insert("apple").unwrap();

        assert!(trie.remove("app"));
        assert!(!trie.search("app"));
        assert!(trie.starts_with("app"));
        assert!(trie.search("apple"));
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_pruning_stops_at_branch() {
        let mut trie = NiihauTrie::new();
        trie.insert("cart").unwrap();
        trie.insert("care").unwrap();

        assert!(trie.remove("cart"));
        assert!(trie.search("care"));
        assert!(!trie.starts_with("cart"));
        // root + c + a + r + e
        assert_eq!(trie.node_count(), 5);

        assert!(trie.remove("care"));
        assert_eq!(trie.root_degree(), 0);
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_remove_absent_word_is_noop() {
        let mut trie = NiihauTrie::new();
        trie.insert("apple").unwrap();
        let nodes = trie.node_count();

        assert!(!trie.remove("app"));
        assert!(!trie.remove("apples"));
        assert!(!trie.remove("banana"));
        assert_eq!(trie.node_count(), nodes);
        assert!(trie.search("apple"));
    }

    #[test]
    fn test_empty_word() {
        let mut trie = NiihauTrie::new();
        assert!(!trie.search(""));
        assert!(trie.starts_with(""));

        assert!(trie.insert("").unwrap());
        assert!(trie.search(""));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 1);

        assert!(trie.remove(""));
        assert!(!trie.search(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_case_insensitive_config() {
        let mut trie = NiihauTrie::with_config(NiihauTrieConfig::new().with_case_sensitive(false));
        trie.insert("Hello").unwrap();

        assert!(trie.search("hello"));
        assert!(trie.search("HELLO"));
        assert!(trie.starts_with("HeL"));
        assert!(trie.remove("hELLo"));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_config_limits() {
        let config = NiihauTrieConfig::new()
            .with_max_depth(4)
            .with_alphabet(Alphabet::AsciiLowercase);
        let mut trie = NiihauTrie::with_config(config);

        assert_eq!(
            trie.insert("hello"),
            Err(NiihauTrieError::KeyTooLong {
                key: "hello".to_string(),
                max_depth: 4,
            })
        );
        assert_eq!(
            trie.insert("ab1"),
            Err(NiihauTrieError::InvalidCharacter {
                key: "ab1".to_string(),
                character: '1',
            })
        );
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        // Lookups with foreign characters are plain misses
        assert!(!trie.search("ab1"));
        assert!(!trie.starts_with("1"));
    }

    #[test]
    fn test_words_with_prefix() {
        let trie: NiihauTrie = ["apple", "application", "apply", "banana"]
            .into_iter()
            .collect();

        assert_eq!(
            trie.words_with_prefix("app"),
            vec!["apple", "application", "apply"]
        );
        assert_eq!(trie.words_with_prefix("").len(), 4);
        assert!(trie.words_with_prefix("orange").is_empty());
    }

    #[test]
    fn test_clear() {
        let mut trie: NiihauTrie = ["one", "two", "three"].into_iter().collect();
        assert_eq!(trie.len(), 3);

        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.starts_with("t"));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_extend_skips_rejected_words() {
        let mut trie = NiihauTrie::with_config(NiihauTrieConfig::new().with_max_depth(3));
        trie.extend(["ant", "bee", "wasp"]);

        assert_eq!(trie.len(), 2);
        assert!(!trie.starts_with("w"));
    }

    #[test]
    fn test_deep_word_without_recursion() {
        let config = NiihauTrieConfig::new().with_max_depth(1_000_000);
        let mut trie = NiihauTrie::with_config(config);
        let deep = "a".repeat(500_000);
        let shallow = "a".repeat(10);

        assert!(trie.insert(&deep).unwrap());
        assert!(trie.insert(&shallow).unwrap());
        assert_eq!(trie.node_count(), 500_001);
        assert_eq!(trie.words_with_prefix("aaaaaaaaaa").len(), 2);

        let copy = trie.clone();
        assert!(copy.search(&deep));

        assert!(trie.remove(&deep));
        assert!(trie.search(&shallow));
        assert_eq!(trie.node_count(), 11);

        assert!(trie.remove(&shallow));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.root_degree(), 0);
        drop(copy);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut trie = NiihauTrie::with_config(NiihauTrieConfig::new().with_case_sensitive(false));
        trie.extend(["Alpha", "alpine", ""]);

        let copy = trie.clone();
        assert!(trie.remove("alpha"));

        assert_eq!(copy.len(), 3);
        assert!(copy.search("ALPHA"));
        assert!(copy.search(""));
        assert_eq!(copy.node_count(), trie.node_count() + 2);
    }
}
