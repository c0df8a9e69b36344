//! Node implementation for the Niihau Trie.
//!
//! This module provides the TrieNode structure used in the Niihau Trie implementation.
//! Every node is exclusively owned by its parent; the root is owned by the trie itself.

use fnv::FnvHashMap;

/// A node in the Niihau Trie.
///
/// Each node represents one character position in a key path. A node is
/// terminal when some stored word ends exactly here.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Map of characters to owned child nodes
    pub(crate) children: FnvHashMap<char, TrieNode>,

    /// Whether a stored word ends at this node
    pub(crate) is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A non-terminal leaf serves no stored word and must be pruned.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.is_end_of_word && self.children.is_empty()
    }

    /// Counts this node and every node below it.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    // Word length is bounded only by configuration, so children are
    // detached onto a heap stack instead of dropping recursively.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_prunable() {
        let node = TrieNode::new();
        assert!(node.is_prunable());
        assert_eq!(node.subtree_size(), 1);
    }

    #[test]
    fn test_terminal_or_parent_nodes_survive() {
        let mut node = TrieNode::new();
        node.is_end_of_word = true;
        assert!(!node.is_prunable());

        let mut parent = TrieNode::new();
        parent.children.insert('a', node);
        assert!(!parent.is_prunable());
        assert_eq!(parent.subtree_size(), 2);
    }

    #[test]
    fn test_deep_chain_size_and_drop() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..300_000 {
            node = node.children.entry('x').or_default();
        }
        node.is_end_of_word = true;

        assert_eq!(root.subtree_size(), 300_001);
        drop(root);
    }
}
