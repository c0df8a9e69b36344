//! Mauka Patterns Library
//!
//! This library contains the string indexing components of the Mauka toolkit:
//! the Niihau prefix trie and an Aho-Corasick multi-pattern automaton, along
//! with the configuration and error handling shared by the command-line tool.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries; the automaton and the trie are independent
//! - Single ownership of all nodes, no reference cycles
//! - Comprehensive error handling and propagation
//! - Construction once, read-only searching afterwards

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Patterns.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
