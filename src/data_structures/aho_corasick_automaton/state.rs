// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Automaton states.
//!
//! States live in a single arena owned by the automaton and refer to one
//! another by index. Goto transitions form a tree rooted at [`ROOT`]; failure
//! and dictionary links are plain back references into the same arena.

use fnv::FnvHashMap;

/// Index of a state in the automaton arena.
pub type StateId = usize;

/// Index of a pattern in the order it was added.
pub type PatternId = usize;

/// The root state. Its failure link points to itself.
pub const ROOT: StateId = 0;

#[derive(Debug, Clone)]
pub(crate) struct State {
    /// Goto transitions
    pub(crate) transitions: FnvHashMap<char, StateId>,

    /// Longest proper suffix of this state's path that is also a trie prefix
    pub(crate) failure: StateId,

    /// Nearest state on the failure chain (excluding this one) with an output
    pub(crate) dictionary_link: Option<StateId>,

    /// Pattern ending exactly at this state
    pub(crate) output: Option<PatternId>,

    /// Path length from the root, in characters
    pub(crate) depth: usize,
}

impl State {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            transitions: FnvHashMap::default(),
            failure: ROOT,
            dictionary_link: None,
            output: None,
            depth,
        }
    }

    #[inline]
    pub(crate) fn next(&self, c: char) -> Option<StateId> {
        self.transitions.get(&c).copied()
    }
}
