// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Automaton construction.
//!
//! Construction happens in two strictly ordered phases. Patterns are first
//! inserted into the goto graph with [`AhoCorasickAutomaton::add_pattern`].
//! [`AhoCorasickAutomaton::build_failure_links`] then computes failure and
//! dictionary links breadth-first and seals the automaton. Searching is only
//! permitted after the second phase.

use std::collections::VecDeque;

use super::config::{AutomatonConfig, DuplicatePolicy};
use super::error::{AhoCorasickError, Result};
use super::state::{PatternId, State, StateId, ROOT};

/// Multi-pattern string matcher based on the Aho-Corasick algorithm.
#[derive(Debug, Clone)]
pub struct AhoCorasickAutomaton {
    /// State arena, root at index 0
    pub(crate) states: Vec<State>,

    /// Patterns in the order they were added
    patterns: Vec<String>,

    /// Automaton options
    pub(crate) config: AutomatonConfig,

    /// Set once failure links are final
    built: bool,
}

impl AhoCorasickAutomaton {
    /// Creates an empty, unbuilt automaton with default options.
    pub fn new() -> Self {
        Self::with_config(AutomatonConfig::default())
    }

    /// Creates an empty, unbuilt automaton with the given options.
    pub fn with_config(config: AutomatonConfig) -> Self {
        Self {
            states: vec![State::new(0)],
            patterns: Vec::new(),
            config,
            built: false,
        }
    }

    /// Builds a ready-to-search automaton from a pattern list.
    ///
    /// Pattern `i` of the input is reported as pattern index `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is empty or too long, or if it is a
    /// duplicate while [`DuplicatePolicy::Reject`] is configured.
    pub fn build<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self::build_with_config(patterns, AutomatonConfig::default())
    }

    /// Builds a ready-to-search automaton from a pattern list with custom options.
    pub fn build_with_config<I, P>(patterns: I, config: AutomatonConfig) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut automaton = Self::with_config(config);
        for pattern in patterns {
            automaton.add_pattern(pattern)?;
        }
        automaton.build_failure_links()?;
        Ok(automaton)
    }

    /// Inserts a pattern into the goto graph.
    ///
    /// # Returns
    ///
    /// The index matches of this pattern are reported with. Under
    /// [`DuplicatePolicy::KeepFirst`] a duplicate still gets its own index, but
    /// matches report the earlier one.
    ///
    /// # Errors
    ///
    /// * `AlreadyBuilt` if failure links were already computed.
    /// * `EmptyPattern` / `PatternTooLong` for invalid patterns.
    /// * `DuplicatePattern` for a repeated pattern under [`DuplicatePolicy::Reject`].
    pub fn add_pattern<P>(&mut self, pattern: P) -> Result<PatternId>
    where
        P: AsRef<str>,
    {
        if self.built {
            return Err(AhoCorasickError::AlreadyBuilt);
        }

        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Err(AhoCorasickError::EmptyPattern);
        }

        let length = pattern.chars().count();
        if length > self.config.max_pattern_length {
            return Err(AhoCorasickError::PatternTooLong {
                length,
                max_length: self.config.max_pattern_length,
            });
        }

        let id = self.patterns.len();
        let mut current = ROOT;

        for c in pattern.chars().map(|c| self.config.fold(c)) {
            current = match self.states[current].next(c) {
                Some(next) => next,
                None => {
                    let next = self.states.len();
                    let depth = self.states[current].depth + 1;
                    self.states.push(State::new(depth));
                    self.states[current].transitions.insert(c, next);
                    next
                }
            };
        }

        let terminal = &mut self.states[current];
        match (terminal.output, self.config.duplicate_policy) {
            (None, _) => terminal.output = Some(id),
            (Some(existing), DuplicatePolicy::Reject) => {
                return Err(AhoCorasickError::DuplicatePattern {
                    pattern: pattern.to_owned(),
                    existing,
                });
            }
            (Some(existing), DuplicatePolicy::KeepFirst) => {
                tracing::warn!(pattern, existing, duplicate = id, "duplicate pattern, keeping first index");
            }
            (Some(existing), DuplicatePolicy::KeepLast) => {
                tracing::warn!(pattern, existing, duplicate = id, "duplicate pattern, keeping last index");
                terminal.output = Some(id);
            }
        }

        self.patterns.push(pattern.to_owned());
        Ok(id)
    }

    /// Computes failure links breadth-first and seals the automaton.
    ///
    /// Every state's link depends only on states closer to the root, so level
    /// order guarantees each parent's link is final before its children are
    /// visited.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBuilt` if called more than once.
    pub fn build_failure_links(&mut self) -> Result<()> {
        if self.built {
            return Err(AhoCorasickError::AlreadyBuilt);
        }

        let mut queue = VecDeque::with_capacity(self.states.len());

        self.states[ROOT].failure = ROOT;
        let depth_one: Vec<StateId> = self.states[ROOT].transitions.values().copied().collect();
        for child in depth_one {
            let state = &mut self.states[child];
            state.failure = ROOT;
            state.dictionary_link = None;
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            let edges: Vec<(char, StateId)> = self.states[parent]
                .transitions
                .iter()
                .map(|(&c, &child)| (c, child))
                .collect();

            for (c, child) in edges {
                let failure = self.failure_target(parent, c, child);
                let dictionary_link = if self.states[failure].output.is_some() {
                    Some(failure)
                } else {
                    self.states[failure].dictionary_link
                };

                let state = &mut self.states[child];
                state.failure = failure;
                state.dictionary_link = dictionary_link;
                queue.push_back(child);
            }
        }

        self.built = true;
        tracing::debug!(
            patterns = self.patterns.len(),
            states = self.states.len(),
            "built Aho-Corasick automaton"
        );

        Ok(())
    }

    /// Resolves the failure link of `child`, reached from `parent` via `c`.
    fn failure_target(&self, parent: StateId, c: char, child: StateId) -> StateId {
        let mut temp = self.states[parent].failure;
        while temp != ROOT && self.states[temp].next(c).is_none() {
            temp = self.states[temp].failure;
        }

        match self.states[temp].next(c) {
            Some(next) if next != child => next,
            _ => ROOT,
        }
    }

    /// Follows one character from `state`, taking failure links on mismatch.
    #[inline]
    pub(crate) fn transition(&self, mut state: StateId, c: char) -> StateId {
        loop {
            if let Some(next) = self.states[state].next(c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state].failure;
        }
    }

    pub(crate) fn ensure_built(&self) -> Result<()> {
        if self.built {
            Ok(())
        } else {
            Err(AhoCorasickError::NotInitialized)
        }
    }

    /// Returns whether failure links have been built.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Returns the pattern with the given index.
    pub fn pattern(&self, id: PatternId) -> Option<&str> {
        self.patterns.get(id).map(String::as_str)
    }

    /// Returns all patterns in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the number of patterns added.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Returns the number of states, including the root.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the automaton options.
    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    /// Returns the failure link of `state`, or `None` for an unknown state.
    pub fn failure_of(&self, state: StateId) -> Option<StateId> {
        self.states.get(state).map(|s| s.failure)
    }

    /// Walks the goto graph along `path` without failure transitions.
    pub fn goto_path(&self, path: &str) -> Option<StateId> {
        path.chars()
            .map(|c| self.config.fold(c))
            .try_fold(ROOT, |state, c| self.states[state].next(c))
    }
}

impl Default for AhoCorasickAutomaton {
    fn default() -> Self {
        Self::new()
    }
}
