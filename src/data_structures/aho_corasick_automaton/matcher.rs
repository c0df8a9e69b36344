// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Multi-pattern search over a built automaton.
//!
//! The text is scanned once, left to right. After each character the
//! iterator reports the output of the current state and then every output on
//! its failure chain via dictionary links, so patterns ending at the same
//! position come out longest first.

use std::iter::{Enumerate, FusedIterator};
use std::ops::Range;
use std::str::Chars;

use serde::Serialize;

use super::automaton::AhoCorasickAutomaton;
use super::error::Result;
use super::state::{PatternId, StateId, ROOT};

/// A single pattern occurrence.
///
/// Positions are 0-based character indices into the searched text. Matches
/// order by position: start, then end, then pattern index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Match {
    /// The position of the first matched character
    pub start: usize,

    /// One past the position of the last matched character
    pub end: usize,

    /// The index of the matched pattern
    pub pattern: PatternId,
}

impl Match {
    /// Creates a new match result.
    pub fn new(pattern: PatternId, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            pattern,
        }
    }

    /// The matched character range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Iterator over matches in a text, in scan order.
#[derive(Debug)]
pub struct FindIter<'a, 't> {
    /// The automaton being run
    automaton: &'a AhoCorasickAutomaton,

    /// Remaining text characters with their positions
    chars: Enumerate<Chars<'t>>,

    /// Current automaton state
    state: StateId,

    /// Next state on the output chain to report from
    pending: Option<StateId>,

    /// Position of the last consumed character
    position: usize,
}

impl<'a, 't> FindIter<'a, 't> {
    fn new(automaton: &'a AhoCorasickAutomaton, text: &'t str) -> Self {
        Self {
            automaton,
            chars: text.chars().enumerate(),
            state: ROOT,
            pending: None,
            position: 0,
        }
    }
}

impl Iterator for FindIter<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(candidate) = self.pending {
                let state = &self.automaton.states[candidate];
                self.pending = state.dictionary_link;

                if let Some(pattern) = state.output {
                    let end = self.position + 1;
                    return Some(Match::new(pattern, end - state.depth, end));
                }
                continue;
            }

            let (position, c) = self.chars.next()?;
            self.position = position;
            self.state = self
                .automaton
                .transition(self.state, self.automaton.config.fold(c));
            self.pending = Some(self.state);
        }
    }
}

impl FusedIterator for FindIter<'_, '_> {}

impl AhoCorasickAutomaton {
    /// Returns a lazy iterator over every match in `text`, including
    /// overlapping ones.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if failure links have not been built.
    pub fn find_iter<'a, 't>(&'a self, text: &'t str) -> Result<FindIter<'a, 't>> {
        self.ensure_built()?;
        Ok(FindIter::new(self, text))
    }

    /// Reports every match in `text`, in scan order.
    ///
    /// Matches are ordered by end position; matches ending at the same
    /// position are ordered longest pattern first.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if failure links have not been built.
    pub fn search(&self, text: &str) -> Result<Vec<Match>> {
        Ok(self.find_iter(text)?.collect())
    }

    /// Finds the first match in scan order.
    pub fn find_first(&self, text: &str) -> Result<Option<Match>> {
        Ok(self.find_iter(text)?.next())
    }

    /// Checks whether any pattern occurs in `text`.
    pub fn is_match(&self, text: &str) -> Result<bool> {
        Ok(self.find_first(text)?.is_some())
    }
}
