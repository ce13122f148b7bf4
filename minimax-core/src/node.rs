//! Scored search nodes

use std::fmt;

/// A state paired with the score the search assigned to it.
///
/// Nodes are created fresh for every candidate successor and handed back
/// by value, so a node is never shared between branches of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<S> {
    state: S,
    score: i32,
}

impl<S> Node<S> {
    /// Wrap a state with a score of zero
    pub fn new(state: S) -> Self {
        Self { state, score: 0 }
    }

    pub fn with_score(state: S, score: i32) -> Self {
        Self { state, score }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn set_score(&mut self, score: i32) {
        self.score = score;
    }
}

impl<S: fmt::Display> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.fmt(f)
    }
}
