//! The game contract
//!
//! A game owns exactly one live state and knows the rules for moving
//! between states. The solver only ever talks to games through this trait.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::node::Node;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Raw terminal value when the maximizing side wins
pub const SCORE_WIN: i32 = 1;

/// Raw terminal value when the minimizing side wins
pub const SCORE_LOSS: i32 = -1;

/// Raw value of a drawn or exhausted position
pub const SCORE_DRAW: i32 = 0;

// ============================================================================
// PLAY CONVENTION
// ============================================================================

/// Who wins when a goal state is reached
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayConvention {
    /// The side that completes the goal wins
    NormalPlay,
    /// The side forced to complete the goal loses
    Misere,
}

impl PlayConvention {
    /// Translate a raw terminal value into the score stored on a leaf.
    ///
    /// The raw value is computed for the side about to move into the goal
    /// state, while the side that just moved is the one that produced it.
    /// Under normal play that makes the side about to move the loser.
    pub fn terminal_score(self, raw: i32) -> i32 {
        match self {
            PlayConvention::NormalPlay => -raw,
            PlayConvention::Misere => raw,
        }
    }

    /// Whether the player whose move reached a goal state wins
    pub fn last_mover_wins(self) -> bool {
        matches!(self, PlayConvention::NormalPlay)
    }
}

// ============================================================================
// GAME TRAIT
// ============================================================================

/// Capability set a two-player, perfect-information game must provide.
///
/// States are value objects: producing a successor never mutates the state
/// it was derived from. `Hash` must be computed from content, since the
/// solver uses it to recognise structurally identical siblings.
pub trait Game {
    /// One configuration of the game
    type State: Clone + Eq + Hash + Debug + Display;

    /// All states reachable by exactly one legal move from `state`.
    ///
    /// Never contains `state` itself, and is empty only when no legal move
    /// exists. Equal inputs must produce equal sequences.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;

    /// True when `state` is terminal for scoring purposes
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Independent copy of the live configuration
    fn current_position(&self) -> Self::State;

    /// Replace the live configuration. No legality check is performed.
    fn apply_move(&mut self, state: Self::State);

    /// Win convention used to score goal states
    fn convention(&self) -> PlayConvention;

    /// True once the live game has ended: the current state is a goal or
    /// has no legal moves left.
    fn game_over(&self) -> bool {
        let current = self.current_position();
        self.is_goal(&current) || self.neighbors(&current).is_empty()
    }

    /// Write a terminal score onto `node`.
    ///
    /// `raw` is one of `SCORE_WIN`, `SCORE_LOSS` or `SCORE_DRAW`, expressed
    /// for the maximizing side.
    fn record_score(&self, node: &mut Node<Self::State>, raw: i32) {
        node.set_score(self.convention().terminal_score(raw));
    }
}
