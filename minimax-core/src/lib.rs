//! Minimax Core - Game contract and exhaustive solver
//!
//! This crate provides the game-agnostic pieces of the solver:
//! - The `Game` capability set every playable game implements
//! - `Node`, a state paired with a search-assigned score
//! - Recursive minimax search with sibling de-duplication
//! - Self-play: the solver playing both sides of a match

pub mod error;
pub mod game;
pub mod node;
pub mod play;
pub mod solver;

// Re-exports for convenient access
pub use error::SolveError;
pub use game::{Game, PlayConvention, SCORE_DRAW, SCORE_LOSS, SCORE_WIN};
pub use node::Node;
pub use play::{play_out, MatchRecord, Outcome};
pub use solver::{best_move, SearchStats, Solver};
