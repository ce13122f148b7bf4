//! Solver errors

use thiserror::Error;

/// Errors raised by the solver entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// `best_move` was asked for a move in a game that has already ended
    #[error("game is already over")]
    GameOver,
}
