//! Errors for building games from external configurations

use minimax_core::SolveError;
use thiserror::Error;

/// Reasons a connect-three board cannot be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell '{symbol}' at row {row}, column {column}")]
    InvalidCell {
        symbol: char,
        row: usize,
        column: usize,
    },

    #[error("column {column} has a mark above an empty cell")]
    FloatingMark { column: usize },

    #[error("invalid mark counts: X={x_count}, O={o_count} (may differ by at most one)")]
    UnbalancedMarks { x_count: usize, o_count: usize },
}

/// Errors raised while building or playing a `GameSetup`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("stones game needs at least one pile")]
    NoPiles,

    #[error(transparent)]
    Solve(#[from] SolveError),
}
