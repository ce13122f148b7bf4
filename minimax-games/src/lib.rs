//! Minimax Games - Concrete games for the solver
//!
//! - Connect-three on a gravity grid (normal play)
//! - Stones: remove any number from one of several piles (misere)
//! - Take-away: remove one to three coins from a single pile (misere)
//! - `GameSetup`: serde-driven construction and self-play of any of them

pub mod connect_three;
pub mod error;
pub mod setup;
pub mod stones;
pub mod take_away;

// Re-exports for convenient access
pub use connect_three::{Board, ConnectThree, Mark, RUN_LENGTH};
pub use error::{BoardError, SetupError};
pub use setup::{GameSetup, MatchSummary};
pub use stones::{Piles, Stones};
pub use take_away::{TakeAway, MAX_TAKE};
