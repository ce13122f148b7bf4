//! Game setups: serde-describable starting positions
//!
//! A setup names one of the games plus its starting configuration, and can
//! play the match out with the solver on both sides.

use minimax_core::{play_out, Game, Outcome, Solver};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::connect_three::{Board, ConnectThree, Mark};
use crate::error::SetupError;
use crate::stones::Stones;
use crate::take_away::TakeAway;

/// Starting configuration for one of the games
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum GameSetup {
    /// Text rows, top row first; `first` moves when mark counts are equal
    ConnectThree {
        rows: Vec<String>,
        #[serde(default = "default_first")]
        first: Mark,
    },
    Stones {
        piles: Vec<u32>,
    },
    TakeAway {
        coins: u32,
    },
}

fn default_first() -> Mark {
    Mark::X
}

/// Serializable record of a self-played match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub game: String,
    /// Rendered position after each move
    pub moves: Vec<String>,
    pub outcome: Outcome,
}

impl GameSetup {
    pub fn name(&self) -> &'static str {
        match self {
            GameSetup::ConnectThree { .. } => "connect_three",
            GameSetup::Stones { .. } => "stones",
            GameSetup::TakeAway { .. } => "take_away",
        }
    }

    /// Build the game and let the solver play both sides to the end
    pub fn self_play(&self) -> Result<MatchSummary, SetupError> {
        info!("Self-play: {}", self.name());
        match self {
            GameSetup::ConnectThree { rows, first } => {
                let board = Board::from_rows(rows.as_slice(), *first)?;
                summarize(self.name(), ConnectThree::new(board))
            }
            GameSetup::Stones { piles } => {
                if piles.is_empty() {
                    return Err(SetupError::NoPiles);
                }
                summarize(self.name(), Stones::new(piles.clone()))
            }
            GameSetup::TakeAway { coins } => summarize(self.name(), TakeAway::new(*coins)),
        }
    }
}

fn summarize<G: Game>(name: &str, mut game: G) -> Result<MatchSummary, SetupError> {
    let record = play_out(&mut game, &mut Solver::new())?;
    Ok(MatchSummary {
        game: name.to_string(),
        moves: record.moves.iter().map(ToString::to_string).collect(),
        outcome: record.outcome,
    })
}
