//! Self-play: the solver choosing moves for both sides

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SolveError;
use crate::game::Game;
use crate::solver::Solver;

/// Result of a finished match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The side that made the first move won
    FirstMover,
    /// The side that made the second move won
    SecondMover,
    Draw,
}

/// Every position reached during a match, in order, plus its result
#[derive(Clone, Debug)]
pub struct MatchRecord<S> {
    pub moves: Vec<S>,
    pub outcome: Outcome,
}

impl<S> MatchRecord<S> {
    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }
}

/// Play the game to the end, with `solver` choosing every move.
///
/// The live game is updated in place, so on return it holds the final
/// position.
pub fn play_out<G: Game>(
    game: &mut G,
    solver: &mut Solver,
) -> Result<MatchRecord<G::State>, SolveError> {
    let mut moves = Vec::new();

    while !game.game_over() {
        let best = solver.best_move(game)?;
        let score = best.score();
        let state = best.into_state();
        info!("Move {}: {:?} (score {})", moves.len() + 1, state, score);
        game.apply_move(state.clone());
        moves.push(state);
    }

    let outcome = decide_outcome(game, &moves);
    info!("Match finished after {} moves: {:?}", moves.len(), outcome);

    Ok(MatchRecord { moves, outcome })
}

fn decide_outcome<G: Game>(game: &G, moves: &[G::State]) -> Outcome {
    let last = match moves.last() {
        Some(last) => last,
        None => return Outcome::Draw,
    };
    if !game.is_goal(last) {
        return Outcome::Draw;
    }

    let first_moved_last = moves.len() % 2 == 1;
    if first_moved_last == game.convention().last_mover_wins() {
        Outcome::FirstMover
    } else {
        Outcome::SecondMover
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayConvention;

    /// Single pile, take one to three, take-all first
    struct Pile {
        count: u32,
        convention: PlayConvention,
    }

    impl Game for Pile {
        type State = u32;

        fn neighbors(&self, state: &u32) -> Vec<u32> {
            (1..=3u32.min(*state)).rev().map(|t| state - t).collect()
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == 0
        }

        fn current_position(&self) -> u32 {
            self.count
        }

        fn apply_move(&mut self, state: u32) {
            self.count = state;
        }

        fn convention(&self) -> PlayConvention {
            self.convention
        }
    }

    #[test]
    fn test_misere_forced_win() {
        let mut game = Pile { count: 4, convention: PlayConvention::Misere };
        let record = play_out(&mut game, &mut Solver::new()).unwrap();
        assert_eq!(record.moves, vec![1, 0]);
        assert_eq!(record.outcome, Outcome::FirstMover);
        assert_eq!(game.current_position(), 0);
    }

    #[test]
    fn test_misere_last_coin_loses() {
        let mut game = Pile { count: 1, convention: PlayConvention::Misere };
        let record = play_out(&mut game, &mut Solver::new()).unwrap();
        assert_eq!(record.moves, vec![0]);
        assert_eq!(record.outcome, Outcome::SecondMover);
    }

    #[test]
    fn test_normal_play_takes_all() {
        let mut game = Pile { count: 3, convention: PlayConvention::NormalPlay };
        let record = play_out(&mut game, &mut Solver::new()).unwrap();
        assert_eq!(record.moves, vec![0]);
        assert_eq!(record.outcome, Outcome::FirstMover);
    }

    #[test]
    fn test_finished_game_is_draw() {
        let mut game = Pile { count: 0, convention: PlayConvention::Misere };
        let record = play_out(&mut game, &mut Solver::new()).unwrap();
        assert!(record.moves.is_empty());
        assert!(record.is_draw());
    }
}
