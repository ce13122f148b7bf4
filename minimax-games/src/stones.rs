//! Stones: misere Nim over several piles
//!
//! A move removes one or more stones from a single pile. Whoever takes the
//! last stone on the table loses.

use std::fmt;

use minimax_core::{Game, PlayConvention};
use serde::{Deserialize, Serialize};

/// Stone counts, one per pile. The number of piles never changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piles(pub Vec<u32>);

impl Piles {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for Piles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        write!(f, "{}", counts.join(" "))
    }
}

/// Live stones match
#[derive(Clone, Debug)]
pub struct Stones {
    piles: Piles,
}

impl Stones {
    pub fn new(piles: Vec<u32>) -> Self {
        Self { piles: Piles(piles) }
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }
}

impl Game for Stones {
    type State = Piles;

    /// Pile by pile, every smaller count for that pile, emptying it first
    fn neighbors(&self, state: &Piles) -> Vec<Piles> {
        let mut next = Vec::new();
        for (pile, &count) in state.0.iter().enumerate() {
            for remaining in 0..count {
                let mut counts = state.0.clone();
                counts[pile] = remaining;
                next.push(Piles(counts));
            }
        }
        next
    }

    fn is_goal(&self, state: &Piles) -> bool {
        state.is_empty()
    }

    fn current_position(&self) -> Piles {
        self.piles.clone()
    }

    fn apply_move(&mut self, state: Piles) {
        self.piles = state;
    }

    fn convention(&self) -> PlayConvention {
        PlayConvention::Misere
    }

    fn game_over(&self) -> bool {
        self.piles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_core::Solver;

    #[test]
    fn test_neighbors_cover_every_removal() {
        let game = Stones::new(vec![2, 0, 1]);
        let next = game.neighbors(game.piles());
        assert_eq!(
            next,
            vec![Piles(vec![0, 0, 1]), Piles(vec![1, 0, 1]), Piles(vec![2, 0, 0])]
        );
    }

    #[test]
    fn test_goal_only_when_all_empty() {
        let game = Stones::new(vec![0, 0]);
        assert!(game.is_goal(&Piles(vec![0, 0])));
        assert!(!game.is_goal(&Piles(vec![0, 1])));
        assert!(game.game_over());
    }

    #[test]
    fn test_single_stone_loses() {
        let game = Stones::new(vec![1]);
        let best = Solver::new().best_move(&game).unwrap();
        assert_eq!(best.state(), &Piles(vec![0]));
        assert_eq!(best.score(), -1);
    }

    #[test]
    fn test_two_singletons_win() {
        let game = Stones::new(vec![1, 1]);
        let best = Solver::new().best_move(&game).unwrap();
        assert_eq!(best.state(), &Piles(vec![0, 1]));
        assert_eq!(best.score(), 1);
    }

    #[test]
    fn test_leaves_opponent_last_stone() {
        let game = Stones::new(vec![1, 2]);
        let best = Solver::new().best_move(&game).unwrap();
        assert_eq!(best.state(), &Piles(vec![1, 0]));
        assert_eq!(best.score(), 1);
    }

    #[test]
    fn test_balanced_piles_lose() {
        let game = Stones::new(vec![2, 2]);
        let best = Solver::new().best_move(&game).unwrap();
        assert_eq!(best.state(), &Piles(vec![0, 2]));
        assert_eq!(best.score(), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Piles(vec![3, 0, 5]).to_string(), "3 0 5");
        assert_eq!(Piles(vec![3, 0, 5]).total(), 8);
    }
}
