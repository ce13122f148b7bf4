//! Take-away: players alternate removing one to three coins from a single
//! pile. Whoever takes the last coin loses.

use minimax_core::{Game, PlayConvention};

/// Most coins a single move may remove
pub const MAX_TAKE: u32 = 3;

/// Live take-away match; the state is the number of coins left
#[derive(Clone, Debug)]
pub struct TakeAway {
    coins: u32,
}

impl TakeAway {
    pub fn new(coins: u32) -> Self {
        Self { coins }
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }
}

impl Game for TakeAway {
    type State = u32;

    fn neighbors(&self, state: &u32) -> Vec<u32> {
        (1..=MAX_TAKE)
            .filter_map(|take| state.checked_sub(take))
            .collect()
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == 0
    }

    fn current_position(&self) -> u32 {
        self.coins
    }

    fn apply_move(&mut self, state: u32) {
        self.coins = state;
    }

    fn convention(&self) -> PlayConvention {
        PlayConvention::Misere
    }

    fn game_over(&self) -> bool {
        self.coins == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_core::Solver;

    #[test]
    fn test_neighbors() {
        let game = TakeAway::new(5);
        assert_eq!(game.neighbors(&5), vec![4, 3, 2]);
        assert_eq!(game.neighbors(&2), vec![1, 0]);
        assert!(game.neighbors(&0).is_empty());
    }

    #[test]
    fn test_one_coin_loses() {
        let game = TakeAway::new(1);
        let mut solver = Solver::new();
        let best = solver.search(&game, 1, true);
        assert_eq!(*best.state(), 0);
        assert_eq!(best.score(), -1);
    }

    #[test]
    fn test_four_coins_leaves_one() {
        let game = TakeAway::new(4);
        let best = Solver::new().best_move(&game).unwrap();
        assert_eq!(*best.state(), 1);
        assert_eq!(best.score(), 1);
    }

    #[test]
    fn test_winning_counts_leave_one_mod_four() {
        for coins in 2..=12u32 {
            let best = Solver::new().best_move(&TakeAway::new(coins)).unwrap();
            if coins % 4 == 1 {
                assert_eq!(best.score(), -1, "{} coins should lose", coins);
            } else {
                assert_eq!(best.score(), 1, "{} coins should win", coins);
                assert_eq!(best.state() % 4, 1, "{} coins left {}", coins, best.state());
            }
        }
    }

    #[test]
    fn test_finished_game() {
        let game = TakeAway::new(0);
        assert_eq!(game.coins(), 0);
        assert!(game.game_over());
        assert!(Solver::new().best_move(&game).is_err());
    }
}
