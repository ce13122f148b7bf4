//! Exhaustive minimax search
//!
//! The search walks the full successor relation of a game, alternating
//! between a maximizing and a minimizing role. There is no depth limit and
//! no pruning window: the only shortcut is that a role stops expanding
//! siblings once it has found an outright win for itself.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::error::SolveError;
use crate::game::{Game, SCORE_DRAW, SCORE_LOSS, SCORE_WIN};
use crate::node::Node;

// ============================================================================
// SEARCH STATISTICS
// ============================================================================

/// Counters collected over one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered by the recursion
    pub nodes_visited: u64,
    /// Goal states scored through the game's convention
    pub terminal_leaves: u64,
    /// Non-goal states with no legal move, scored as draws
    pub exhausted_leaves: u64,
    /// Siblings skipped because an equal state was already searched
    pub duplicates_skipped: u64,
    /// Siblings skipped because the best possible value was already found
    pub early_exits: u64,
}

// ============================================================================
// SOLVER
// ============================================================================

/// Game-agnostic minimax solver
#[derive(Debug, Default)]
pub struct Solver {
    stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent call to `best_move` or `search`
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best next position from the game's current state.
    ///
    /// The returned node's score is the backed-up value of that position for
    /// the side to move: 1 for a forced win, -1 for a forced loss, 0 for a
    /// draw.
    pub fn best_move<G: Game>(&mut self, game: &G) -> Result<Node<G::State>, SolveError> {
        if game.game_over() {
            return Err(SolveError::GameOver);
        }

        let best = self.search(game, game.current_position(), true);
        debug!(
            "Best move {:?} scores {} ({} nodes, {} duplicates, {} early exits)",
            best.state(),
            best.score(),
            self.stats.nodes_visited,
            self.stats.duplicates_skipped,
            self.stats.early_exits,
        );
        Ok(best)
    }

    /// Run the recursive search from `state`.
    ///
    /// If `state` is already terminal the returned node is `state` itself,
    /// scored through the game's convention. Otherwise it is the best
    /// successor of `state` for the given role.
    pub fn search<G: Game>(&mut self, game: &G, state: G::State, maximizing: bool) -> Node<G::State> {
        self.stats = SearchStats::default();
        self.minimax(game, Node::new(state), maximizing)
    }

    fn minimax<G: Game>(
        &mut self,
        game: &G,
        mut node: Node<G::State>,
        maximizing: bool,
    ) -> Node<G::State> {
        self.stats.nodes_visited += 1;

        // The side that just moved produced the goal; the convention decides
        // what that means for the side about to move.
        if game.is_goal(node.state()) {
            self.stats.terminal_leaves += 1;
            let raw = if maximizing { SCORE_WIN } else { SCORE_LOSS };
            game.record_score(&mut node, raw);
            return node;
        }

        let successors = game.neighbors(node.state());
        if successors.is_empty() {
            self.stats.exhausted_leaves += 1;
            game.record_score(&mut node, SCORE_DRAW);
            return node;
        }

        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best: Option<Node<G::State>> = None;
        // Scoped to this call: only siblings are de-duplicated
        let mut visited: FxHashSet<&G::State> = FxHashSet::default();

        for (index, successor) in successors.iter().enumerate() {
            if is_best_possible(best_value, maximizing) {
                self.stats.early_exits += (successors.len() - index) as u64;
                break;
            }

            if !visited.insert(successor) {
                self.stats.duplicates_skipped += 1;
                trace!("Skipping duplicate sibling {:?}", successor);
                continue;
            }

            let value = self
                .minimax(game, Node::new(successor.clone()), !maximizing)
                .score();

            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                // Interior values are backed up as-is, never through the
                // game's terminal convention.
                best = Some(Node::with_score(successor.clone(), value));
            }
        }

        match best {
            Some(best) => best,
            // The first successor is always searched, so this only happens
            // if a game records scores outside the i32 sentinels.
            None => {
                game.record_score(&mut node, SCORE_DRAW);
                node
            }
        }
    }
}

/// True once a role has found the best value it could ever get
fn is_best_possible(value: i32, maximizing: bool) -> bool {
    if maximizing {
        value >= SCORE_WIN
    } else {
        value <= SCORE_LOSS
    }
}

/// Best next position for `game`, using a fresh solver
pub fn best_move<G: Game>(game: &G) -> Result<Node<G::State>, SolveError> {
    Solver::new().best_move(game)
}

// ============================================================================
// TESTS
// ============================================================================
