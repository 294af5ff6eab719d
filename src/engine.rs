//! The search engine: plain fixed-depth negamax.

use log::debug;

use crate::constants::SCORE_INF;
use crate::evaluate::evaluate;
use crate::game::Game;
use crate::r#move::Move;

/// Default search depth in plies.
pub const DEPTH_MAX: i32 = 1;

/// A fixed-depth negamax searcher. No pruning, ordering or caching: every
/// node applies each legal move on the shared board, recurses, negates the
/// child score and undoes the move.
pub struct Engine {
    pub max_depth: i32,
    pub nodes_searched: u64,
}

impl Engine {
    pub fn new(max_depth: i32) -> Engine {
        Engine {
            max_depth,
            nodes_searched: 0,
        }
    }

    /// Picks the best move for the side to move.
    ///
    /// Returns `(None, score)` when that side has no legal moves; the caller
    /// decides whether that means a loss or a blocked position.
    pub fn search(&mut self, game: &mut Game) -> (Option<Move>, i32) {
        self.nodes_searched = 0;
        let result = self.negamax(game, 0);
        debug!(
            "searched {} node(s) to depth {}, score {}",
            self.nodes_searched, self.max_depth, result.1
        );
        result
    }

    fn negamax(&mut self, game: &mut Game, depth: i32) -> (Option<Move>, i32) {
        if depth >= self.max_depth {
            return (None, evaluate(game.board(), game.current_player()));
        }

        let mut best_move = None;
        let mut best_score = -SCORE_INF;
        for mv in game.legal_moves() {
            game.make_move(&mv);
            self.nodes_searched += 1;
            let score = -self.negamax(game, depth + 1).1;
            game.cancel_move(&mv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            // No legal moves at an interior node: report the static
            // evaluation, same as a leaf.
            return (None, evaluate(game.board(), game.current_player()));
        }
        (best_move, best_score)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(DEPTH_MAX)
    }
}
