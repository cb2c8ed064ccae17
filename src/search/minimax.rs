//! Depth-limited minimax with optional alpha-beta pruning.

use std::sync::atomic::{AtomicBool, Ordering};

use super::move_order::order_moves;
use super::Search;
use crate::board::{Move, SearchError};
use crate::eval::evaluate;
use crate::game::Game;

impl Search<'_> {
    /// Score `game` by searching `depth` more plies, White-positive.
    ///
    /// `maximizing` is true when White is to move at this node. Leaves are
    /// scored by the static evaluation; a mate found with plies to spare is
    /// pushed further from zero so the nearest mate wins. Without pruning
    /// enabled the window is carried but never narrowed.
    pub fn minimax(
        &mut self,
        game: &Game,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        stop: &AtomicBool,
    ) -> Result<i32, SearchError> {
        self.stats.nodes += 1;

        if depth == 0 || game.is_game_over() {
            self.stats.leaves += 1;
            return Ok(self.leaf_score(game, depth));
        }

        let moves = self.ordered_moves(game);
        let mut value = if maximizing { -super::INFINITY } else { super::INFINITY };

        for mv in moves {
            if stop.load(Ordering::Relaxed) {
                return Err(SearchError::Cancelled);
            }
            let child = self.child(game, mv);
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, stop)?;

            if maximizing {
                value = value.max(score);
                if self.params.alpha_beta {
                    alpha = alpha.max(value);
                }
            } else {
                value = value.min(score);
                if self.params.alpha_beta {
                    beta = beta.min(value);
                }
            }
            if self.params.alpha_beta && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(value)
    }

    fn leaf_score(&self, game: &Game, depth: u32) -> i32 {
        let score = evaluate(game, &self.params.eval);
        if game.is_game_over() {
            // only mate is non-zero here
            score + score.signum() * depth as i32
        } else {
            score
        }
    }

    /// Legal moves of `game` in this search's ordering
    pub(super) fn ordered_moves(&self, game: &Game) -> Vec<Move> {
        let mut moves = game.legal_moves().to_vec();
        order_moves(game, &mut moves, self.params.ordering);
        moves
    }

    /// A copy of `game` with `mv` applied, promoting to the configured kind
    pub(super) fn child(&self, game: &Game, mv: Move) -> Game {
        let mut child = game.clone();
        child.apply_move(mv.from, mv.to, Some(self.params.promotion));
        child
    }
}
