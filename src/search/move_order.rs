//! Move ordering for alpha-beta pruning.

use super::constants::{CAPTURE_SCORE, VICTIM_WEIGHT};
use super::params::MoveOrdering;
use crate::board::Move;
use crate::game::Game;

/// MVV-LVA score of a move, `0` for a quiet move
#[must_use]
pub fn mvv_lva(game: &Game, mv: Move) -> i32 {
    let board = game.board();
    match (board.piece_at(mv.to), board.piece_at(mv.from)) {
        (Some(victim), Some(attacker)) => {
            CAPTURE_SCORE + VICTIM_WEIGHT * victim.kind.value() - attacker.kind.value()
        }
        _ => 0,
    }
}

/// Reorder `moves` in place. Every policy is a stable sort, so equally
/// ranked moves keep their generation order.
pub fn order_moves(game: &Game, moves: &mut [Move], ordering: MoveOrdering) {
    match ordering {
        MoveOrdering::Natural => {}
        MoveOrdering::CapturesFirst => moves.sort_by_key(|mv| !game.is_capture(mv.to)),
        MoveOrdering::MvvLva => moves.sort_by_key(|&mv| std::cmp::Reverse(mvv_lva(game, mv))),
    }
}
