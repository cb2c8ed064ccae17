//! Static evaluation.
//!
//! Scores are in centipawns and White-positive: material plus piece-square
//! bonuses, added for White pieces and subtracted for Black ones. Swapping
//! every piece's color and mirroring the board negates the score.

pub mod tables;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, PieceKind};
use crate::game::Game;

/// Magnitude of a checkmate score before any depth adjustment
pub const MATE_SCORE: i32 = 100_000;

/// Coarse game phase, selects the king table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    Middlegame,
    Endgame,
}

/// Tunable evaluation terms
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalParams {
    /// Non-king material of both sides at or below which the endgame
    /// king table is used
    pub endgame_material: i32,
    /// Bonus for the side giving check, `0` disables it
    pub check_bonus: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            endgame_material: 1500,
            check_bonus: 50,
        }
    }
}

/// Combined value of every non-king piece on the board, both colors
#[must_use]
pub fn non_king_material(board: &Board) -> i32 {
    board
        .pieces()
        .filter(|(_, p)| p.kind != PieceKind::King)
        .map(|(_, p)| p.kind.value())
        .sum()
}

#[must_use]
pub fn game_phase(board: &Board, params: &EvalParams) -> Phase {
    if non_king_material(board) <= params.endgame_material {
        Phase::Endgame
    } else {
        Phase::Middlegame
    }
}

/// Material and positional score of a board, positive when White is better
#[must_use]
pub fn evaluate_board(board: &Board, params: &EvalParams) -> i32 {
    let phase = game_phase(board, params);
    board
        .pieces()
        .map(|(sq, piece)| {
            let value =
                piece.kind.value() + tables::positional(piece.kind, piece.color, sq, phase);
            piece.color.sign() * value
        })
        .sum()
}

/// Score a game position, positive when White is better.
///
/// A finished game scores `-MATE_SCORE` from the mated side's point of view
/// and `0` for stalemate. Otherwise the board score is adjusted by
/// `check_bonus` toward the side giving check.
#[must_use]
pub fn evaluate(game: &Game, params: &EvalParams) -> i32 {
    let side = game.side_to_move();
    if game.is_game_over() {
        return if game.in_check(side) {
            -side.sign() * MATE_SCORE
        } else {
            0
        };
    }

    let mut score = evaluate_board(game.board(), params);
    if params.check_bonus != 0 && game.in_check(side) {
        score += side.opponent().sign() * params.check_bonus;
    }
    score
}

/// `evaluate` seen from `color`'s side: positive when `color` is better
#[inline]
#[must_use]
pub fn evaluate_for(game: &Game, color: Color, params: &EvalParams) -> i32 {
    color.sign() * evaluate(game, params)
}
