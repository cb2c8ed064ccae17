#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::PieceKind;
use crate::eval::EvalParams;

/// How a node's children are ordered before they are searched
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOrdering {
    /// Board scan order, as generated
    Natural,
    /// Captures ahead of quiet moves, otherwise stable
    #[default]
    CapturesFirst,
    /// Captures by most valuable victim, then least valuable attacker
    MvvLva,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    pub ordering: MoveOrdering,
    /// Piece a pawn becomes whenever the search promotes
    pub promotion: PieceKind,
    /// `false` forces the full window through every node
    pub alpha_beta: bool,
    pub use_book: bool,
    pub eval: EvalParams,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            ordering: MoveOrdering::CapturesFirst,
            promotion: PieceKind::Queen,
            alpha_beta: true,
            use_book: true,
            eval: EvalParams::default(),
        }
    }
}
