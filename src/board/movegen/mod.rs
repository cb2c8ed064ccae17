//! Pseudo-legal movement rules, one per piece kind.
//!
//! A pseudo-legal destination obeys the moving piece's rule but may leave
//! the mover's own king in check; filtering that out is the game's job.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, PieceKind, Square};

pub(crate) use kings::KING_OFFSETS;
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use pawns::pawn_attacks;
pub(crate) use sliders::{DIAGONALS, ORTHOGONALS};

/// Destinations for a piece of `kind` and `color` standing on `origin`.
///
/// The board is only consulted for occupancy; the piece itself need not be
/// present on `origin`.
#[must_use]
pub fn pseudo_legal_moves(kind: PieceKind, color: Color, board: &Board, origin: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(match kind {
        PieceKind::Queen => 27,
        PieceKind::Rook | PieceKind::Bishop => 14,
        _ => 8,
    });
    match kind {
        PieceKind::Pawn => board.pawn_destinations(origin, color, &mut out),
        PieceKind::Knight => board.knight_destinations(origin, color, &mut out),
        PieceKind::Bishop => board.slider_destinations(origin, color, &DIAGONALS, &mut out),
        PieceKind::Rook => board.slider_destinations(origin, color, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            board.slider_destinations(origin, color, &ORTHOGONALS, &mut out);
            board.slider_destinations(origin, color, &DIAGONALS, &mut out);
        }
        PieceKind::King => board.king_destinations(origin, color, &mut out),
    }
    out
}

impl Board {
    /// Pseudo-legal destinations of the piece on `from`, empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.piece_at(from) {
            Some(piece) => pseudo_legal_moves(piece.kind, piece.color, self, from),
            None => Vec::new(),
        }
    }

    /// Whether `to` is empty or holds an opposing piece
    #[inline]
    fn can_land(&self, to: Square, color: Color) -> bool {
        self.piece_at(to).map_or(true, |p| p.color != color)
    }
}
