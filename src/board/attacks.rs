//! Attack and check detection on top of the movement rules.

use super::movegen::{pawn_attacks, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
use super::{Board, Color, PieceKind, Square};

impl Board {
    /// Whether any piece of color `by` attacks `target`.
    ///
    /// Pawns attack only their two forward diagonals, whether or not the
    /// target is occupied; their forward pushes never count.
    #[must_use]
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, piece)| self.attacks_from(piece.kind, by, from, target))
    }

    fn attacks_from(&self, kind: PieceKind, color: Color, from: Square, target: Square) -> bool {
        let step = |offsets: &[(isize, isize)]| {
            offsets
                .iter()
                .any(|&(dr, dc)| from.offset(dr, dc) == Some(target))
        };
        match kind {
            PieceKind::Pawn => pawn_attacks(from, color).contains(&Some(target)),
            PieceKind::Knight => step(&KNIGHT_OFFSETS),
            PieceKind::King => step(&KING_OFFSETS),
            PieceKind::Bishop => self.slider_reaches(from, target, &DIAGONALS),
            PieceKind::Rook => self.slider_reaches(from, target, &ORTHOGONALS),
            PieceKind::Queen => {
                self.slider_reaches(from, target, &ORTHOGONALS)
                    || self.slider_reaches(from, target, &DIAGONALS)
            }
        }
    }

    /// Whether the king of `color` is attacked by the opposing side.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king. Every `Game` is constructed with one
    /// king per side and legal play never captures a king, so this only
    /// fires on a hand-built board that was never validated.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            panic!("board invariant violated: no {color} king on {self:?}");
        };
        self.is_attacked(king, color.opponent())
    }
}
