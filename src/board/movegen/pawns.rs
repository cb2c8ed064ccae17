use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                out.push(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for to in pawn_attacks(from, color).into_iter().flatten() {
            if self.is_enemy(to, color) {
                out.push(to);
            }
        }
    }
}

/// The two diagonal squares a pawn on `from` attacks, whether or not
/// anything stands there.
#[inline]
pub(crate) fn pawn_attacks(from: Square, color: Color) -> [Option<Square>; 2] {
    let dir = color.pawn_direction();
    [from.offset(dir, -1), from.offset(dir, 1)]
}
