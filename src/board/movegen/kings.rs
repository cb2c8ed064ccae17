use super::super::{Board, Color, Square};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Adjacent squares only; castling is not part of this rule set.
    pub(crate) fn king_destinations(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        for (dr, dc) in KING_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                if self.can_land(to, color) {
                    out.push(to);
                }
            }
        }
    }
}
