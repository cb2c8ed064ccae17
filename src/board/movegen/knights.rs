use super::super::{Board, Color, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                if self.can_land(to, color) {
                    out.push(to);
                }
            }
        }
    }
}
