use super::super::{Board, Color, Square};

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl Board {
    /// Walk each ray until the edge, a friendly piece (excluded) or an
    /// opposing piece (included).
    pub(crate) fn slider_destinations(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
        out: &mut Vec<Square>,
    ) {
        for &(dr, dc) in rays {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, dc) {
                match self.piece_at(to) {
                    None => out.push(to),
                    Some(p) => {
                        if p.color != color {
                            out.push(to);
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
    }

    /// Whether a slider on `from` moving along `rays` reaches `target`.
    ///
    /// Only the ray pointing at `target` is walked.
    pub(crate) fn slider_reaches(&self, from: Square, target: Square, rays: &[(isize, isize)]) -> bool {
        let dr = target.0 as isize - from.0 as isize;
        let dc = target.1 as isize - from.1 as isize;
        if dr == 0 && dc == 0 {
            return false;
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return false;
        }
        let step = (dr.signum(), dc.signum());
        if !rays.contains(&step) {
            return false;
        }

        let mut cursor = from;
        while let Some(next) = cursor.offset(step.0, step.1) {
            if next == target {
                return true;
            }
            if !self.is_empty(next) {
                return false;
            }
            cursor = next;
        }
        false
    }
}
