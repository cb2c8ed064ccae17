//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, column).
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1);
/// column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, column)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Whether both coordinates are in 0-7.
    ///
    /// The fields are public, so a `Square` built directly may not be.
    /// Board accessors index with it unchecked.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Step by a signed row/column delta, `None` when it leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }

    /// All 64 squares, row by row from a8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_rank_eight_for_row_zero() {
        assert_eq!(Square(0, 0).to_string(), "a8");
        assert_eq!(Square(7, 7).to_string(), "h1");
        assert_eq!(Square(6, 4).to_string(), "e2");
        assert_eq!(Square(8, 0).to_string(), "(8, 0)");
    }

    #[test]
    fn is_on_board_matches_new() {
        assert!(Square(7, 7).is_on_board());
        assert!(!Square(8, 0).is_on_board());
        assert!(!Square(0, 8).is_on_board());
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn parses_algebraic_notation() {
        assert_eq!("e2".parse::<Square>(), Ok(Square(6, 4)));
        assert_eq!("a8".parse::<Square>(), Ok(Square(0, 0)));
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e22".parse::<Square>().is_err());
    }

    #[test]
    fn offset_rejects_off_board_steps() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
        assert_eq!(Square(4, 4).offset(-2, 1), Some(Square(2, 5)));
    }

    #[test]
    fn try_from_reports_the_bad_coordinate() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::ColumnOutOfBounds { col: 9 })
        );
        assert!(Square::new(3, 3).is_some());
        assert!(Square::new(3, 8).is_none());
    }
}
