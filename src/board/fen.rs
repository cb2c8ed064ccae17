use super::error::FenError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse the piece placement field of a FEN string.
    ///
    /// The first rank listed is row 0 (rank 8).
    pub fn try_from_placement(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_symbol(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankLength {
                        rank: row,
                        files: col + 1,
                    });
                }
                board.set(Square(row, col), piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank: row,
                    files: col,
                });
            }
        }

        Ok(board)
    }

    /// Convert the board to the piece placement field of a FEN string.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.symbol());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

/// Parse the placement and side-to-move fields of a FEN string.
///
/// Castling, en passant and clock fields are accepted and ignored.
pub(crate) fn parse_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(FenError::TooFewParts { found: parts.len() });
    }

    let board = Board::try_from_placement(parts[0])?;
    let side = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    Ok((board, side))
}
