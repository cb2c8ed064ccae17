//! The 8x8 board: pure data plus accessors, no rules.

use std::fmt;

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board owns its cells outright; `clone` copies every occupied cell so a
/// clone can be mutated without affecting the original.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting layout. Black occupies rows 0-1, White rows 6-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// A board with no pieces on it
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece on `sq`.
    ///
    /// # Panics
    /// If `sq` is off the board (see [`Square::is_on_board`]). The same
    /// holds for every accessor taking a `Square`.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Whether `sq` holds a piece of the color opposing `color`
    #[inline]
    #[must_use]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color != color)
    }

    /// Place a piece, replacing whatever stood on the square
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.0][sq.1] = Some(piece);
    }

    /// Empty a square, returning what stood there
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1].take()
    }

    /// Move whatever stands on `from` to `to`, vacating `from`.
    ///
    /// Anything on `to` is captured. No rules are consulted.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.squares[from.0][from.1].take();
        self.squares[to.0][to.1] = piece;
    }

    /// Every occupied square with its piece, row by row from a8
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares belonging to `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Square of the first king of `color`, scanning from a8
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces of the given kind and color
    #[must_use]
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color).filter(|(_, p)| p.kind == kind).count()
    }

    /// Mirror the board top to bottom and swap every piece's color.
    ///
    /// The result is the same position seen from the other side.
    #[must_use]
    pub fn flipped(&self) -> Board {
        let mut flipped = Board::empty();
        for (sq, piece) in self.pieces() {
            flipped.set(sq.flip_vertical(), piece.recolored());
        }
        flipped
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = self.squares[row][col].map_or('.', Piece::symbol);
                write!(f, "{c}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
