//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chessgame::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let game = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build_game()
//!     .unwrap();
//! assert!(!game.is_game_over());
//! ```

use super::error::GameError;
use super::{Board, Color, Piece, PieceKind, Square};
use crate::game::Game;

/// A fluent builder for constructing `Board` and `Game` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
            side_to_move: Color::White,
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(square, Piece::new(kind, color));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board alone. No validation is performed.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }

    /// Build a game, validating that each side has exactly one king.
    pub fn build_game(self) -> Result<Game, GameError> {
        Game::from_board(self.board, self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_matches_new_board() {
        assert_eq!(BoardBuilder::starting_position().build(), Board::new());
    }

    #[test]
    fn later_piece_replaces_earlier_one() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, PieceKind::Knight)
            .piece(Square(3, 3), Color::Black, PieceKind::Rook)
            .build();
        assert_eq!(
            board.piece_at(Square(3, 3)),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn clear_removes_piece() {
        let board = BoardBuilder::starting_position().clear(Square(6, 4)).build();
        assert!(board.is_empty(Square(6, 4)));
    }

    #[test]
    fn build_game_requires_both_kings() {
        let result = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .build_game();
        assert_eq!(
            result.err(),
            Some(GameError::MissingKing {
                color: Color::Black
            })
        );
    }
}
