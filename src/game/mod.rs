//! Game state machine.
//!
//! A `Game` owns a board, the side to move, the textual move history and the
//! legal move list of the side to move. The list is recomputed after every
//! applied move, so the terminal flag is simply "no legal moves left".

mod legal;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{trace, warn};

use crate::board::{
    history_key, parse_fen, Board, Color, GameError, Move, MoveError, MoveParseError, Piece,
    PieceKind, Square,
};

pub use legal::{leaves_king_in_check, legal_moves};

/// Outcome of a game as seen from the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check with no legal moves
    Checkmate { winner: Color },
    /// The side to move has no legal moves and is not in check
    Stalemate,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// A game in progress: board, side to move, history and legal moves.
///
/// `Clone` is a full value copy. A clone shares no board cells with its
/// parent, which is what lets the search explore one clone per branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<String>,
    legal: Vec<Move>,
    /// History counts from the standard starting position
    from_start: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move, empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::White)
    }

    fn with_board(board: Board, side_to_move: Color) -> Self {
        let legal = legal_moves(&board, side_to_move);
        let from_start = side_to_move == Color::White && board == Board::new();
        Game {
            board,
            side_to_move,
            history: Vec::new(),
            legal,
            from_start,
        }
    }

    /// Start a game from an arbitrary board.
    ///
    /// Each side must have exactly one king, and the side not to move must
    /// not be in check: its king could otherwise be captured.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, GameError> {
        for color in Color::BOTH {
            match board.count(PieceKind::King, color) {
                0 => return Err(GameError::MissingKing { color }),
                1 => {}
                count => return Err(GameError::MultipleKings { color, count }),
            }
        }
        let waiting = side_to_move.opponent();
        if board.in_check(waiting) {
            return Err(GameError::OpponentInCheck { color: waiting });
        }
        Ok(Self::with_board(board, side_to_move))
    }

    /// Start a game from a FEN string.
    ///
    /// Only the placement and side-to-move fields are read.
    pub fn try_from_fen(fen: &str) -> Result<Self, GameError> {
        let (board, side) = parse_fen(fen)?;
        Self::from_board(board, side)
    }

    /// FEN of the current position. Castling and en passant are always `-`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!(
            "{} {side} - - 0 {}",
            self.board.to_placement(),
            1 + self.history.len() / 2
        )
    }

    /// Back to the starting position with an empty history
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Applied moves as `e2e4`-style tokens, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whether the history is counted from the standard starting position.
    ///
    /// False for games set up from another position, whose history keys
    /// mean nothing to the opening book.
    #[inline]
    #[must_use]
    pub fn from_start(&self) -> bool {
        self.from_start
    }

    /// Canonical encoding of the history, as used for opening book lookups
    #[must_use]
    pub fn history_key(&self) -> String {
        history_key(&self.history)
    }

    /// History as numbered move pairs: `1. e2e4 e7e5`.
    #[must_use]
    pub fn numbered_history(&self) -> Vec<String> {
        self.history
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
            .collect()
    }

    /// Legal moves for the side to move, in board scan order
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    /// Legal destinations of the piece on `from`
    #[must_use]
    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        self.legal
            .iter()
            .filter(|m| m.from == from)
            .map(|m| m.to)
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal.contains(&mv)
    }

    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    /// True once the side to move has no legal moves
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.legal.is_empty()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.is_game_over() {
            GameStatus::InProgress
        } else if self.in_check(self.side_to_move) {
            GameStatus::Checkmate {
                winner: self.side_to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Whether `to` is currently occupied. Off-board squares never are.
    #[inline]
    #[must_use]
    pub fn is_capture(&self, to: Square) -> bool {
        to.is_on_board() && !self.board.is_empty(to)
    }

    /// Whether the piece on `from` is a pawn of the side to move that
    /// would reach its promotion row on `to`
    #[must_use]
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        if !(from.is_on_board() && to.is_on_board()) {
            return false;
        }
        matches!(
            self.board.piece_at(from),
            Some(Piece { kind: PieceKind::Pawn, color })
                if color == self.side_to_move && to.row() == color.promotion_row()
        )
    }

    /// Apply a move, promoting if a pawn reaches its last row.
    ///
    /// The move is not checked against the legal list; use [`Game::play`]
    /// for untrusted input. Promotion defaults to a queen when no kind, or
    /// a kind a pawn cannot become, is given. A move on a finished game,
    /// from an empty square or touching an off-board square is ignored.
    pub fn apply_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) {
        if self.is_game_over() {
            warn!("ignoring {from}{to}: the game is over");
            return;
        }
        if !(from.is_on_board() && to.is_on_board()) {
            warn!("ignoring {from}{to}: square off the board");
            return;
        }
        let Some(piece) = self.board.piece_at(from) else {
            warn!("ignoring {from}{to}: no piece on {from}");
            return;
        };

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            let kind = promotion
                .filter(|k| k.is_promotion_target())
                .unwrap_or(PieceKind::Queen);
            self.board.clear(from);
            self.board.set(to, Piece::new(kind, piece.color));
        } else {
            self.board.relocate(from, to);
        }

        let mv = Move::new(from, to);
        self.history.push(mv.history_token());
        self.side_to_move = self.side_to_move.opponent();
        self.legal = legal_moves(&self.board, self.side_to_move);
        trace!(
            "applied {mv}, {} to move, {} legal replies",
            self.side_to_move,
            self.legal.len()
        );
    }

    /// Validate `mv` against the legal list, then apply it
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if mv.from.is_on_board() && self.board.is_empty(mv.from) {
            return Err(MoveError::NoPiece { square: mv.from });
        }
        if !self.is_legal(mv) {
            return Err(MoveError::Illegal { mv });
        }
        self.apply_move(mv.from, mv.to, mv.promotion);
        Ok(())
    }

    /// Parse coordinate notation and resolve it against the legal list
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if self.is_legal(mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Count leaf nodes of the legal move tree to `depth` plies
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        if depth == 1 {
            return self.legal.len() as u64;
        }
        self.legal
            .iter()
            .map(|mv| {
                let mut child = self.clone();
                child.apply_move(mv.from, mv.to, None);
                child.perft(depth - 1)
            })
            .sum()
    }
}
