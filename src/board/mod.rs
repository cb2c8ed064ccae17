//! Board representation and movement rules.
//!
//! A mailbox 8x8 grid of optional pieces, the per-kind pseudo-legal
//! movement rules and attack detection. Everything here is rule-agnostic
//! about whose turn it is; the `game` module layers legality on top.
//!
//! # Example
//! ```
//! use chessgame::board::{Board, Square};
//!
//! let board = Board::new();
//! // the e2 pawn can push one or two squares
//! assert_eq!(board.pseudo_legal_destinations(Square(6, 4)).len(), 2);
//! ```

mod attacks;
mod builder;
pub mod error;
mod fen;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{
    EngineError, FenError, GameError, MoveError, MoveParseError, SearchError, SquareError,
};
pub use movegen::pseudo_legal_moves;
pub use state::Board;
pub use types::{history_key, Color, Move, Piece, PieceKind, Square, PROMOTION_KINDS};

pub(crate) use fen::parse_fen;
