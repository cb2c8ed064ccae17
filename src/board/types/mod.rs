//! Core chess types.
//!
//! This module contains the value types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - a (row, column) coordinate
//! - `Move` - a from/to pair with an optional promotion choice

mod moves;
mod piece;
mod square;

pub use moves::{history_key, Move};
pub use piece::{Color, Piece, PieceKind, PROMOTION_KINDS};
pub use square::Square;
