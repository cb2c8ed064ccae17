//! A two-player chess engine with an embedded adversarial search.
//!
//! - [`board`]: the 8x8 board, movement rules and attack detection
//! - [`game`]: legal move filtering and the game state machine
//! - [`eval`]: material and piece-square evaluation
//! - [`book`]: the opening book consulted before searching
//! - [`search`]: minimax with alpha-beta pruning
//! - [`engine`]: running the search on a background thread
//!
//! # Example
//! ```
//! use chessgame::{best_move, Game};
//!
//! let mut game = Game::new();
//! let mv = best_move(&game, 2).unwrap();
//! game.play(mv).unwrap();
//! assert_eq!(game.history().len(), 1);
//! ```

pub mod board;
pub mod book;
pub mod engine;
pub mod eval;
pub mod game;
pub mod search;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use book::OpeningBook;
pub use engine::{Difficulty, EngineController, SearchOutcome};
pub use game::{Game, GameStatus};
pub use search::{best_move, Search, SearchParams};
