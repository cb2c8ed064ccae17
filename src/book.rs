//! Opening book.
//!
//! Built once from canned lines of coordinate moves. Every proper prefix of
//! a line, the empty one included, maps to the move that follows it. Keys
//! use the same [`history_key`] encoding as [`Game::history_key`], so a
//! lookup is an exact match on the game's full history.

use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;

use crate::board::{history_key, Move};
use crate::game::Game;

/// Lines of the standard book. No line castles, since castling is not
/// part of this rule set.
pub const STANDARD_LINES: &[&str] = &[
    // Ruy Lopez
    "e2e4 e7e5 g1f3 b8c6 f1b5 a7a6 b5a4 g8f6",
    // Italian
    "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6",
    // Sicilian Najdorf
    "e2e4 c7c5 g1f3 d7d6 d2d4 c5d4 f3d4 g8f6 b1c3 a7a6",
    // French
    "e2e4 e7e6 d2d4 d7d5 b1c3 g8f6",
    // Caro-Kann
    "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4",
    // Queen's Gambit Declined
    "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 c1g5",
    // King's Indian
    "d2d4 g8f6 c2c4 g7g6 b1c3 f8g7 e2e4 d7d6",
    // English
    "c2c4 e7e5 b1c3 g8f6 g2g3",
];

static STANDARD: Lazy<OpeningBook> = Lazy::new(|| OpeningBook::from_lines(STANDARD_LINES));

/// Immutable map from history key to the suggested reply
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpeningBook {
    entries: HashMap<String, Move>,
}

impl OpeningBook {
    /// The process-wide standard book
    #[must_use]
    pub fn standard() -> &'static OpeningBook {
        &STANDARD
    }

    /// Build a book from space-separated lines of `e2e4`-style moves.
    ///
    /// When two lines share a prefix, the earlier line's continuation wins.
    /// A malformed token ends its line.
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut entries = HashMap::new();
        for line in lines {
            let mut prefix: Vec<String> = Vec::new();
            for token in line.as_ref().split_whitespace() {
                let mv: Move = match token.parse() {
                    Ok(mv) => mv,
                    Err(err) => {
                        warn!("opening book line truncated at '{token}': {err}");
                        break;
                    }
                };
                entries.entry(history_key(&prefix)).or_insert(mv);
                prefix.push(mv.history_token());
            }
        }
        OpeningBook { entries }
    }

    /// Suggested reply for an exact history key
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Move> {
        self.entries.get(key).copied()
    }

    /// Suggested reply for the game's current history.
    ///
    /// Keys are histories from the standard start, so a game set up from
    /// any other position never has a book move.
    #[must_use]
    pub fn lookup_game(&self, game: &Game) -> Option<Move> {
        if !game.from_start() {
            return None;
        }
        self.lookup(&game.history_key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
