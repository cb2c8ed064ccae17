//! Move type and history encoding.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another, with an optional promotion choice.
///
/// Identity is the `(from, to)` pair: two moves that differ only in the
/// promotion kind compare equal and hash alike, so a player-selected move
/// matches its counterpart in the legal move list whatever piece was chosen.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Token recorded in game history and used for opening book keys (`e2e4`).
    ///
    /// Promotion choice is not part of the token.
    #[must_use]
    pub fn history_token(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

/// Join history tokens into the canonical lookup key shared by the game
/// history and the opening book.
#[must_use]
pub fn history_key<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation (`e2e4`, `e7e8q`). Legality is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}
