//! Error types for board, game and search operations.

use std::fmt;

use super::{Color, Move, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs placement and side to move)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Wrong number of ranks in the placement field
    InvalidRankCount { found: usize },
    /// A rank describes more or fewer than eight files
    BadRankLength { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for rejected moves on a live game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// No piece stands on the origin square
    NoPiece { square: Square },
    /// The move is not in the legal move list
    Illegal { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::Illegal { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for positions that cannot form a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A side has no king on the board
    MissingKing { color: Color },
    /// A side has more than one king on the board
    MultipleKings { color: Color, count: usize },
    /// The side not to move is in check, so its king could be taken
    OpponentInCheck { color: Color },
    /// The FEN text could not be parsed
    Fen(FenError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingKing { color } => write!(f, "{color} has no king"),
            GameError::MultipleKings { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
            GameError::OpponentInCheck { color } => {
                write!(f, "{color} is in check with the other side to move")
            }
            GameError::Fen(err) => write!(f, "Invalid FEN: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Fen(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FenError> for GameError {
    fn from(err: FenError) -> Self {
        GameError::Fen(err)
    }
}

/// Error type for an unfinished search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The stop flag was raised before the search completed
    Cancelled,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Cancelled => write!(f, "Search was cancelled"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Error type for the background engine controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A search is already running for this game
    SearchInProgress,
    /// The game has already ended, there is nothing to search
    GameOver,
    /// A human move was rejected
    Move(MoveError),
    /// The worker thread could not be started
    ThreadSpawn { reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SearchInProgress => write!(f, "A search is already in progress"),
            EngineError::GameOver => write!(f, "The game is over"),
            EngineError::Move(err) => write!(f, "{err}"),
            EngineError::ThreadSpawn { reason } => {
                write!(f, "Failed to spawn search thread: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for EngineError {
    fn from(err: MoveError) -> Self {
        EngineError::Move(err)
    }
}
