//! Error types for square parsing and move requests.

use std::fmt;

use super::{Color, Square};
use crate::game::GameState;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a well-formed move request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No piece stands on the source square
    EmptySource { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongTurn { square: Square, expected: Color },
    /// The destination is not among the piece's generated moves
    Unreachable { from: Square, to: Square },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptySource { square } => write!(f, "no piece on {square}"),
            RejectReason::WrongTurn { square, expected } => {
                write!(f, "piece on {square} does not belong to {expected}")
            }
            RejectReason::Unreachable { from, to } => {
                write!(f, "piece on {from} cannot reach {to}")
            }
        }
    }
}

/// Error type for rejected move requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A square was not valid algebraic notation
    InvalidSquareFormat(SquareError),
    /// The move breaks the movement or turn rules
    IllegalMove(RejectReason),
    /// A king has already been destroyed
    GameAlreadyOver(GameState),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquareFormat(e) => write!(f, "{e}"),
            MoveError::IllegalMove(reason) => write!(f, "Illegal move: {reason}"),
            MoveError::GameAlreadyOver(state) => write!(f, "Game is over ({state})"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquareFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        MoveError::InvalidSquareFormat(e)
    }
}

impl From<RejectReason> for MoveError {
    fn from(reason: RejectReason) -> Self {
        MoveError::IllegalMove(reason)
    }
}
