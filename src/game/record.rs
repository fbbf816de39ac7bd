//! Game result and per-move records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Explosion, PieceKind, Square};

/// Overall game status.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    #[default]
    InProgress,
    WhiteWon,
    BlackWon,
}

impl GameState {
    /// The state in which `color` has won
    #[must_use]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::InProgress => write!(f, "In progress"),
            GameState::WhiteWon => write!(f, "White won"),
            GameState::BlackWon => write!(f, "Black won"),
        }
    }
}

/// A move that was played.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub color: Color,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    /// Present when the move was a capture
    pub explosion: Option<Explosion>,
}

impl MoveRecord {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.explosion.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.kind.to_colored_char(self.color),
            self.from,
            sep,
            self.to
        )
    }
}
