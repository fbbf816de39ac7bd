//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use atomic_chess::board::prelude::*;
//!
//! let mut game = Game::new();
//! assert!(game.make_move("e2", "e4"));
//! assert_eq!(game.turn(), Color::Black);
//! ```

pub use super::{
    translate, Board, BoardBuilder, Color, Explosion, MoveError, Piece, PieceKind, RejectReason,
    Snapshot, Square, SquareError, SquareSet,
};
pub use crate::game::{Game, GameState, MoveRecord};
