//! Atomic chess board representation and rules.
//!
//! The board is an 8x8 grid owning its live pieces. Move generation follows
//! ordinary chess movement without check, castling, en passant or
//! promotion; captures detonate and clear the surrounding 3x3 area of
//! everything but pawns.
//!
//! # Example
//! ```
//! use atomic_chess::board::{Board, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! assert_eq!(board.destinations(e2).len(), 2);
//! ```

mod builder;
mod error;
mod explosion;
mod movegen;
pub mod prelude;
mod snapshot;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, RejectReason, SquareError};
pub use explosion::Explosion;
pub use snapshot::Snapshot;
pub use state::Board;
pub use types::{translate, Color, Piece, PieceKind, Square, SquareSet, SquareSetIter};
