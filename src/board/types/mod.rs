//! Core board types.
//!
//! - `Color`, `PieceKind` and `Piece` - piece identity and per-piece state
//! - `Square` - (rank, file) coordinate with algebraic notation
//! - `SquareSet` - compact destination set

mod piece;
mod square;
mod square_set;

pub use piece::{Color, Piece, PieceKind};
pub use square::{translate, Square};
pub use square_set::{SquareSet, SquareSetIter};
