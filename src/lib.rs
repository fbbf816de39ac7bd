//! Rules engine for atomic chess.
//!
//! Captures explode: the capturing piece, the captured piece and every
//! non-pawn piece around the capture square leave the board, and the game
//! ends the moment a king is destroyed.
//!
//! # Example
//! ```
//! use atomic_chess::{Game, GameState};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("e2", "e4"));
//! assert!(!game.make_move("e2", "e4"));
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

pub mod board;
pub mod console;
pub mod game;
pub mod sync;

pub use board::{Board, Color, MoveError, Piece, PieceKind, Square};
pub use game::{Game, GameState, MoveRecord};
pub use sync::SharedGame;
