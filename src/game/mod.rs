//! Game controller: turn order, move requests and the game result.
//!
//! `Game` owns the board exclusively. A move request runs every gate before
//! the first write, so a rejected request never changes anything.

mod controller;
mod record;

pub use controller::Game;
pub use record::{GameState, MoveRecord};
