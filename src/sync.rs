//! Synchronization helpers for hosting games behind shared references.
//!
//! The engine itself is single-threaded. A host serving several clients
//! wraps each game in a `SharedGame` so move requests are serialized.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Color, MoveError, Snapshot};
use crate::game::{Game, GameState, MoveRecord};

/// A game guarded by its own mutex. Clones refer to the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    /// Share a fresh standard game.
    #[must_use]
    pub fn new() -> Self {
        SharedGame::from(Game::new())
    }

    /// Play a move under the lock.
    pub fn make_move(&self, from: &str, to: &str) -> bool {
        self.0.lock().make_move(from, to)
    }

    /// Play a move under the lock, returning a copy of its record.
    pub fn try_move(&self, from: &str, to: &str) -> Result<MoveRecord, MoveError> {
        self.0.lock().try_move(from, to).cloned()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.0.lock().state()
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.0.lock().turn()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.0.lock().snapshot()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }
}
