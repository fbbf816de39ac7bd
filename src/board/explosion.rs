//! Capture explosions.
//!
//! A capture destroys the capturing piece, the captured piece and every
//! non-pawn piece on the eight squares around the capture square.

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tables::BLAST_RADIUS;
use super::{Board, Color, Piece, PieceKind, Square};

/// Outcome of a single detonation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Explosion {
    center: Square,
    destroyed: Vec<Piece>,
}

impl Explosion {
    /// The capture square
    #[must_use]
    pub fn center(&self) -> Square {
        self.center
    }

    /// Destroyed pieces: the captured piece, the capturer, then the blast
    /// radius in N, NE, E, SE, S, SW, W, NW order.
    #[must_use]
    pub fn destroyed(&self) -> &[Piece] {
        &self.destroyed
    }

    /// Color of the last king in the destruction order, if any king died.
    ///
    /// Its owner loses the game.
    #[must_use]
    pub fn king_casualty(&self) -> Option<Color> {
        self.destroyed
            .iter()
            .rev()
            .find(|p| p.kind() == PieceKind::King)
            .map(Piece::color)
    }
}

impl Board {
    /// Resolve the explosion of a capture that landed on `center`.
    ///
    /// `captured` is the piece taken on `center`, already lifted off the
    /// board. The piece now standing on `center` is removed whatever its
    /// kind; neighbours are removed unless they are pawns.
    pub fn detonate(&mut self, center: Square, captured: Option<Piece>) -> Explosion {
        let mut destroyed = Vec::with_capacity(10);
        destroyed.extend(captured);
        destroyed.extend(self.remove(center));

        for &sq in &BLAST_RADIUS[center.as_index()] {
            let caught = self
                .piece_at(sq)
                .is_some_and(|p| !p.kind().is_blast_immune());
            if caught {
                destroyed.extend(self.remove(sq));
            }
        }

        for piece in &destroyed {
            trace!("explosion on {center} destroyed {piece}");
        }

        Explosion { center, destroyed }
    }
}
