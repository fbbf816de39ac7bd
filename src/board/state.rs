//! The board grid and its piece bookkeeping.

use super::{Color, Piece, PieceKind, Square};

/// An 8x8 grid of optional pieces.
///
/// The grid is the only owner of live pieces: a cell is occupied exactly when
/// it holds a piece that is alive and whose `position` is that cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard 32-piece starting layout.
    pub fn new() -> Self {
        super::BoardBuilder::starting_position().build()
    }

    /// A board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The piece standing on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.rank()][square.file()].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Color of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    /// Put `piece` on the cell named by its own position, replacing whatever was there.
    ///
    /// Dead pieces are never placed; the call returns the piece back.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        if !piece.is_alive() {
            return Some(piece);
        }
        let sq = piece.position();
        let displaced = self.squares[sq.rank()][sq.file()].replace(piece);
        displaced.map(|mut p| {
            p.mark_captured();
            p
        })
    }

    /// Clear `square`, returning its piece marked as no longer alive.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let mut piece = self.squares[square.rank()][square.file()].take()?;
        piece.mark_captured();
        Some(piece)
    }

    /// Move the piece on `from` to the empty square `to`.
    ///
    /// Updates the piece's position and its moved flag. Returns `false`
    /// without touching the board if `from` is empty or `to` is occupied.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> bool {
        if from == to || self.is_empty(from) || !self.is_empty(to) {
            return false;
        }
        let Some(mut piece) = self.squares[from.rank()][from.file()].take() else {
            return false;
        };
        piece.set_position(to);
        piece.mark_moved();
        self.squares[to.rank()][to.file()] = Some(piece);
        true
    }

    /// Every live piece, scanning from a8 to h1.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    /// Live pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Square of `color`'s king, if it is still on the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(Piece::position)
    }

    /// Number of live pieces.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Check that every occupied cell holds a live piece that knows where it stands.
    pub fn is_consistent(&self) -> bool {
        Square::all().all(|sq| match self.piece_at(sq) {
            Some(piece) => piece.is_alive() && piece.position() == sq,
            None => true,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
