//! Per-piece move generation.
//!
//! Generation is pseudo-legal in the ordinary sense but complete for atomic
//! chess: there is no check, so every generated destination is playable.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Piece, PieceKind, Square, SquareSet};

impl Piece {
    /// Squares this piece may move to on `board`.
    ///
    /// Never fails: squares off the board are simply not produced.
    #[must_use]
    pub fn generate_moves(&self, board: &Board) -> SquareSet {
        match self.kind() {
            PieceKind::Pawn => board.generate_pawn_moves(self),
            PieceKind::Knight => board.generate_knight_moves(self),
            PieceKind::Bishop => board.generate_slider_moves(self, SliderType::Bishop),
            PieceKind::Rook => board.generate_slider_moves(self, SliderType::Rook),
            PieceKind::Queen => board.generate_slider_moves(self, SliderType::Queen),
            PieceKind::King => board.generate_king_moves(self),
        }
    }
}

impl Board {
    /// Destinations of the piece on `from`; empty when the square is empty.
    #[must_use]
    pub fn destinations(&self, from: Square) -> SquareSet {
        self.piece_at(from)
            .map_or(SquareSet::EMPTY, |piece| piece.generate_moves(self))
    }

    /// Every (from, to) pair available to `color`, sources in a8..h1 order.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        for piece in self.pieces_of(color) {
            let from = piece.position();
            moves.extend(piece.generate_moves(self).iter().map(|to| (from, to)));
        }
        moves
    }

    /// Empty, or held by an enemy of `piece`.
    #[inline]
    pub(crate) fn is_open_to(&self, piece: &Piece, to: Square) -> bool {
        self.piece_at(to).map_or(true, |other| !piece.is_friend_of(other))
    }

    /// Whether `to` is a capture for the piece on `from`.
    #[must_use]
    pub fn is_capture(&self, from: Square, to: Square) -> bool {
        match (self.color_at(from), self.color_at(to)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Number of moves available to `color`, counted per piece.
    #[must_use]
    pub fn mobility(&self, color: Color) -> usize {
        self.pieces_of(color)
            .map(|piece| piece.generate_moves(self).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn names(set: SquareSet) -> Vec<String> {
        set.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starting_mobility() {
        let board = Board::new();
        // 16 pawn moves + 4 knight moves, everything else is boxed in
        assert_eq!(board.generate_moves(Color::White).len(), 20);
        assert_eq!(board.generate_moves(Color::Black).len(), 20);
        assert_eq!(board.mobility(Color::White), 20);
    }

    #[test]
    fn test_destinations_of_empty_square() {
        let board = Board::new();
        assert!(board.destinations(sq("e4")).is_empty());
    }

    #[test]
    fn test_opening_pawn_and_knight() {
        let board = Board::new();
        assert_eq!(names(board.destinations(sq("e2"))), ["e4", "e3"]);
        assert_eq!(names(board.destinations(sq("e7"))), ["e6", "e5"]);
        assert_eq!(names(board.destinations(sq("g1"))), ["f3", "h3"]);
    }

    #[test]
    fn test_is_capture() {
        let board = BoardBuilder::new()
            .piece(sq("d4"), Color::White, PieceKind::Rook)
            .piece(sq("d7"), Color::Black, PieceKind::Pawn)
            .piece(sq("d2"), Color::White, PieceKind::Pawn)
            .build();
        assert!(board.is_capture(sq("d4"), sq("d7")));
        assert!(!board.is_capture(sq("d4"), sq("d2")));
        assert!(!board.is_capture(sq("d4"), sq("d5")));
    }
}
