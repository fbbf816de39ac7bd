//! Fluent builder for constructing board layouts.
//!
//! Allows creating positions piece by piece, for puzzles and tests.
//!
//! # Example
//! ```
//! use atomic_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fluent builder for constructing `Board` layouts.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder holding the standard initial layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        // Rank index 0 is Black's back rank, 7 is White's
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            builder.pieces.push(Piece::new(Color::Black, kind, Square(0, file)));
            builder.pieces.push(Piece::new(Color::White, kind, Square(7, file)));
        }
        for file in 0..8 {
            builder
                .pieces
                .push(Piece::new(Color::Black, PieceKind::Pawn, Square(1, file)));
            builder
                .pieces
                .push(Piece::new(Color::White, PieceKind::Pawn, Square(6, file)));
        }

        builder
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|p| p.position() != square);
        self.pieces.push(Piece::new(color, kind, square));
        self
    }

    /// Mark the piece on `square` as having moved already.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        if let Some(p) = self.pieces.iter_mut().find(|p| p.position() == square) {
            p.mark_moved();
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.position() != square);
        self
    }

    /// Build the board, feeding every piece through `Board::place`.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for piece in self.pieces {
            board.place(piece);
        }
        board
    }
}
