use super::super::tables::KING_TARGETS;
use super::super::{Board, Piece, SquareSet};

impl Board {
    /// One step in any direction onto an empty or enemy square.
    ///
    /// There is no check in this variant, so nothing else restricts the king.
    pub(crate) fn generate_king_moves(&self, king: &Piece) -> SquareSet {
        let from = king.position();
        KING_TARGETS[from.as_index()]
            .iter()
            .filter(|&to| self.is_open_to(king, to))
            .collect()
    }
}
