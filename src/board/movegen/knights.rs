use super::super::tables::KNIGHT_TARGETS;
use super::super::{Board, Piece, SquareSet};

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece) -> SquareSet {
        let from = knight.position();
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .filter(|&to| self.is_open_to(knight, to))
            .collect()
    }
}
