use super::super::{Board, Piece, SquareSet};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let dir = pawn.color().pawn_direction();
        let from = pawn.position();

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                moves.insert(single);
                if !pawn.has_moved() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.insert(double);
                        }
                    }
                }
            }
        }

        // Diagonals only when an enemy stands there
        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if self.piece_at(target).is_some_and(|other| !pawn.is_friend_of(other)) {
                    moves.insert(target);
                }
            }
        }

        moves
    }
}
