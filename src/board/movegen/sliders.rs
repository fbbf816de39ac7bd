use super::super::tables::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS};
use super::super::{Board, Piece, SquareSet};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn rays(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_RAYS,
            SliderType::Rook => &ROOK_RAYS,
            SliderType::Queen => &QUEEN_RAYS,
        }
    }
}

impl Board {
    /// Walk each ray until the edge or the first occupied square.
    ///
    /// The blocker is a destination only when it is an enemy.
    pub(crate) fn generate_slider_moves(&self, slider: &Piece, kind: SliderType) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let from = slider.position();

        for &(dr, df) in kind.rays() {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.insert(to),
                    Some(blocker) => {
                        if !slider.is_friend_of(blocker) {
                            moves.insert(to);
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
