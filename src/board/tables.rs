//! Precomputed per-square tables for leaper moves and blast zones.

use once_cell::sync::Lazy;

use super::{Square, SquareSet};

/// Knight jumps as (rank, file) deltas.
pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Unit steps in explosion order: N, NE, E, SE, S, SW, W, NW.
///
/// North is toward rank index 0 (algebraic rank 8).
pub(crate) const NEIGHBOUR_DELTAS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

pub(crate) const ROOK_RAYS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
pub(crate) const BISHOP_RAYS: [(isize, isize); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];
pub(crate) const QUEEN_RAYS: [(isize, isize); 8] = NEIGHBOUR_DELTAS;

fn leaper_table(deltas: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for (from, slot) in Square::all().zip(table.iter_mut()) {
        *slot = deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| leaper_table(&NEIGHBOUR_DELTAS));

/// In-bounds neighbours of each square, kept in `NEIGHBOUR_DELTAS` order.
pub(crate) static BLAST_RADIUS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    Square::all()
        .map(|center| {
            NEIGHBOUR_DELTAS
                .iter()
                .filter_map(|&(dr, df)| center.offset(dr, df))
                .collect()
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_targets_corner_and_centre() {
        assert_eq!(KNIGHT_TARGETS[sq("a1").as_index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[sq("d4").as_index()].len(), 8);
        assert!(KNIGHT_TARGETS[sq("g1").as_index()].contains(sq("f3")));
    }

    #[test]
    fn test_king_targets_edge() {
        assert_eq!(KING_TARGETS[sq("h8").as_index()].len(), 3);
        assert_eq!(KING_TARGETS[sq("e1").as_index()].len(), 5);
        assert_eq!(KING_TARGETS[sq("e4").as_index()].len(), 8);
    }

    #[test]
    fn test_blast_radius_order() {
        let ring: Vec<String> = BLAST_RADIUS[sq("e4").as_index()]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(ring, ["e5", "f5", "f4", "f3", "e3", "d3", "d4", "d5"]);

        let corner: Vec<String> = BLAST_RADIUS[sq("a1").as_index()]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(corner, ["a2", "b2", "b1"]);
    }
}
