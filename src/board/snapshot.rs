//! Read-only board snapshots for renderers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, PieceKind, Square};

/// Immutable 8x8 picture of the board: `{color, kind}` or empty per cell.
///
/// Row 0 is algebraic rank 8, column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    cells: [[Option<(Color, PieceKind)>; 8]; 8],
    #[cfg_attr(feature = "serde", serde(skip))]
    labels: bool,
}

impl Snapshot {
    /// Cell contents at `square`
    #[inline]
    #[must_use]
    pub fn at(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.cells[square.rank()][square.file()]
    }

    /// Toggle the rank/file labels used by `Display`.
    #[must_use]
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }
}

impl Board {
    /// Take a snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut cells = [[None; 8]; 8];
        for piece in self.pieces() {
            let sq = piece.position();
            cells[sq.rank()][sq.file()] = Some((piece.color(), piece.kind()));
        }
        Snapshot {
            cells,
            labels: true,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.cells.iter().enumerate() {
            if self.labels {
                write!(f, "{} ", 8 - rank)?;
            }
            for (file, cell) in row.iter().enumerate() {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let ch = match cell {
                    Some((color, kind)) => kind.to_colored_char(*color),
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        if self.labels {
            writeln!(f, "  a b c d e f g h")?;
        }
        Ok(())
    }
}
