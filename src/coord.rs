//! Board coordinates.

use core::fmt;

/// Offsets of a cell and its eight neighbours, diagonals included.
static HALO: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell on the board, zero-based. Components are signed so that shots and
/// placements aimed off the board stay representable until the grid rejects
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(dr, dc)`. Saturates at the `i32` limits, which
    /// are off the board either way.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// `true` if the cell lies inside an `n`×`n` board.
    pub fn within(self, n: usize) -> bool {
        let n = n as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// The cell itself followed by its eight neighbours. Cells off the board
    /// are included; callers filter them.
    pub fn halo(self) -> impl Iterator<Item = Coordinate> {
        HALO.iter().map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

/// Renders the 1-based form players type in, e.g. `3 5`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
