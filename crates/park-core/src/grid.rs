//! Grid coordinates.
//!
//! A `Cell` is a `(col, row)` pair in grid space.  Coordinates are signed so
//! that destinations may sit on (or just beyond) the lot border without
//! special casing.

use std::fmt;

/// Set of occupied cells.  FxHash keeps the hot `contains` check in the
/// candidate scan cheap on small integer keys.
pub type CellSet = rustc_hash::FxHashSet<Cell>;

/// One discrete grid position.
///
/// Ordering is lexicographic on `(col, row)`; the scorer relies on this for
/// its final tie-break.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Euclidean distance in cell units.
    ///
    /// Deltas are squared in `i64` first, so the result is exact up to the
    /// final square root and symmetric in its arguments.
    #[inline]
    pub fn distance_to(self, other: Cell) -> f64 {
        let dc = (self.col as i64 - other.col as i64) as f64;
        let dr = (self.row as i64 - other.row as i64) as f64;
        (dc * dc + dr * dr).sqrt()
    }

    /// The cell as an `[x, y]` point for spatial indexes.
    #[inline]
    pub fn as_point(self) -> [f64; 2] {
        [self.col as f64, self.row as f64]
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((col, row): (i32, i32)) -> Self {
        Cell { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
