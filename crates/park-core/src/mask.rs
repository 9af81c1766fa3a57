//! Static parking-validity mask.
//!
//! A `Mask` classifies every grid cell as a parking spot, road, or neither.
//! It is built once at setup and never mutated.  Storage is row-major:
//!
//! ```text
//! cells[row * width + col]
//! ```
//!
//! Iteration helpers walk the grid **column-major** (column outer, row
//! inner), which is the order candidate spots are presented to the scorer.

use crate::{Cell, CoreError, CoreResult};

// ── CellKind ──────────────────────────────────────────────────────────────────

/// Classification of one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellKind {
    #[default]
    NotSpot,
    Spot,
    /// Render-only terrain.  Treated exactly like `NotSpot` by the core.
    Road,
}

impl CellKind {
    /// ASCII form used by [`Mask::from_ascii`] and [`Mask::to_ascii`].
    pub fn to_char(self) -> char {
        match self {
            CellKind::NotSpot => '.',
            CellKind::Spot    => 'P',
            CellKind::Road    => '#',
        }
    }

    pub fn from_char(c: char) -> Self {
        match c {
            'P' | 'p' => CellKind::Spot,
            '#'       => CellKind::Road,
            _         => CellKind::NotSpot,
        }
    }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// Half-open rectangle `[min_col, max_col) × [min_row, max_row)` in grid
/// space.  Used to restrict the candidate search to part of the lot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub min_col: i32,
    pub min_row: i32,
    pub max_col: i32,
    pub max_row: i32,
}

impl Region {
    /// Build a region from two opposite corners given in any order.  The
    /// resulting rectangle includes the smaller corner and excludes the
    /// larger one.
    pub fn from_corners(a: Cell, b: Cell) -> Self {
        Self {
            min_col: a.col.min(b.col),
            min_row: a.row.min(b.row),
            max_col: a.col.max(b.col),
            max_row: a.row.max(b.row),
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_col..self.max_col).contains(&cell.col)
            && (self.min_row..self.max_row).contains(&cell.row)
    }

    pub fn is_empty(&self) -> bool {
        self.min_col >= self.max_col || self.min_row >= self.max_row
    }
}

// ── Mask ──────────────────────────────────────────────────────────────────────

/// Immutable `width × height` grid of [`CellKind`]s.
///
/// Serializable with the `serde` feature but deliberately not
/// deserializable: load masks through [`Mask::new`] or
/// [`Mask::from_ascii`] so the shape is always checked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mask {
    width:  usize,
    height: usize,
    cells:  Vec<CellKind>,
}

impl Mask {
    /// Wrap a row-major cell vector.
    ///
    /// Fails if either dimension is zero or `cells.len() != width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<CellKind>) -> CoreResult<Self> {
        let expected = Self::cell_count(width, height)?;
        if cells.len() != expected {
            return Err(CoreError::MaskShape { width, height, cells: cells.len() });
        }
        Ok(Self { width, height, cells })
    }

    /// `width * height`, once both dimensions are known to be non-zero and
    /// addressable by `i32` grid coordinates.
    fn cell_count(width: usize, height: usize) -> CoreResult<usize> {
        if width == 0 || height == 0 {
            return Err(CoreError::EmptyMask { width, height });
        }
        let too_big = || CoreError::Config(format!("mask {width}x{height} exceeds the addressable grid"));
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_big());
        }
        width.checked_mul(height).ok_or_else(too_big)
    }

    /// A mask with every cell set to `kind`.
    pub fn filled(width: usize, height: usize, kind: CellKind) -> CoreResult<Self> {
        let count = Self::cell_count(width, height)?;
        Self::new(width, height, vec![kind; count])
    }

    /// Build a mask by evaluating `f` at every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> CoreResult<Self>
    where
        F: FnMut(Cell) -> CellKind,
    {
        let mut cells = Vec::with_capacity(Self::cell_count(width, height)?);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(Cell::new(col as i32, row as i32)));
            }
        }
        Self::new(width, height, cells)
    }

    /// Parse an ASCII drawing, one line per row.
    ///
    /// `P` marks a spot, `#` a road, anything else is not a spot.  Blank
    /// lines are skipped and trailing whitespace is ignored; every remaining
    /// row must have the same length.
    pub fn from_ascii(text: &str) -> CoreResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();

        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(CoreError::RaggedRow { row, got, expected: width });
            }
            cells.extend(line.chars().map(CellKind::from_char));
        }
        Self::new(width, rows.len(), cells)
    }

    /// Render back to the ASCII form accepted by [`from_ascii`](Self::from_ascii).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter().map(|k| k.to_char()));
            out.push('\n');
        }
        out
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as usize) < self.width
            && (cell.row as usize) < self.height
    }

    /// Classification of `cell`, or `None` if it lies outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellKind> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.cells[cell.row as usize * self.width + cell.col as usize])
    }

    #[inline]
    pub fn is_spot(&self, cell: Cell) -> bool {
        self.get(cell) == Some(CellKind::Spot)
    }

    /// Number of cells marked [`CellKind::Spot`].
    pub fn spot_count(&self) -> usize {
        self.cells.iter().filter(|&&k| k == CellKind::Spot).count()
    }

    /// Every cell with its kind, column-major.
    pub fn iter_column_major(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        (0..self.width).flat_map(move |col| {
            (0..self.height).map(move |row| {
                (
                    Cell::new(col as i32, row as i32),
                    self.cells[row * self.width + col],
                )
            })
        })
    }
}
