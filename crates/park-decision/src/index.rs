//! R-tree over occupied cells for nearest-neighbour spacing queries.
//!
//! Built once per `choose_best_spot` call when the lot is busy enough that
//! a linear scan per candidate would dominate.  Answers are identical to
//! [`nearest_distance`]: the tree only finds *which* occupied cell is
//! nearest, and the distance is then computed with [`Cell::distance_to`].

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use park_core::{Cell, CellSet};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct OccupiedEntry {
    point: [f64; 2], // [col, row]
    cell:  Cell,
}

impl RTreeObject for OccupiedEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for OccupiedEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dc = self.point[0] - point[0];
        let dr = self.point[1] - point[1];
        dc * dc + dr * dr
    }
}

// ── OccupiedIndex ─────────────────────────────────────────────────────────────

/// Static spatial index of a snapshot of the occupied set.
pub struct OccupiedIndex {
    tree: RTree<OccupiedEntry>,
}

impl OccupiedIndex {
    pub fn build(occupied: &CellSet) -> Self {
        let entries = occupied
            .iter()
            .map(|&cell| OccupiedEntry { point: cell.as_point(), cell })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Distance from `cell` to the nearest indexed cell; `+inf` if empty.
    pub fn nearest_distance(&self, cell: Cell) -> f64 {
        self.tree
            .nearest_neighbor(&cell.as_point())
            .map_or(f64::INFINITY, |e| cell.distance_to(e.cell))
    }
}

/// Linear-scan minimum distance from `cell` to any of `occupied`;
/// `+inf` if `occupied` is empty.
pub fn nearest_distance<'a, I>(cell: Cell, occupied: I) -> f64
where
    I: IntoIterator<Item = &'a Cell>,
{
    occupied
        .into_iter()
        .map(|&o| cell.distance_to(o))
        .fold(f64::INFINITY, f64::min)
}
