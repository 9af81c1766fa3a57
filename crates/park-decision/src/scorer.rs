//! `WeightedScorer` — the linear two-criterion spot scorer.

use std::cmp::Ordering;

use park_core::{Cell, CellSet};

use crate::index::{nearest_distance, OccupiedIndex};
use crate::{ScoringWeights, SpotSelector};

/// Occupied-set size from which `choose_best_spot` switches from a linear
/// scan per candidate to an R-tree built once per call.
const INDEX_THRESHOLD: usize = 32;

/// Scores a candidate by closeness to the destination and distance from
/// other parked vehicles.
///
/// Weights are read on every call; replacing them with
/// [`set_weights`](Self::set_weights) affects only later calls.
#[derive(Clone, Debug, Default)]
pub struct WeightedScorer {
    weights: ScoringWeights,
}

/// One evaluated candidate, kept so ties can be broken without rescoring.
#[derive(Copy, Clone)]
struct Scored {
    cell:      Cell,
    score:     f64,
    dest_dist: f64,
}

impl Scored {
    /// Higher score wins; then the candidate nearer the destination; then
    /// the smaller cell.  `Greater` means `self` is preferred.
    fn rank(&self, other: &Scored) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.dest_dist.total_cmp(&self.dest_dist))
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl WeightedScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    #[inline]
    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Replace both weights at once.
    pub fn set_weights(&mut self, weights: ScoringWeights) {
        self.weights = weights;
    }

    /// Score a single candidate.  Higher is better.
    pub fn score(&self, candidate: Cell, destination: Cell, occupied: &CellSet) -> f64 {
        let nearest = if self.weights.spacing() == 0.0 {
            0.0
        } else {
            nearest_distance(candidate, occupied)
        };
        self.combine(candidate.distance_to(destination), nearest)
    }

    fn combine(&self, dest_dist: f64, nearest: f64) -> f64 {
        let w = self.weights;
        let dest_term = if w.destination() == 0.0 { 0.0 } else { -w.destination() * dest_dist };
        let spacing_term = if w.spacing() == 0.0 { 0.0 } else { w.spacing() * nearest };
        dest_term + spacing_term
    }
}

impl SpotSelector for WeightedScorer {
    fn choose_best_spot(
        &self,
        candidates:  &[Cell],
        destination: Cell,
        occupied:    &CellSet,
    ) -> Option<Cell> {
        let uses_spacing = self.weights.spacing() != 0.0;
        let index = (uses_spacing && occupied.len() >= INDEX_THRESHOLD)
            .then(|| OccupiedIndex::build(occupied));

        let mut best: Option<Scored> = None;
        for &cell in candidates {
            let dest_dist = cell.distance_to(destination);
            let nearest = match (&index, uses_spacing) {
                (_, false)       => 0.0,
                (Some(ix), true) => ix.nearest_distance(cell),
                (None, true)     => nearest_distance(cell, occupied),
            };
            let scored = Scored { cell, score: self.combine(dest_dist, nearest), dest_dist };
            if best.is_none_or(|b| scored.rank(&b) == Ordering::Greater) {
                best = Some(scored);
            }
        }
        best.map(|b| b.cell)
    }
}
