//! The `SpotSelector` trait — the extension point the fleet manager calls.

use park_core::{Cell, CellSet};

/// Pluggable spot choice.
///
/// The fleet manager restricts `candidates` to free, valid cells before
/// calling, so implementations only rank.  Implementations must be pure:
/// the same inputs and configuration always yield the same answer, and
/// nothing is mutated.
pub trait SpotSelector {
    /// Pick the best cell from `candidates` for a vehicle heading to
    /// `destination`, given the cells already `occupied`.
    ///
    /// Returns `None` when `candidates` is empty.
    fn choose_best_spot(
        &self,
        candidates:  &[Cell],
        destination: Cell,
        occupied:    &CellSet,
    ) -> Option<Cell>;
}
