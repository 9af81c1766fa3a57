//! The fleet manager: owns the vehicles and the occupied set.

use log::{debug, trace};

use park_core::{Cell, CellSet, DestinationId, Mask, RandomSource, Region, VehicleId};
use park_decision::{ScoringWeights, SpotSelector, WeightedScorer};

use crate::{
    CandidateSearch, DeparturePolicy, DestinationTable, FleetError, FleetResult, SpawnPolicy,
    Vehicle,
};

// ── Reports ───────────────────────────────────────────────────────────────────

/// Outcome of one spawn phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Arrivals drawn this tick (0 when the spawn draw failed).
    pub requested: u32,
    /// Vehicles actually placed, in placement order.
    pub placed:    Vec<VehicleId>,
}

impl SpawnReport {
    /// Arrivals turned away because the lot was full.
    pub fn skipped(&self) -> u32 {
        self.requested.saturating_sub(self.placed.len() as u32)
    }
}

/// Point-in-time occupancy figures.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FleetStats {
    pub parked:          usize,
    /// Cells that could ever hold a vehicle.
    pub capacity:        usize,
    pub occupancy_ratio: f64,
    pub mean_time_spent: f64,
}

// ── FleetManager ──────────────────────────────────────────────────────────────

/// Owns the live vehicle list and the occupied-cell set and keeps them in
/// lock-step.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].  The mask, region,
/// search mode and destination table are fixed after construction.
pub struct FleetManager<S: SpotSelector = WeightedScorer> {
    pub(crate) mask:         Mask,
    pub(crate) region:       Option<Region>,
    pub(crate) search:       CandidateSearch,
    pub(crate) destinations: DestinationTable,
    pub(crate) selector:     S,
    pub(crate) spawn:        SpawnPolicy,
    pub(crate) departure:    DeparturePolicy,

    /// Live vehicles in arrival order.
    pub(crate) vehicles: Vec<Vehicle>,
    /// Positions of `vehicles`; same length, no duplicates.
    pub(crate) occupied: CellSet,
    pub(crate) next_id:  u32,
}

impl<S: SpotSelector> FleetManager<S> {
    // ── Queries ───────────────────────────────────────────────────────────

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn occupied(&self) -> &CellSet {
        &self.occupied
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn search(&self) -> CandidateSearch {
        self.search
    }

    pub fn destinations(&self) -> &DestinationTable {
        &self.destinations
    }

    pub fn spawn_policy(&self) -> &SpawnPolicy {
        &self.spawn
    }

    pub fn departure_policy(&self) -> &DeparturePolicy {
        &self.departure
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.selector
    }

    /// `true` if `cell` may ever hold a vehicle under this fleet's search
    /// mode and region.
    pub fn is_candidate(&self, cell: Cell) -> bool {
        if self.region.is_some_and(|r| !r.contains(cell)) {
            return false;
        }
        match self.search {
            CandidateSearch::Mask => self.mask.is_spot(cell),
            CandidateSearch::Open => self.mask.contains(cell),
        }
    }

    /// Number of cells that may ever hold a vehicle.
    pub fn capacity(&self) -> usize {
        self.mask
            .iter_column_major()
            .filter(|&(cell, _)| self.is_candidate(cell))
            .count()
    }

    /// Every free candidate cell, scanning the whole mask column by column.
    pub fn get_available_spots(&self) -> Vec<Cell> {
        self.mask
            .iter_column_major()
            .map(|(cell, _)| cell)
            .filter(|&cell| self.is_candidate(cell) && !self.occupied.contains(&cell))
            .collect()
    }

    pub fn stats(&self) -> FleetStats {
        let parked = self.vehicles.len();
        let capacity = self.capacity();
        let occupancy_ratio = if capacity == 0 { 0.0 } else { parked as f64 / capacity as f64 };
        let mean_time_spent = if parked == 0 {
            0.0
        } else {
            self.vehicles.iter().map(|v| v.time_spent() as f64).sum::<f64>() / parked as f64
        };
        FleetStats { parked, capacity, occupancy_ratio, mean_time_spent }
    }

    /// Verify that the occupied set mirrors the vehicle list exactly and
    /// that every vehicle sits on a candidate cell.
    pub fn check_invariants(&self) -> FleetResult<()> {
        if self.occupied.len() != self.vehicles.len() {
            return Err(FleetError::Invariant(format!(
                "{} occupied cells for {} vehicles",
                self.occupied.len(),
                self.vehicles.len()
            )));
        }
        let mut seen = CellSet::default();
        for v in &self.vehicles {
            let cell = v.position();
            if !seen.insert(cell) {
                return Err(FleetError::Invariant(format!("two vehicles share {cell}")));
            }
            if !self.occupied.contains(&cell) {
                return Err(FleetError::Invariant(format!("{} at {cell} not marked occupied", v.id())));
            }
            if !self.is_candidate(cell) {
                return Err(FleetError::Invariant(format!("{} parked on non-candidate {cell}", v.id())));
            }
        }
        Ok(())
    }

    // ── Configuration updates ─────────────────────────────────────────────

    /// Replace the spawn policy.  Takes effect from the next spawn phase.
    pub fn set_spawn_policy(&mut self, spawn: SpawnPolicy) -> FleetResult<()> {
        spawn.validate()?;
        self.spawn = spawn;
        Ok(())
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Spawn phase.
    ///
    /// With probability `spawn_probability`, draw `n` uniformly from
    /// `[1, max_new_cars]` and try to park `n` vehicles one after another.
    /// Each unit sees the cells claimed by the units before it.  A unit that
    /// finds no spot is skipped; that is a full lot, not an error.
    pub fn spawn_new_cars<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> SpawnReport {
        if !rng.bernoulli(self.spawn.spawn_probability) {
            return SpawnReport::default();
        }
        let requested = rng.range_inclusive(1, self.spawn.max_new_cars);
        debug!("spawning {requested} vehicles");

        let mut placed = Vec::new();
        for _ in 0..requested {
            if let Some(id) = self.spawn_one(rng) {
                placed.push(id);
            }
        }
        SpawnReport { requested, placed }
    }

    fn spawn_one<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<VehicleId> {
        // Table length never exceeds the `DestinationId` range.
        let dest_id = DestinationId(rng.index(self.destinations.len()) as u16);
        let dest = self.destinations.get(dest_id)?.point;

        let available = self.get_available_spots();
        let spot = if available.is_empty() {
            None
        } else {
            self.selector.choose_best_spot(&available, dest, &self.occupied)
        };
        let Some(spot) = spot else {
            debug!(
                "no spot for vehicle heading to {}",
                self.destinations.label(dest_id).unwrap_or("?")
            );
            return None;
        };
        // A selector may only hand back one of the free candidates it was given.
        if !self.is_candidate(spot) || self.occupied.contains(&spot) {
            debug!("selector returned unavailable cell {spot}; arrival skipped");
            return None;
        }

        let (lo, hi) = self.spawn.dwell_window();
        let time_spent = rng.range_inclusive(lo, hi);
        let id = VehicleId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        debug!(
            "placing {id} at {spot} heading to {}",
            self.destinations.label(dest_id).unwrap_or("?")
        );
        self.vehicles.push(Vehicle::new(id, spot, dest_id, time_spent));
        self.occupied.insert(spot);
        Some(id)
    }

    /// Update phase.
    ///
    /// In arrival order: advance each vehicle's dwell counter, then run its
    /// departure check.  Survivors form the new vehicle list and a freshly
    /// rebuilt occupied set.  Departed vehicles are returned.
    pub fn update_cars<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Vec<Vehicle> {
        let previous = std::mem::take(&mut self.vehicles);
        let mut kept = Vec::with_capacity(previous.len());
        let mut occupied = CellSet::with_capacity_and_hasher(previous.len(), Default::default());
        let mut departed = Vec::new();

        for mut vehicle in previous {
            vehicle.update_time_spent();
            if vehicle.should_leave(&self.departure, rng) {
                debug!("{} left {}", vehicle.id(), vehicle.position());
                departed.push(vehicle);
                continue;
            }
            occupied.insert(vehicle.position());
            kept.push(vehicle);
        }

        self.vehicles = kept;
        self.occupied = occupied;
        trace!("{} vehicles parked, {} departed", self.vehicles.len(), departed.len());
        departed
    }
}

impl FleetManager<WeightedScorer> {
    pub fn weights(&self) -> ScoringWeights {
        self.selector.weights()
    }

    /// Replace both scoring weights at once.  Only later spawns see them.
    pub fn set_weights(&mut self, weights: ScoringWeights) {
        self.selector.set_weights(weights);
    }
}
