//! Fluent builder for constructing a [`FleetManager`].

use log::info;

use park_core::{CellSet, Mask, Region};
use park_decision::{ScoringWeights, SpotSelector, WeightedScorer};

use crate::{
    CandidateSearch, DeparturePolicy, DestinationTable, FleetConfig, FleetError, FleetManager,
    FleetResult, SpawnPolicy,
};

/// Fluent builder for [`FleetManager<S>`].
///
/// # Required inputs
///
/// - [`Mask`] — the static parking-validity grid
/// - [`DestinationTable`] — at least one destination
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                               |
/// |------------------------|---------------------------------------|
/// | `.weights(w)`          | `ScoringWeights::default()`           |
/// | `.selector(s)`         | `WeightedScorer` with the weights     |
/// | `.spawn_policy(p)`     | `SpawnPolicy::default()`              |
/// | `.departure_policy(p)` | `DeparturePolicy::default()`          |
/// | `.search(m)`           | `CandidateSearch::Mask`               |
/// | `.region(r)`           | whole grid                            |
/// | `.allow_empty_lot()`   | off: zero candidate cells is an error |
///
/// # Example
///
/// ```rust,ignore
/// let mask = Mask::filled(5, 5, CellKind::Spot)?;
/// let table = DestinationTable::from_pairs([("gate", Cell::new(0, 0))])?;
/// let mut fleet = FleetBuilder::new(mask, table)
///     .weights(ScoringWeights::new(1.0, 0.0)?)
///     .build()?;
/// fleet.spawn_new_cars(&mut rng);
/// fleet.update_cars(&mut rng);
/// ```
pub struct FleetBuilder<S: SpotSelector = WeightedScorer> {
    mask:            Mask,
    destinations:    DestinationTable,
    selector:        S,
    spawn:           SpawnPolicy,
    departure:       DeparturePolicy,
    search:          CandidateSearch,
    region:          Option<Region>,
    allow_empty_lot: bool,
}

impl FleetBuilder<WeightedScorer> {
    /// Create a builder with all required inputs and the default scorer.
    pub fn new(mask: Mask, destinations: DestinationTable) -> Self {
        Self {
            mask,
            destinations,
            selector:        WeightedScorer::default(),
            spawn:           SpawnPolicy::default(),
            departure:       DeparturePolicy::default(),
            search:          CandidateSearch::default(),
            region:          None,
            allow_empty_lot: false,
        }
    }

    /// Initial scoring weights.
    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.selector.set_weights(weights);
        self
    }

    /// Apply every field of a loaded [`FleetConfig`].
    pub fn config(self, config: FleetConfig) -> Self {
        let mut b = self
            .weights(config.weights)
            .spawn_policy(config.spawn)
            .departure_policy(config.departure)
            .search(config.search);
        b.region = config.region;
        b
    }
}

impl<S: SpotSelector> FleetBuilder<S> {
    /// Replace the spot selector with a custom implementation.
    pub fn selector<T: SpotSelector>(self, selector: T) -> FleetBuilder<T> {
        FleetBuilder {
            mask:            self.mask,
            destinations:    self.destinations,
            selector,
            spawn:           self.spawn,
            departure:       self.departure,
            search:          self.search,
            region:          self.region,
            allow_empty_lot: self.allow_empty_lot,
        }
    }

    pub fn spawn_policy(mut self, spawn: SpawnPolicy) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn departure_policy(mut self, departure: DeparturePolicy) -> Self {
        self.departure = departure;
        self
    }

    pub fn search(mut self, search: CandidateSearch) -> Self {
        self.search = search;
        self
    }

    /// Restrict candidates to `region`.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Accept a lot with no candidate cells.  Such a fleet never parks a
    /// vehicle; useful for tests and for masks that are filled in later runs.
    pub fn allow_empty_lot(mut self) -> Self {
        self.allow_empty_lot = true;
        self
    }

    /// Validate inputs and return a ready-to-run [`FleetManager`].
    pub fn build(self) -> FleetResult<FleetManager<S>> {
        if self.destinations.is_empty() {
            return Err(FleetError::NoDestinations);
        }
        self.spawn.validate()?;
        self.departure.validate()?;
        if let Some(r) = self.region {
            if r.is_empty() {
                return Err(FleetError::Config(format!("candidate region {r:?} is empty")));
            }
        }

        let fleet = FleetManager {
            mask:         self.mask,
            region:       self.region,
            search:       self.search,
            destinations: self.destinations,
            selector:     self.selector,
            spawn:        self.spawn,
            departure:    self.departure,
            vehicles:     Vec::new(),
            occupied:     CellSet::default(),
            next_id:      0,
        };

        let capacity = fleet.capacity();
        if capacity == 0 && !self.allow_empty_lot {
            return Err(FleetError::NoParkingSpots { search: fleet.search });
        }

        info!(
            "fleet ready: {}x{} grid, {capacity} candidate cells, {} destinations",
            fleet.mask.width(),
            fleet.mask.height(),
            fleet.destinations.len()
        );
        Ok(fleet)
    }
}
