//! A parked vehicle and the rule that decides when it leaves.
//!
//! A vehicle is ACTIVE from the moment the fleet manager creates it.  It
//! never moves.  When its departure check fires, the manager moves it out
//! of the fleet and hands it back to the caller; that is the terminal
//! DEPARTED state and nothing inside the fleet refers to it afterwards.

use park_core::{Cell, DestinationId, RandomSource, VehicleId};

use crate::{FleetError, FleetResult};

// ── DeparturePolicy ───────────────────────────────────────────────────────────

/// Per-tick leave probability that decays with dwell time:
///
/// ```text
/// p(t) = max(floor, base - decay_per_tick * t)
/// ```
///
/// With the defaults a vehicle starts at 30 %, loses one percentage point
/// per tick parked, and bottoms out at 5 % from tick 25 onwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeparturePolicy {
    pub base:           f64,
    pub decay_per_tick: f64,
    pub floor:          f64,
}

impl Default for DeparturePolicy {
    fn default() -> Self {
        Self { base: 0.3, decay_per_tick: 0.01, floor: 0.05 }
    }
}

impl DeparturePolicy {
    /// Requires `0 <= floor <= base <= 1` and a finite, non-negative decay.
    pub fn validate(&self) -> FleetResult<()> {
        let probs_ok = (0.0..=1.0).contains(&self.floor)
            && (0.0..=1.0).contains(&self.base)
            && self.floor <= self.base;
        if !probs_ok {
            return Err(FleetError::Config(format!(
                "departure probabilities need 0 <= floor ({}) <= base ({}) <= 1",
                self.floor, self.base
            )));
        }
        if !(self.decay_per_tick.is_finite() && self.decay_per_tick >= 0.0) {
            return Err(FleetError::Config(format!(
                "departure decay must be finite and non-negative, got {}",
                self.decay_per_tick
            )));
        }
        Ok(())
    }

    /// Leave probability for a vehicle that has been parked `time_spent` ticks.
    #[inline]
    pub fn probability(&self, time_spent: u32) -> f64 {
        (self.base - self.decay_per_tick * time_spent as f64).max(self.floor)
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// One simulated vehicle.  Fields are read-only outside this module: the
/// position is fixed at creation and only the dwell counter advances.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    id:          VehicleId,
    position:    Cell,
    destination: DestinationId,
    time_spent:  u32,
}

impl Vehicle {
    pub fn new(id: VehicleId, position: Cell, destination: DestinationId, time_spent: u32) -> Self {
        Self { id, position, destination, time_spent }
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    /// The destination this vehicle was scored against when it parked.
    #[inline]
    pub fn destination(&self) -> DestinationId {
        self.destination
    }

    /// Ticks parked so far, including any pre-seeded dwell.
    #[inline]
    pub fn time_spent(&self) -> u32 {
        self.time_spent
    }

    /// Advance the dwell counter by one tick.
    #[inline]
    pub fn update_time_spent(&mut self) {
        self.time_spent = self.time_spent.saturating_add(1);
    }

    /// One independent Bernoulli draw at `policy.probability(time_spent)`.
    pub fn should_leave<R: RandomSource + ?Sized>(
        &self,
        policy: &DeparturePolicy,
        rng:    &mut R,
    ) -> bool {
        rng.bernoulli(policy.probability(self.time_spent))
    }
}
