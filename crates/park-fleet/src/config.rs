//! Fleet configuration.
//!
//! Plain structs with `Default` impls.  With the `serde` feature the whole
//! [`FleetConfig`] can be loaded from JSON/TOML by the application; missing
//! fields fall back to their defaults.

use park_core::Region;
use park_decision::ScoringWeights;

use crate::{DeparturePolicy, FleetError, FleetResult};

// ── SpawnPolicy ───────────────────────────────────────────────────────────────

/// How many vehicles arrive each tick and how long they are treated as
/// having stayed already.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnPolicy {
    /// Probability that any vehicles arrive in a given tick.  In `[0, 1]`.
    pub spawn_probability: f64,

    /// Upper bound of the uniform arrival count `[1, max_new_cars]`.
    pub max_new_cars: u32,

    /// Lower bound of the pre-seeded dwell time.
    pub min_parking_time: u32,

    /// Width of the pre-seeded dwell window: arrivals start with
    /// `time_spent` drawn from `[min_parking_time, min_parking_time + span]`.
    /// Seeding arrivals part-way through a stay keeps the fleet's departure
    /// rate near steady state.
    pub dwell_seed_span: u32,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            spawn_probability: 0.9,
            max_new_cars:      10,
            min_parking_time:  200,
            dwell_seed_span:   50,
        }
    }
}

impl SpawnPolicy {
    pub fn validate(&self) -> FleetResult<()> {
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(FleetError::Config(format!(
                "spawn probability must be in [0, 1], got {}",
                self.spawn_probability
            )));
        }
        if self.max_new_cars == 0 {
            return Err(FleetError::Config("max_new_cars must be at least 1".into()));
        }
        if self.min_parking_time.checked_add(self.dwell_seed_span).is_none() {
            return Err(FleetError::Config(format!(
                "dwell window {} + {} overflows",
                self.min_parking_time, self.dwell_seed_span
            )));
        }
        Ok(())
    }

    /// Inclusive bounds of the pre-seeded dwell draw.
    #[inline]
    pub fn dwell_window(&self) -> (u32, u32) {
        (
            self.min_parking_time,
            self.min_parking_time.saturating_add(self.dwell_seed_span),
        )
    }
}

// ── CandidateSearch ───────────────────────────────────────────────────────────

/// Which cells may hold a vehicle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CandidateSearch {
    /// Only cells the mask marks as parking spots.
    #[default]
    Mask,
    /// Every cell of the grid, whatever the mask says.
    Open,
}

// ── FleetConfig ───────────────────────────────────────────────────────────────

/// Everything tunable about a fleet, in one loadable value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    pub spawn:     SpawnPolicy,
    pub departure: DeparturePolicy,
    pub weights:   ScoringWeights,
    pub search:    CandidateSearch,
    /// Restrict the candidate search to this rectangle.
    pub region:    Option<Region>,
}
