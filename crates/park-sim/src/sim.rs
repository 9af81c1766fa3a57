//! The `Sim` struct and its tick loop.

use log::debug;

use park_core::{RandomSource, SimConfig, SimRng, Tick};
use park_decision::{ScoringWeights, SpotSelector, WeightedScorer};
use park_fleet::{FleetManager, FleetStats};

use crate::{SimObserver, SimResult};

/// What happened in one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub tick:      Tick,
    /// Arrivals drawn in the spawn phase.
    pub requested: u32,
    /// Arrivals that found a spot.
    pub placed:    u32,
    /// Vehicles that left in the update phase.
    pub departed:  u32,
    /// Fleet figures after the update phase.
    pub stats:     FleetStats,
}

/// The simulation runner.
///
/// Owns the fleet and the random source and drives the two-phase tick.
/// The random source is a type parameter so tests can run the exact same
/// loop on a scripted sequence.
pub struct Sim<S: SpotSelector = WeightedScorer, R: RandomSource = SimRng> {
    /// Run length and seed.
    pub config: SimConfig,

    /// The next tick to be processed.
    pub current_tick: Tick,

    pub fleet: FleetManager<S>,

    pub rng: R,
}

impl<S: SpotSelector> Sim<S, SimRng> {
    /// Create a runner seeded from `config.seed`.
    pub fn new(config: SimConfig, fleet: FleetManager<S>) -> Self {
        let rng = config.make_rng();
        Self::with_rng(config, fleet, rng)
    }
}

impl<S: SpotSelector, R: RandomSource> Sim<S, R> {
    /// Create a runner with an explicit random source.
    pub fn with_rng(config: SimConfig, fleet: FleetManager<S>, rng: R) -> Self {
        Self { config, current_tick: Tick::ZERO, fleet, rng }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process one tick: spawn phase, then update phase.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: spawn ────────────────────────────────────────────────
        let report = self.fleet.spawn_new_cars(&mut self.rng);
        if report.skipped() > 0 {
            debug!("{now}: lot full, {} of {} arrivals turned away", report.skipped(), report.requested);
        }

        // ── Phase 2: update ───────────────────────────────────────────────
        let departed = self.fleet.update_cars(&mut self.rng);
        if !departed.is_empty() {
            observer.on_departures(now, &departed);
        }

        #[cfg(debug_assertions)]
        self.fleet.check_invariants()?;

        let summary = TickSummary {
            tick:      now,
            requested: report.requested,
            placed:    report.placed.len() as u32,
            departed:  departed.len() as u32,
            stats:     self.fleet.stats(),
        };
        debug!("{now}: {summary:?}");
        observer.on_tick_end(&summary, self.fleet.vehicles());

        self.current_tick = now.next();
        Ok(summary)
    }
}

impl<R: RandomSource> Sim<WeightedScorer, R> {
    /// Replace the scoring weights between ticks.
    pub fn set_weights(&mut self, weights: ScoringWeights) {
        self.fleet.set_weights(weights);
    }
}
