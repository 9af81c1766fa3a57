//! Simulation observer trait for progress reporting and rendering.

use log::info;

use park_core::Tick;
use park_fleet::Vehicle;

use crate::TickSummary;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A renderer typically implements only
/// [`on_tick_end`](Self::on_tick_end) and draws `vehicles`.
pub trait SimObserver {
    /// Called at the very start of each tick, before the spawn phase.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the update phase with the vehicles that left this tick.
    /// Not called when nobody left.
    fn on_departures(&mut self, _tick: Tick, _departed: &[Vehicle]) {}

    /// Called at the end of each tick with its summary and the live vehicle
    /// list in arrival order.
    fn on_tick_end(&mut self, _summary: &TickSummary, _vehicles: &[Vehicle]) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that logs a one-line summary every `interval` ticks.
pub struct LogObserver {
    interval: u64,
}

impl LogObserver {
    /// `interval` of 0 is treated as 1.
    pub fn new(interval: u64) -> Self {
        Self { interval: interval.max(1) }
    }
}

impl SimObserver for LogObserver {
    fn on_tick_end(&mut self, s: &TickSummary, _vehicles: &[Vehicle]) {
        if s.tick.0.is_multiple_of(self.interval) {
            info!(
                "{}: +{}/{} arrivals, -{} departures, {} parked ({:.0}% full), mean dwell {:.1}",
                s.tick,
                s.placed,
                s.requested,
                s.departed,
                s.stats.parked,
                s.stats.occupancy_ratio * 100.0,
                s.stats.mean_time_spent,
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!("simulation finished at {final_tick}");
    }
}
