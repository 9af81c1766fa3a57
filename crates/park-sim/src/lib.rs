//! `park-sim` — tick driver for the parksim occupancy simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Spawn   — FleetManager::spawn_new_cars: arrivals are scored and parked.
//!   ② Update  — FleetManager::update_cars: every vehicle ages one tick and
//!               may depart; the occupied set is rebuilt.
//!   ③ Report  — observers receive the departures and a TickSummary.
//! ```
//!
//! The phases are strictly sequential.  A run can only be stopped between
//! ticks: `run` checks the end tick, and `run_ticks`/`step` return control
//! to the caller after each tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use park_core::SimConfig;
//! use park_fleet::{DestinationTable, FleetBuilder};
//! use park_sim::{NoopObserver, Sim};
//!
//! let fleet = FleetBuilder::new(mask, DestinationTable::cardinal(w, h)).build()?;
//! let mut sim = Sim::new(SimConfig::default(), fleet);
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use sim::{Sim, TickSummary};
