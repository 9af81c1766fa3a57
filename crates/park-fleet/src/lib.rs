//! `park-fleet` — vehicles and the fleet manager that spawns and retires them.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`vehicle`]      | `Vehicle`, `DeparturePolicy`                              |
//! | [`destinations`] | `Destination`, `DestinationTable`                         |
//! | [`config`]       | `SpawnPolicy`, `CandidateSearch`, `FleetConfig`           |
//! | [`manager`]      | `FleetManager`, `SpawnReport`, `FleetStats`               |
//! | [`builder`]      | `FleetBuilder` — validated construction                   |
//! | [`error`]        | `FleetError`, `FleetResult<T>`                            |
//!
//! # One tick
//!
//! ```text
//! ① spawn_new_cars  — Bernoulli(spawn_probability); draw n in [1, max_new_cars];
//!                     per unit: destination → free candidates → selector →
//!                     place and claim the cell immediately.
//! ② update_cars     — per vehicle in arrival order: time_spent += 1, then
//!                     Bernoulli(departure probability); survivors rebuild
//!                     the occupied set from scratch.
//! ```
//!
//! The two phases never interleave, and after each one the occupied set is
//! exactly the set of live vehicle positions.

pub mod builder;
pub mod config;
pub mod destinations;
pub mod error;
pub mod manager;
pub mod vehicle;


pub use builder::FleetBuilder;
pub use config::{CandidateSearch, FleetConfig, SpawnPolicy};
pub use destinations::{Destination, DestinationTable};
pub use error::{FleetError, FleetResult};
pub use manager::{FleetManager, FleetStats, SpawnReport};
pub use vehicle::{DeparturePolicy, Vehicle};
