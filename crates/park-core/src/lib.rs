//! `park-core` — foundational types for the `parksim` occupancy simulator.
//!
//! This crate is a dependency of every other `park-*` crate.  It has no
//! `park-*` dependencies and minimal external ones (`rand`, `rustc-hash`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`grid`]    | `Cell`, `CellSet`, euclidean distance                      |
//! | [`mask`]    | `Mask`, `CellKind`, `Region`                               |
//! | [`ids`]     | `VehicleId`, `DestinationId`                               |
//! | [`time`]    | `Tick`, `SimConfig`                                        |
//! | [`rng`]     | `RandomSource` trait, `SimRng`, `SequenceRng`              |
//! | [`error`]   | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod error;
pub mod grid;
pub mod ids;
pub mod mask;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::{Cell, CellSet};
pub use ids::{DestinationId, VehicleId};
pub use mask::{CellKind, Mask, Region};
pub use rng::{RandomSource, SequenceRng, SimRng};
pub use time::{SimConfig, Tick};
