//! `park-decision` — choosing where an arriving vehicle parks.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`weights`]  | `ScoringWeights` — validated destination/spacing weights   |
//! | [`selector`] | `SpotSelector` trait — the seam the fleet manager calls    |
//! | [`scorer`]   | `WeightedScorer` — the linear two-criterion scorer         |
//! | [`index`]    | `OccupiedIndex` — R-tree over occupied cells               |
//! | [`error`]    | `DecisionError`, `DecisionResult<T>`                       |
//!
//! # Scoring
//!
//! ```text
//! score = -w_dest * dist(candidate, destination)
//!       + w_spacing * min_{o in occupied} dist(candidate, o)
//! ```
//!
//! The spacing term is `+inf` when nothing is parked yet.  A criterion
//! whose weight is exactly zero contributes nothing, so `0 * inf` never
//! turns a score into NaN.

pub mod error;
pub mod index;
pub mod scorer;
pub mod selector;
pub mod weights;


pub use error::{DecisionError, DecisionResult};
pub use index::OccupiedIndex;
pub use scorer::WeightedScorer;
pub use selector::SpotSelector;
pub use weights::ScoringWeights;
