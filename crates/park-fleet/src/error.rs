use park_core::CoreError;
use park_decision::DecisionError;
use thiserror::Error;

use crate::CandidateSearch;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("destination table is empty")]
    NoDestinations,

    #[error("no candidate cells for {search:?} search; the lot can never hold a vehicle")]
    NoParkingSpots { search: CandidateSearch },

    #[error("fleet configuration error: {0}")]
    Config(String),

    #[error("fleet invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

pub type FleetResult<T> = Result<T, FleetError>;
