//! Scoring weight configuration.

use crate::{DecisionError, DecisionResult};

/// The two scalars of the linear scorer.
///
/// Both weights are independent, finite, non-negative values.  They are
/// not normalised and need not sum to one.  Construct through
/// [`ScoringWeights::new`] so the sign convention of the formula holds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoringWeights {
    destination: f64,
    spacing:     f64,
}

impl ScoringWeights {
    pub fn new(destination: f64, spacing: f64) -> DecisionResult<Self> {
        Ok(Self {
            destination: check("destination", destination)?,
            spacing:     check("spacing", spacing)?,
        })
    }

    /// Weight on distance to the vehicle's destination (penalised).
    #[inline]
    pub fn destination(&self) -> f64 {
        self.destination
    }

    /// Weight on distance to the nearest parked vehicle (rewarded).
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Copy with a new destination weight.
    pub fn with_destination(self, destination: f64) -> DecisionResult<Self> {
        Self::new(destination, self.spacing)
    }

    /// Copy with a new spacing weight.
    pub fn with_spacing(self, spacing: f64) -> DecisionResult<Self> {
        Self::new(self.destination, spacing)
    }
}

impl Default for ScoringWeights {
    /// Spread-out-first defaults: spacing dominates, destination breaks ties.
    fn default() -> Self {
        Self { destination: 0.01, spacing: 0.99 }
    }
}

fn check(name: &'static str, value: f64) -> DecisionResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DecisionError::InvalidWeight { name, value })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScoringWeights {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            destination: f64,
            spacing:     f64,
        }
        let raw = Raw::deserialize(d)?;
        ScoringWeights::new(raw.destination, raw.spacing).map_err(serde::de::Error::custom)
    }
}
