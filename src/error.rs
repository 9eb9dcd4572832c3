//! Typed errors for weighting construction.
//!
//! Evaluation never fails: impassable edges and forbidden turns are
//! `+infinity` weights, and turn evaluation without a provider is a
//! zero-cost no-op. Errors exist only where a weighting is assembled from
//! collaborators that cannot support its contract.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum WeightingError {
    /// The property accessor declares a non-positive maximum, so no
    /// admissible weight-per-distance bound can be derived from it.
    #[error("property max storable value must be positive, got {0}")]
    NonPositiveMaxStorable(f64),

    /// Turn penalty scale must be finite and non-negative; a negative
    /// scale would let turn costs undercut the admissibility bound.
    #[error("turn cost scale must be finite and non-negative, got {0}")]
    InvalidTurnScale(f64),

    /// Configuration requested turn costs but no turn table was supplied.
    #[error("weighting config enables turn costs but no turn table was provided")]
    TurnTableMissing,
}
