//! Risk error types.
//!
//! Estimators over validated inputs are total; only building a
//! [`ReturnSeries`](super::ReturnSeries) or [`VarConfig`](super::VarConfig)
//! can fail.

use thiserror::Error;

/// Errors raised while validating risk inputs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RiskError {
    /// The return series holds no observations.
    #[error("Return series is empty")]
    EmptyReturnSeries,

    /// A return is NaN or infinite.
    #[error("Non-finite return {value} at index {index}")]
    NonFiniteReturn {
        /// Position of the offending return
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Confidence level outside the open interval `(0, 1)`.
    #[error("Invalid confidence level {0}: must lie strictly between 0 and 1")]
    InvalidConfidence(f64),

    /// Horizon shorter than one day.
    #[error("Invalid horizon {0} days: must be at least 1")]
    InvalidHorizon(u32),
}
