//! Error types for Monte Carlo configuration.
//!
//! Simulations themselves are total; only building a configuration can fail.

use thiserror::Error;

/// Monte Carlo configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside `[1, MAX_PATHS]`.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside `[1, MAX_STEPS]`.
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// A required parameter was missing or malformed.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the problem
        value: String,
    },
}
