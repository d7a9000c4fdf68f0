//! CLI error types.

use pricer_core::types::PricingError;
use pricer_pricing::mc::ConfigError as SimulationError;
use pricer_risk::var::RiskError;
use thiserror::Error;

/// Errors surfaced by the `quantkernel` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line value is malformed or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file or an environment override is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV input could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A contract or kind code was rejected.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The simulation settings were rejected.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// The VaR inputs were rejected.
    #[error(transparent)]
    Risk(#[from] RiskError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::FileNotFound("returns.csv".to_string());
        assert_eq!(err.to_string(), "File not found: returns.csv");

        let err: CliError = RiskError::EmptyReturnSeries.into();
        assert_eq!(err.to_string(), "Return series is empty");

        let err: CliError = SimulationError::InvalidPathCount(0).into();
        assert!(err.to_string().contains("Invalid path count"));
    }
}
