//! Terminal-price distribution command implementation

use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig, TerminalDistribution};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::output::{render, Table};
use crate::{CliError, Result};

/// Real-world GBM parameters for the terminal-price simulation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GbmInputs {
    /// Starting price
    pub spot: f64,
    /// Annual drift
    pub mu: f64,
    /// Annual volatility
    pub sigma: f64,
    /// Horizon in years
    pub expiry: f64,
}

#[derive(Debug, Serialize)]
struct PathsReport {
    inputs: GbmInputs,
    seed: u64,
    n_steps: usize,
    distribution: TerminalDistribution,
}

/// Run the paths command
pub fn run(inputs: GbmInputs, simulation: SimulationConfig, format: OutputFormat) -> Result<String> {
    let GbmInputs {
        spot,
        mu,
        sigma,
        expiry,
    } = inputs;
    if ![spot, mu, sigma, expiry].iter().all(|v| v.is_finite()) {
        return Err(CliError::InvalidArgument(
            "GBM inputs must be finite".to_string(),
        ));
    }

    let mut pricer = MonteCarloPricer::new(simulation);
    let seed = pricer.seed();
    let distribution = pricer
        .terminal_distribution(spot, mu, sigma, expiry)
        .ok_or_else(|| CliError::InvalidArgument("no paths simulated".to_string()))?;

    let report = PathsReport {
        inputs,
        seed,
        n_steps: simulation.n_steps(),
        distribution,
    };
    render(format, &report, || {
        Table::key_value()
            .row(["paths".to_string(), distribution.count.to_string()])
            .row(["seed".to_string(), seed.to_string()])
            .field("mean", distribution.mean)
            .field("std dev", distribution.std_dev)
            .field("dispersion", distribution.realised_volatility)
            .field("p5", distribution.p5)
            .field("p25", distribution.p25)
            .field("p50", distribution.p50)
            .field("p75", distribution.p75)
            .field("p95", distribution.p95)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_volatility_distribution_is_degenerate() {
        let inputs = GbmInputs {
            spot: 100.0,
            mu: 0.05,
            sigma: 0.0,
            expiry: 1.0,
        };
        let config = SimulationConfig::builder()
            .n_paths(100)
            .n_steps(1)
            .seed(1)
            .build()
            .unwrap();
        let out = run(inputs, config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let forward = 100.0 * 0.05_f64.exp();
        assert!((value["distribution"]["p5"].as_f64().unwrap() - forward).abs() < 1e-9);
        assert!((value["distribution"]["p95"].as_f64().unwrap() - forward).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let inputs = GbmInputs {
            spot: 100.0,
            mu: f64::INFINITY,
            sigma: 0.2,
            expiry: 1.0,
        };
        let config = SimulationConfig::new(10, 1).unwrap();
        assert!(run(inputs, config, OutputFormat::Table).is_err());
    }
}
