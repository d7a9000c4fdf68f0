//! Implied volatility command implementation

use pricer_core::types::{OptionContract, OptionKind};
use pricer_models::analytical::implied_volatility_detailed;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::output::{render, Table};
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct ImpliedVolReport {
    kind: OptionKind,
    market_price: f64,
    volatility: f64,
    iterations: usize,
    converged: bool,
    termination: String,
}

/// Run the implied-vol command
pub fn run(
    market_price: f64,
    contract: OptionContract,
    kind: OptionKind,
    format: OutputFormat,
) -> Result<String> {
    if !market_price.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "market price must be finite, got {}",
            market_price
        )));
    }
    contract.validate()?;

    let result = implied_volatility_detailed(market_price, &contract, kind);
    if !result.converged() {
        tracing::warn!(
            volatility = result.volatility,
            termination = ?result.termination,
            "implied volatility is an approximation"
        );
    }

    let report = ImpliedVolReport {
        kind,
        market_price,
        volatility: result.volatility,
        iterations: result.iterations,
        converged: result.converged(),
        termination: format!("{:?}", result.termination),
    };
    render(format, &report, || {
        Table::key_value()
            .field("volatility", report.volatility)
            .row(["iterations".to_string(), report.iterations.to_string()])
            .row(["termination".to_string(), report.termination.clone()])
    })
}
