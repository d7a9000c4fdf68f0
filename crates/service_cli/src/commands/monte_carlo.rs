//! Monte Carlo command implementation

use pricer_core::types::{OptionContract, OptionKind};
use pricer_models::analytical::BlackScholes;
use pricer_pricing::mc::{BarrierSpec, MonteCarloPricer, PayoffKind, PricingResult, SimulationConfig};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::output::{render, Table};
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct MonteCarloReport {
    payoff: String,
    seed: u64,
    n_paths: usize,
    n_steps: usize,
    barrier: Option<f64>,
    result: PricingResult,
    /// Closed-form reference for vanilla payoffs
    closed_form: Option<f64>,
}

/// Run the mc command
pub fn run(
    contract: OptionContract,
    payoff: PayoffKind,
    barrier: Option<f64>,
    simulation: SimulationConfig,
    format: OutputFormat,
) -> Result<String> {
    contract.validate()?;
    if payoff.is_barrier() && barrier.is_none() {
        return Err(CliError::InvalidArgument(
            "--barrier is required for the barrier-up-and-out payoff".to_string(),
        ));
    }

    let barrier_spec = barrier.map(BarrierSpec::new).unwrap_or_else(BarrierSpec::none);
    let mut pricer = MonteCarloPricer::new(simulation);
    let seed = pricer.seed();
    let result = pricer.simulate_option(&contract, payoff, barrier_spec);
    tracing::info!(
        payoff = %payoff,
        seed,
        price = result.price,
        std_error = result.std_error,
        "monte carlo pricing complete"
    );

    let closed_form = match payoff {
        PayoffKind::Call => Some(BlackScholes::new(contract).price(OptionKind::Call)),
        PayoffKind::Put => Some(BlackScholes::new(contract).price(OptionKind::Put)),
        _ => None,
    };

    let report = MonteCarloReport {
        payoff: payoff.to_string(),
        seed,
        n_paths: simulation.n_paths(),
        n_steps: simulation.n_steps(),
        barrier: barrier_spec.level(),
        result,
        closed_form,
    };
    render(format, &report, || {
        let mut table = Table::key_value()
            .row(["payoff".to_string(), report.payoff.clone()])
            .row(["seed".to_string(), seed.to_string()])
            .row(["paths".to_string(), report.n_paths.to_string()])
            .row(["steps".to_string(), report.n_steps.to_string()])
            .field("price", result.price)
            .field("std error", result.std_error)
            .field("95% half-width", result.confidence_95());
        if payoff.is_barrier() {
            table = table.field("knockout ratio", result.knockout_ratio());
        }
        if let Some(reference) = closed_form {
            table = table.field("closed form", reference);
        }
        table
    })
}
