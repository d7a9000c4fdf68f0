//! VaR command implementations
//!
//! Historical and parametric VaR read a return series; simulated VaR draws
//! normal daily returns.

use pricer_pricing::rng::PricerRng;
use pricer_risk::var::{
    historical_estimate, parametric_var, simulated_var_with_shortfall, ReturnSeries, VarConfig,
    VarEstimate,
};

use crate::config::OutputFormat;
use crate::output::{render, Table};
use crate::{CliError, Result};

fn render_estimate(estimate: &VarEstimate, format: OutputFormat) -> Result<String> {
    render(format, estimate, || {
        Table::key_value()
            .row(["method".to_string(), estimate.method.to_string()])
            .row(["observations".to_string(), estimate.sample_size.to_string()])
            .field("confidence", estimate.confidence)
            .row(["horizon (days)".to_string(), estimate.horizon_days.to_string()])
            .field("VaR", estimate.var)
            .field("expected shortfall", estimate.expected_shortfall)
    })
}

/// Run `var historical`
pub fn historical(returns: Vec<f64>, config: VarConfig, format: OutputFormat) -> Result<String> {
    let series = ReturnSeries::new(returns)?;
    render_estimate(&historical_estimate(&series, &config), format)
}

/// Run `var parametric`
pub fn parametric(returns: Vec<f64>, config: VarConfig, format: OutputFormat) -> Result<String> {
    let series = ReturnSeries::new(returns)?;
    render_estimate(&parametric_var(&series, &config), format)
}

/// Run `var simulated`
pub fn simulated(
    mu: f64,
    sigma: f64,
    config: VarConfig,
    simulations: usize,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<String> {
    if simulations == 0 {
        return Err(CliError::InvalidArgument(
            "simulations must be at least 1".to_string(),
        ));
    }
    let mut rng = match seed {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), simulations, "simulating VaR");
    let estimate = simulated_var_with_shortfall(mu, sigma, &config, simulations, &mut rng);
    render_estimate(&estimate, format)
}
