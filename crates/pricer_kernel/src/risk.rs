//! Value-at-Risk entry points.

use pricer_core::math::statistics::sort_ascending;
use pricer_pricing::rng::with_thread_rng;
use pricer_risk::var::{simulate_horizon_returns, var_from_sorted};

#[inline]
fn horizon(days: i32) -> u32 {
    days.max(1).unsigned_abs()
}

/// Historical VaR of the first `n` returns: `−sorted[⌊(1−c)·n⌋]·√h`.
///
/// Uses `min(n, returns.len())` observations and returns `0.0` when none
/// remain. The order-statistic index is clamped into the sample and
/// `horizon_days < 1` counts as one day.
pub fn historical_var(returns: &[f64], n: i32, confidence: f64, horizon_days: i32) -> f64 {
    let n = (n.max(0) as usize).min(returns.len());
    let mut sorted = returns[..n].to_vec();
    sort_ascending(&mut sorted);
    var_from_sorted(&sorted, confidence, horizon(horizon_days))
}

/// Monte Carlo VaR of summed normal daily returns `mu + daily_sigma·Z`.
///
/// `sim_count < 1` returns `0.0`; `horizon_days < 1` counts as one day.
pub fn simulated_var(
    mu: f64,
    daily_sigma: f64,
    confidence: f64,
    horizon_days: i32,
    sim_count: i32,
) -> f64 {
    if sim_count < 1 {
        return 0.0;
    }
    let days = horizon(horizon_days);
    let sample = with_thread_rng(|rng| {
        simulate_horizon_returns(mu, daily_sigma, days, sim_count as usize, rng)
    });
    // The horizon is simulated directly, so no root-time scaling
    var_from_sorted(&sample, confidence, 1)
}
