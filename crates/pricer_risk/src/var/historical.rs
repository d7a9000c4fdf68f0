//! Historical-simulation VaR and expected shortfall.
//!
//! The loss quantile is read directly off the sorted return sample and
//! scaled to the holding period by `√h`.

use super::series::{horizon_scale, tail_index, ReturnSeries, VarConfig, VarEstimate, VarMethod};

/// VaR of an ascending-sorted sample: `−sorted[i]·√h` with `i` from [`tail_index`].
///
/// Returns `0.0` for an empty sample. Unlike [`historical_var`] the inputs
/// are not validated, which makes this the building block for callers that
/// must stay total.
pub fn var_from_sorted(sorted: &[f64], confidence: f64, horizon_days: u32) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    -sorted[tail_index(confidence, sorted.len())] * horizon_scale(horizon_days)
}

/// Expected shortfall of an ascending-sorted sample.
///
/// Mean of the returns at or below the VaR order statistic, negated and
/// scaled by `√h`. Returns `0.0` for an empty sample.
pub fn shortfall_from_sorted(sorted: &[f64], confidence: f64, horizon_days: u32) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let tail = &sorted[..=tail_index(confidence, sorted.len())];
    let tail_mean = tail.iter().sum::<f64>() / tail.len() as f64;
    -tail_mean * horizon_scale(horizon_days)
}

/// Historical VaR of `series` at `config`.
///
/// # Examples
/// ```
/// use pricer_risk::var::{historical_var, ReturnSeries, VarConfig};
///
/// let series = ReturnSeries::new(vec![-0.05, -0.02, 0.0, 0.01, 0.03]).unwrap();
/// let config = VarConfig::new(0.8, 1).unwrap();
/// assert_eq!(historical_var(&series, &config), 0.02);
/// ```
pub fn historical_var(series: &ReturnSeries, config: &VarConfig) -> f64 {
    var_from_sorted(series.sorted(), config.confidence(), config.horizon_days())
}

/// Historical expected shortfall of `series` at `config`.
pub fn historical_expected_shortfall(series: &ReturnSeries, config: &VarConfig) -> f64 {
    shortfall_from_sorted(series.sorted(), config.confidence(), config.horizon_days())
}

/// Historical VaR and expected shortfall together.
pub fn historical_estimate(series: &ReturnSeries, config: &VarConfig) -> VarEstimate {
    let estimate = VarEstimate {
        method: VarMethod::Historical,
        confidence: config.confidence(),
        horizon_days: config.horizon_days(),
        sample_size: series.len(),
        var: historical_var(series, config),
        expected_shortfall: historical_expected_shortfall(series, config),
    };
    tracing::debug!(
        method = %estimate.method,
        confidence = estimate.confidence,
        horizon_days = estimate.horizon_days,
        sample_size = estimate.sample_size,
        var = estimate.var,
        expected_shortfall = estimate.expected_shortfall,
        "computed VaR estimate"
    );
    estimate
}
