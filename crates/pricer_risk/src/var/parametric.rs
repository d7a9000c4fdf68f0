//! Parametric (variance-covariance) VaR under a normal return model.

use pricer_models::analytical::{norm_inv_cdf, norm_pdf};

use super::series::{ReturnSeries, VarConfig, VarEstimate, VarMethod};

/// Normal-model VaR and expected shortfall for daily moments `mean`, `std_dev`.
///
/// With `z = −Φ⁻¹(1 − c)`:
/// - `VaR = z·s·√h − m·h`
/// - `ES = s·√h·φ(z)/(1 − c) − m·h`
///
/// `sample_size` is carried through to the estimate unchanged.
pub fn normal_var(mean: f64, std_dev: f64, config: &VarConfig, sample_size: usize) -> VarEstimate {
    let tail_probability = 1.0 - config.confidence();
    let z = -norm_inv_cdf(tail_probability);
    let horizon = f64::from(config.horizon_days());
    let scaled_sigma = std_dev * horizon.sqrt();
    let drift = mean * horizon;

    VarEstimate {
        method: VarMethod::Parametric,
        confidence: config.confidence(),
        horizon_days: config.horizon_days(),
        sample_size,
        var: z * scaled_sigma - drift,
        expected_shortfall: scaled_sigma * norm_pdf(z) / tail_probability - drift,
    }
}

/// Parametric VaR fitted to the sample mean and standard deviation of `series`.
///
/// # Examples
/// ```
/// use pricer_risk::var::{parametric_var, ReturnSeries, VarConfig};
///
/// let series = ReturnSeries::new(vec![-0.02, -0.01, 0.0, 0.01, 0.02]).unwrap();
/// let estimate = parametric_var(&series, &VarConfig::new(0.95, 1).unwrap());
///
/// // z₀.₉₅ · s with s = √2.5e-4
/// assert!((estimate.var - 1.644854 * 0.0158114).abs() < 1e-6);
/// ```
pub fn parametric_var(series: &ReturnSeries, config: &VarConfig) -> VarEstimate {
    let estimate = normal_var(series.mean(), series.std_dev(), config, series.len());
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
