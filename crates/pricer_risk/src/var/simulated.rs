//! Monte Carlo VaR under i.i.d. normal daily returns.
//!
//! Each simulated horizon return is the sum of `h` daily draws
//! `μ + σ·Z`. The horizon is simulated explicitly, so no `√h` scaling is
//! applied to the resulting quantile.

use pricer_core::math::statistics::sort_ascending;
use pricer_pricing::rng::NormalSource;

use super::historical::{shortfall_from_sorted, var_from_sorted};
use super::series::{VarConfig, VarEstimate, VarMethod};

/// Simulates `n_sims` horizon returns and returns them in ascending order.
///
/// A zero horizon is treated as one day.
pub fn simulate_horizon_returns<S: NormalSource>(
    mu: f64,
    sigma: f64,
    horizon_days: u32,
    n_sims: usize,
    source: &mut S,
) -> Vec<f64> {
    let days = horizon_days.max(1);
    let mut returns: Vec<f64> = (0..n_sims)
        .map(|_| (0..days).map(|_| mu + sigma * source.gen_normal()).sum())
        .collect();
    sort_ascending(&mut returns);
    returns
}

/// Simulated VaR at `config` from `n_sims` horizon returns.
///
/// Returns `0.0` when `n_sims` is zero.
pub fn simulated_var<S: NormalSource>(
    mu: f64,
    sigma: f64,
    config: &VarConfig,
    n_sims: usize,
    source: &mut S,
) -> f64 {
    let returns = simulate_horizon_returns(mu, sigma, config.horizon_days(), n_sims, source);
    var_from_sorted(&returns, config.confidence(), 1)
}

/// Simulated VaR and expected shortfall from one simulation run.
///
/// # Examples
/// ```
/// use pricer_pricing::rng::PricerRng;
/// use pricer_risk::var::{simulated_var_with_shortfall, VarConfig};
///
/// let mut rng = PricerRng::from_seed(7);
/// let config = VarConfig::new(0.95, 1).unwrap();
/// let estimate = simulated_var_with_shortfall(0.0, 0.01, &config, 20_000, &mut rng);
///
/// assert!((estimate.var - 0.0164).abs() < 0.002);
/// assert!(estimate.expected_shortfall > estimate.var);
/// ```
pub fn simulated_var_with_shortfall<S: NormalSource>(
    mu: f64,
    sigma: f64,
    config: &VarConfig,
    n_sims: usize,
    source: &mut S,
) -> VarEstimate {
    let returns = simulate_horizon_returns(mu, sigma, config.horizon_days(), n_sims, source);
    let estimate = VarEstimate {
        method: VarMethod::Simulated,
        confidence: config.confidence(),
        horizon_days: config.horizon_days(),
        sample_size: n_sims,
        var: var_from_sorted(&returns, config.confidence(), 1),
        expected_shortfall: shortfall_from_sorted(&returns, config.confidence(), 1),
    };
    tracing::debug!(
        method = %estimate.method,
        mu,
        sigma,
        confidence = estimate.confidence,
        horizon_days = estimate.horizon_days,
        sample_size = estimate.sample_size,
        var = estimate.var,
        expected_shortfall = estimate.expected_shortfall,
        "computed VaR estimate"
    );
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_pricing::rng::PricerRng;

    /// Replays a fixed sequence of normals, cycling when exhausted.
    struct Scripted {
        draws: Vec<f64>,
        next: usize,
    }

    impl NormalSource for Scripted {
        fn gen_normal(&mut self) -> f64 {
            let z = self.draws[self.next % self.draws.len()];
            self.next += 1;
            z
        }
    }

    #[test]
    fn test_horizon_returns_sum_daily_draws() {
        let mut source = Scripted {
            draws: vec![1.0, -1.0, 2.0, 0.5],
            next: 0,
        };
        let returns = simulate_horizon_returns(0.001, 0.01, 2, 2, &mut source);
        // (0.001 + 0.01) + (0.001 − 0.01) and (0.001 + 0.02) + (0.001 + 0.005)
        assert_relative_eq!(returns[0], 0.002, epsilon = 1e-15);
        assert_relative_eq!(returns[1], 0.027, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_sims_is_zero() {
        let mut rng = PricerRng::from_seed(1);
        let config = VarConfig::default();
        assert_eq!(simulated_var(0.0, 0.01, &config, 0, &mut rng), 0.0);
        let estimate = simulated_var_with_shortfall(0.0, 0.01, &config, 0, &mut rng);
        assert_eq!(estimate.var, 0.0);
        assert_eq!(estimate.expected_shortfall, 0.0);
    }

    #[test]
    fn test_zero_volatility_is_negated_drift() {
        let mut rng = PricerRng::from_seed(1);
        let config = VarConfig::new(0.99, 5).unwrap();
        let var = simulated_var(0.001, 0.0, &config, 100, &mut rng);
        assert_relative_eq!(var, -0.005, epsilon = 1e-15);
    }

    #[test]
    fn test_one_day_normal_quantile() {
        let mut rng = PricerRng::from_seed(42);
        let config = VarConfig::new(0.95, 1).unwrap();
        let estimate = simulated_var_with_shortfall(0.0, 0.01, &config, 100_000, &mut rng);
        assert_relative_eq!(estimate.var, 0.016449, max_relative = 0.05);
        // σ·φ(z)/(1 − c) for the normal tail
        assert_relative_eq!(estimate.expected_shortfall, 0.020627, max_relative = 0.05);
    }

    #[test]
    fn test_ten_day_horizon_scales_like_root_time() {
        let mut rng = PricerRng::from_seed(11);
        let config = VarConfig::new(0.95, 10).unwrap();
        let var = simulated_var(0.0, 0.01, &config, 50_000, &mut rng);
        assert_relative_eq!(var, 0.016449 * 10_f64.sqrt(), max_relative = 0.05);
    }

    #[test]
    fn test_same_seed_same_estimate() {
        let config = VarConfig::new(0.99, 2).unwrap();
        let a = simulated_var(0.0005, 0.02, &config, 5_000, &mut PricerRng::from_seed(3));
        let b = simulated_var(0.0005, 0.02, &config, 5_000, &mut PricerRng::from_seed(3));
        assert_eq!(a, b);
    }
}
