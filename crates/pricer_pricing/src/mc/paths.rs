//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) updates using the
//! log-Euler discretisation
//!
//! ```text
//! S(t + dt) = S(t) · exp(drift + diffusion · Z),  Z ~ N(0, 1)
//! ```
//!
//! with `drift = (μ − σ²/2)·dt` and `diffusion = σ·√dt`. Under the
//! risk-neutral measure `μ = r − q`. The scheme reproduces the GBM law at
//! each grid point, so terminal prices do not depend on the step count.
//! Path-dependent payoffs do: Asian averages and barrier checks only see
//! the grid, so a barrier crossed between two steps goes unnoticed and
//! those prices carry a discretisation bias that shrinks as `N` grows.

use pricer_core::math::statistics::{mean, percentile_sorted, sample_std_dev, sort_ascending};
use pricer_core::types::OptionContract;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rng::NormalSource;

/// One log-Euler GBM update: `price · exp(drift + diffusion · Z)`.
///
/// Draws exactly one normal variate from `source`.
///
/// # Example
///
/// ```rust
/// use pricer_pricing::mc::step;
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(1);
/// // Zero diffusion leaves only the deterministic drift
/// let next = step(100.0, 0.01, 0.0, &mut rng);
/// assert!((next - 100.0 * 0.01_f64.exp()).abs() < 1e-12);
/// ```
#[inline]
pub fn step<S: NormalSource>(price: f64, drift: f64, diffusion: f64, source: &mut S) -> f64 {
    price * (drift + diffusion * source.gen_normal()).exp()
}

/// Precomputed per-step log-Euler coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStepper {
    drift: f64,
    diffusion: f64,
}

impl GbmStepper {
    /// Creates a stepper from raw per-step coefficients.
    #[inline]
    pub fn new(drift: f64, diffusion: f64) -> Self {
        Self { drift, diffusion }
    }

    /// Risk-neutral dynamics for `contract` over `n_steps` equal steps.
    ///
    /// Drift `(r − q − σ²/2)·dt`, diffusion `σ·√dt`, `dt = T / n_steps`.
    /// A step count of zero is treated as one and a negative expiry as zero.
    pub fn risk_neutral(contract: &OptionContract, n_steps: usize) -> Self {
        let dt = contract.expiry.max(0.0) / n_steps.max(1) as f64;
        let sigma = contract.volatility;
        Self {
            drift: (contract.rate - contract.dividend_yield - 0.5 * sigma * sigma) * dt,
            diffusion: sigma * dt.sqrt(),
        }
    }

    /// Real-world dynamics with drift `mu` and volatility `sigma`.
    ///
    /// No dividend yield and no discounting. A step count of zero is treated
    /// as one and a negative expiry as zero, which leaves the price unchanged.
    pub fn real_world(mu: f64, sigma: f64, expiry: f64, n_steps: usize) -> Self {
        let dt = expiry.max(0.0) / n_steps.max(1) as f64;
        Self {
            drift: (mu - 0.5 * sigma * sigma) * dt,
            diffusion: sigma * dt.sqrt(),
        }
    }

    /// Per-step log drift.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Per-step diffusion coefficient.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// Advances `price` by one step.
    #[inline]
    pub fn advance<S: NormalSource>(&self, price: f64, source: &mut S) -> f64 {
        step(price, self.drift, self.diffusion, source)
    }

    /// Advances `spot` through `n_steps` steps and returns the terminal price.
    #[inline]
    pub fn terminal<S: NormalSource>(&self, spot: f64, n_steps: usize, source: &mut S) -> f64 {
        (0..n_steps).fold(spot, |price, _| self.advance(price, source))
    }
}

/// Fills `output` with independent real-world terminal GBM prices.
///
/// Each slot receives the end of its own `n_steps`-step path started at
/// `spot` with drift `mu` and volatility `sigma`. No discounting or
/// dividend yield is applied. Exactly `output.len()` slots are written and
/// the buffer is never resized. A step count of zero is treated as one.
///
/// # Example
///
/// ```rust
/// use pricer_pricing::mc::fill_terminal_prices;
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(3);
/// let mut prices = vec![0.0; 4];
/// fill_terminal_prices(100.0, 0.05, 0.0, 1.0, 12, &mut prices, &mut rng);
///
/// let expected = 100.0 * 0.05_f64.exp();
/// assert!(prices.iter().all(|p| (p - expected).abs() < 1e-9));
/// ```
pub fn fill_terminal_prices<S: NormalSource>(
    spot: f64,
    mu: f64,
    sigma: f64,
    expiry: f64,
    n_steps: usize,
    output: &mut [f64],
    source: &mut S,
) {
    let n_steps = n_steps.max(1);
    let stepper = GbmStepper::real_world(mu, sigma, expiry, n_steps);
    for slot in output.iter_mut() {
        *slot = stepper.terminal(spot, n_steps, source);
    }
}

/// Summary of a simulated terminal-price sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminalDistribution {
    /// Number of prices summarised
    pub count: usize,
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Dispersion relative to the starting price, `std_dev / S0`
    pub realised_volatility: f64,
    /// 5th percentile
    pub p5: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median
    pub p50: f64,
    /// 75th percentile
    pub p75: f64,
    /// 95th percentile
    pub p95: f64,
}

impl TerminalDistribution {
    /// Summarises `prices` simulated from starting price `spot`.
    ///
    /// Percentiles interpolate linearly between order statistics. Returns
    /// `None` for an empty sample.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pricer_pricing::mc::TerminalDistribution;
    ///
    /// let summary = TerminalDistribution::from_prices(100.0, &[90.0, 100.0, 110.0]).unwrap();
    /// assert_eq!(summary.p50, 100.0);
    /// assert_eq!(summary.mean, 100.0);
    /// assert!((summary.realised_volatility - 0.1).abs() < 1e-12);
    /// ```
    pub fn from_prices(spot: f64, prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        let mut sorted = prices.to_vec();
        sort_ascending(&mut sorted);
        let std_dev = sample_std_dev(&sorted);

        Some(Self {
            count: sorted.len(),
            mean: mean(&sorted),
            std_dev,
            realised_volatility: std_dev / spot,
            p5: percentile_sorted(&sorted, 5.0),
            p25: percentile_sorted(&sorted, 25.0),
            p50: percentile_sorted(&sorted, 50.0),
            p75: percentile_sorted(&sorted, 75.0),
            p95: percentile_sorted(&sorted, 95.0),
        })
    }
}
