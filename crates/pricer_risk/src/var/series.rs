//! Validated inputs and outputs shared by the VaR estimators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::math::statistics::{mean, sample_std_dev, sort_ascending};

use super::error::RiskError;

/// Relative slack applied to `(1 − c)·n` before flooring.
///
/// `1 − 0.8` is `0.19999999999999996` in binary, so `(1 − 0.8)·5` floors to
/// 0 instead of 1 without it.
const TAIL_INDEX_SLACK: f64 = 1e-12;

/// Index of the VaR order statistic in an ascending sample of `n` returns.
///
/// `⌊(1 − c)·n⌋` clamped into `[0, n − 1]`; `0` for an empty sample. Out of
/// range confidences clamp rather than fail: `c ≥ 1` selects the worst
/// return, `c ≤ 0` the best.
pub fn tail_index(confidence: f64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let raw = (1.0 - confidence) * n as f64;
    let index = (raw * (1.0 + TAIL_INDEX_SLACK)).floor();
    if index.is_nan() || index <= 0.0 {
        0
    } else {
        (index as usize).min(n - 1)
    }
}

/// Square-root-of-time scaling for a horizon in days (`0` counts as one day).
#[inline]
pub fn horizon_scale(horizon_days: u32) -> f64 {
    f64::from(horizon_days.max(1)).sqrt()
}

/// A non-empty sample of finite periodic returns, held in ascending order.
///
/// The estimators only need order statistics and moments, so the original
/// time order is not retained.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnSeries {
    sorted: Vec<f64>,
}

impl ReturnSeries {
    /// Validates and sorts `returns`.
    ///
    /// # Errors
    ///
    /// [`RiskError::EmptyReturnSeries`] for an empty vector and
    /// [`RiskError::NonFiniteReturn`] if any element is NaN or infinite.
    pub fn new(mut returns: Vec<f64>) -> Result<Self, RiskError> {
        if returns.is_empty() {
            return Err(RiskError::EmptyReturnSeries);
        }
        if let Some((index, &value)) = returns.iter().enumerate().find(|(_, r)| !r.is_finite()) {
            return Err(RiskError::NonFiniteReturn { index, value });
        }
        sort_ascending(&mut returns);
        Ok(Self { sorted: returns })
    }

    /// Copies and validates a slice of returns.
    pub fn from_slice(returns: &[f64]) -> Result<Self, RiskError> {
        Self::new(returns.to_vec())
    }

    /// Number of observations (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Returns in ascending order.
    #[inline]
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Sample mean.
    pub fn mean(&self) -> f64 {
        mean(&self.sorted)
    }

    /// Sample standard deviation (divisor `n − 1`, `0` for one observation).
    pub fn std_dev(&self) -> f64 {
        sample_std_dev(&self.sorted)
    }
}

/// Confidence level and holding period for a VaR estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VarConfig {
    confidence: f64,
    horizon_days: u32,
}

impl VarConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// [`RiskError::InvalidConfidence`] unless `0 < confidence < 1`, and
    /// [`RiskError::InvalidHorizon`] if `horizon_days` is zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_risk::var::VarConfig;
    ///
    /// let config = VarConfig::new(0.99, 10).unwrap();
    /// assert_eq!(config.horizon_days(), 10);
    /// assert!(VarConfig::new(1.0, 1).is_err());
    /// ```
    pub fn new(confidence: f64, horizon_days: u32) -> Result<Self, RiskError> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(RiskError::InvalidConfidence(confidence));
        }
        if horizon_days < 1 {
            return Err(RiskError::InvalidHorizon(horizon_days));
        }
        Ok(Self {
            confidence,
            horizon_days,
        })
    }

    /// Confidence level `c`.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Holding period `h` in days.
    #[inline]
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }
}

impl Default for VarConfig {
    /// 95% one-day VaR.
    fn default() -> Self {
        Self {
            confidence: 0.95,
            horizon_days: 1,
        }
    }
}

/// Estimation method behind a [`VarEstimate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VarMethod {
    /// Empirical quantile of observed returns.
    Historical,
    /// Empirical quantile of simulated normal horizon returns.
    Simulated,
    /// Closed-form normal quantile fitted to sample moments.
    Parametric,
}

impl std::fmt::Display for VarMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VarMethod::Historical => "historical",
            VarMethod::Simulated => "simulated",
            VarMethod::Parametric => "parametric",
        };
        f.write_str(name)
    }
}

/// VaR and expected shortfall for one configuration, both as positive losses.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VarEstimate {
    /// How the estimate was produced.
    pub method: VarMethod,
    /// Confidence level `c`.
    pub confidence: f64,
    /// Holding period in days.
    pub horizon_days: u32,
    /// Observations or simulations behind the estimate.
    pub sample_size: usize,
    /// Value-at-Risk.
    pub var: f64,
    /// Expected shortfall (mean loss beyond VaR).
    pub expected_shortfall: f64,
}
