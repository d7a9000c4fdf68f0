//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes-Merton model for pricing European
//! call and put options on an underlying with a continuous dividend yield,
//! together with its analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Conventions
//!
//! - Vega and rho are quoted per 1 percentage point (divided by 100).
//! - Theta is quoted per calendar day (divided by 365).
//! - A degenerate contract (`T ≤ 0`, `σ ≤ 0`, `S ≤ 0` or `K ≤ 0`) prices at
//!   intrinsic value and has every Greek equal to zero. No logarithm is
//!   evaluated for it.

use pricer_core::types::{OptionContract, OptionKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::distributions::{norm_cdf, norm_pdf};

/// Calendar days per year used to quote theta per day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Scale from per-unit to per-percentage-point sensitivities.
const PER_PERCENT: f64 = 100.0;

/// Full set of closed-form sensitivities for one contract and kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// Option price
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1% volatility
    pub vega: f64,
    /// ∂V/∂t per calendar day
    pub theta: f64,
    /// ∂V/∂r per 1% rate
    pub rho: f64,
    /// d₁ term (0 for a degenerate contract)
    pub d1: f64,
    /// d₂ term (0 for a degenerate contract)
    pub d2: f64,
}

/// Black-Scholes-Merton engine bound to one contract.
///
/// Every method is total: degenerate inputs return intrinsic value or zero
/// rather than NaN or an error.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
/// use pricer_models::analytical::BlackScholes;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// let bs = BlackScholes::new(contract);
///
/// let call = bs.price(OptionKind::Call);
/// let put = bs.price(OptionKind::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    contract: OptionContract,
}

impl BlackScholes {
    /// Creates an engine for `contract`.
    #[inline]
    pub fn new(contract: OptionContract) -> Self {
        Self { contract }
    }

    /// Returns the contract this engine prices.
    #[inline]
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Computes `(d₁, d₂)`, or `None` for a degenerate contract.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionContract;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// // ATM with r = q = 0: d1 = σ√T / 2
    /// let bs = BlackScholes::new(OptionContract::new(100.0, 100.0, 1.0, 0.0, 0.2, 0.0));
    /// let (d1, d2) = bs.d1d2().unwrap();
    /// assert!((d1 - 0.1).abs() < 1e-12);
    /// assert!((d2 + 0.1).abs() < 1e-12);
    ///
    /// let expired = BlackScholes::new(OptionContract::new(100.0, 100.0, 0.0, 0.0, 0.2, 0.0));
    /// assert!(expired.d1d2().is_none());
    /// ```
    #[inline]
    pub fn d1d2(&self) -> Option<(f64, f64)> {
        let c = &self.contract;
        if c.is_degenerate() {
            return None;
        }

        let vol_sqrt_t = c.volatility * c.expiry.sqrt();
        let log_moneyness = (c.spot / c.strike).ln();
        let drift = (c.rate - c.dividend_yield + 0.5 * c.volatility * c.volatility) * c.expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        Some((d1, d1 - vol_sqrt_t))
    }

    /// Computes the option price.
    ///
    /// Degenerate contracts return intrinsic value `max(S−K, 0)` or
    /// `max(K−S, 0)`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionContract, OptionKind};
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0));
    /// assert!((bs.price(OptionKind::Call) - 10.4506).abs() < 1e-4);
    /// ```
    pub fn price(&self, kind: OptionKind) -> f64 {
        let c = &self.contract;
        let Some((d1, d2)) = self.d1d2() else {
            return c.intrinsic(kind);
        };

        let forward_leg = c.spot * c.dividend_factor();
        let strike_leg = c.strike * c.discount_factor();

        match kind {
            OptionKind::Call => forward_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
            OptionKind::Put => strike_leg * norm_cdf(-d2) - forward_leg * norm_cdf(-d1),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = -e^(-qT)·N(-d₁)
    #[inline]
    pub fn delta(&self, kind: OptionKind) -> f64 {
        let Some((d1, _)) = self.d1d2() else {
            return 0.0;
        };
        let carry = self.contract.dividend_factor();
        match kind {
            OptionKind::Call => carry * norm_cdf(d1),
            OptionKind::Put => -carry * norm_cdf(-d1),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T), the same for calls and puts and
    /// never negative.
    #[inline]
    pub fn gamma(&self) -> f64 {
        let Some((d1, _)) = self.d1d2() else {
            return 0.0;
        };
        let c = &self.contract;
        c.dividend_factor() * norm_pdf(d1) / (c.spot * c.volatility * c.expiry.sqrt())
    }

    /// Computes Vega per 1% volatility.
    ///
    /// Vega = S·e^(-qT)·φ(d₁)·√T / 100, the same for calls and puts and
    /// never negative. Multiply by 100 for the raw ∂V/∂σ.
    #[inline]
    pub fn vega(&self) -> f64 {
        let Some((d1, _)) = self.d1d2() else {
            return 0.0;
        };
        let c = &self.contract;
        c.spot * c.dividend_factor() * norm_pdf(d1) * c.expiry.sqrt() / PER_PERCENT
    }

    /// Computes Theta per calendar day.
    ///
    /// - Call: [-(S·e^(-qT)·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)] / 365
    /// - Put: [-(S·e^(-qT)·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)] / 365
    ///
    /// Usually negative (time decay).
    pub fn theta(&self, kind: OptionKind) -> f64 {
        let Some((d1, d2)) = self.d1d2() else {
            return 0.0;
        };
        let c = &self.contract;
        let forward_leg = c.spot * c.dividend_factor();
        let strike_leg = c.strike * c.discount_factor();

        let decay = -(forward_leg * norm_pdf(d1) * c.volatility) / (2.0 * c.expiry.sqrt());

        let annual = match kind {
            OptionKind::Call => {
                decay - c.rate * strike_leg * norm_cdf(d2)
                    + c.dividend_yield * forward_leg * norm_cdf(d1)
            }
            OptionKind::Put => {
                decay + c.rate * strike_leg * norm_cdf(-d2)
                    - c.dividend_yield * forward_leg * norm_cdf(-d1)
            }
        };
        annual / DAYS_PER_YEAR
    }

    /// Computes Rho per 1% rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂) / 100
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂) / 100
    #[inline]
    pub fn rho(&self, kind: OptionKind) -> f64 {
        let Some((_, d2)) = self.d1d2() else {
            return 0.0;
        };
        let c = &self.contract;
        let scaled = c.strike * c.expiry * c.discount_factor() / PER_PERCENT;
        match kind {
            OptionKind::Call => scaled * norm_cdf(d2),
            OptionKind::Put => -scaled * norm_cdf(-d2),
        }
    }

    /// Computes price and every Greek in one pass.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionContract, OptionKind};
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0));
    /// let greeks = bs.greeks(OptionKind::Put);
    /// assert!(greeks.delta < 0.0);
    /// assert!(greeks.gamma > 0.0);
    /// assert_eq!(greeks.price, bs.price(OptionKind::Put));
    /// ```
    pub fn greeks(&self, kind: OptionKind) -> Greeks {
        let Some((d1, d2)) = self.d1d2() else {
            return Greeks {
                price: self.contract.intrinsic(kind),
                ..Greeks::default()
            };
        };

        Greeks {
            price: self.price(kind),
            delta: self.delta(kind),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(kind),
            rho: self.rho(kind),
            d1,
            d2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn atm() -> OptionContract {
        OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0)
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(OptionContract::new(100.0, 105.0, 0.5, 0.05, 0.2, 0.01));
        let (d1, d2) = bs.d1d2().unwrap();
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_d1_includes_dividend_yield() {
        // ATM, r = q: drift reduces to σ²/2
        let bs = BlackScholes::new(OptionContract::new(100.0, 100.0, 1.0, 0.03, 0.2, 0.03));
        let (d1, _) = bs.d1d2().unwrap();
        assert_relative_eq!(d1, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1d2_none_for_degenerate() {
        for contract in [
            OptionContract { expiry: 0.0, ..atm() },
            OptionContract { volatility: 0.0, ..atm() },
            OptionContract { spot: 0.0, ..atm() },
            OptionContract { strike: -1.0, ..atm() },
        ] {
            assert!(BlackScholes::new(contract).d1d2().is_none());
        }
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, T=1, r=5%, σ=20%: C ≈ 10.4506
        let bs = BlackScholes::new(atm());
        assert_relative_eq!(bs.price(OptionKind::Call), 10.4506, epsilon = 1e-4);
    }

    #[test]
    fn test_put_price_reference_value() {
        // S=100, K=100, T=1, r=5%, σ=20%: P ≈ 5.5735
        let bs = BlackScholes::new(atm());
        assert_relative_eq!(bs.price(OptionKind::Put), 5.5735, epsilon = 1e-4);
    }

    #[test]
    fn test_price_with_dividend_yield_reference_value() {
        // S=100, K=95, T=0.5, r=3%, σ=25%, q=2%
        let bs = BlackScholes::new(OptionContract::new(100.0, 95.0, 0.5, 0.03, 0.25, 0.02));
        let call = bs.price(OptionKind::Call);
        let put = bs.price(OptionKind::Put);
        let parity = call - put - (100.0 * (-0.01_f64).exp() - 95.0 * (-0.015_f64).exp());
        assert!(parity.abs() < 1e-9);
        assert!(call > 5.0 && call < 15.0);
    }

    #[test]
    fn test_price_expiry_zero_is_intrinsic() {
        let itm = BlackScholes::new(OptionContract::new(110.0, 100.0, 0.0, 0.05, 0.2, 0.0));
        assert_eq!(itm.price(OptionKind::Call), 10.0);
        assert_eq!(itm.price(OptionKind::Put), 0.0);

        let otm = BlackScholes::new(OptionContract::new(90.0, 100.0, -1.0, 0.05, 0.2, 0.0));
        assert_eq!(otm.price(OptionKind::Call), 0.0);
        assert_eq!(otm.price(OptionKind::Put), 10.0);
    }

    #[test]
    fn test_price_zero_volatility_is_intrinsic() {
        let bs = BlackScholes::new(OptionContract::new(120.0, 100.0, 1.0, 0.05, 0.0, 0.0));
        assert_eq!(bs.price(OptionKind::Call), 20.0);
    }

    #[test]
    fn test_price_non_positive_spot_or_strike_is_finite() {
        let bs = BlackScholes::new(OptionContract::new(-5.0, 100.0, 1.0, 0.05, 0.2, 0.0));
        assert_eq!(bs.price(OptionKind::Call), 0.0);
        assert_eq!(bs.price(OptionKind::Put), 105.0);

        let bs = BlackScholes::new(OptionContract::new(100.0, 0.0, 1.0, 0.05, 0.2, 0.0));
        assert_eq!(bs.price(OptionKind::Call), 100.0);
    }

    #[test]
    fn test_price_approaches_intrinsic_near_expiry() {
        let t = 1e-8;
        let itm = BlackScholes::new(OptionContract::new(110.0, 100.0, t, 0.05, 0.2, 0.0));
        assert_relative_eq!(itm.price(OptionKind::Call), 10.0, epsilon = 1e-4);
        let otm = BlackScholes::new(OptionContract::new(90.0, 100.0, t, 0.05, 0.2, 0.0));
        assert_relative_eq!(otm.price(OptionKind::Call), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_deep_itm_call() {
        let bs = BlackScholes::new(OptionContract::new(200.0, 100.0, 1.0, 0.05, 0.2, 0.0));
        let forward_intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        // Residual is the deep OTM put value, below a tenth of a cent
        assert_relative_eq!(bs.price(OptionKind::Call), forward_intrinsic, epsilon = 1e-3);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        for strike in [60.0, 90.0, 100.0, 110.0, 160.0] {
            let bs = BlackScholes::new(OptionContract { strike, ..atm() });
            let call = bs.delta(OptionKind::Call);
            let put = bs.delta(OptionKind::Put);
            assert!((0.0..=1.0).contains(&call));
            assert!((-1.0..=0.0).contains(&put));
            // Call delta - put delta = e^(-qT)
            assert_relative_eq!(call - put, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_delta_near_expiry_limits() {
        let t = 1e-8;
        let itm = BlackScholes::new(OptionContract::new(110.0, 100.0, t, 0.05, 0.2, 0.0));
        assert_relative_eq!(itm.delta(OptionKind::Call), 1.0, epsilon = 1e-6);
        assert_relative_eq!(itm.delta(OptionKind::Put), 0.0, epsilon = 1e-6);

        let otm = BlackScholes::new(OptionContract::new(90.0, 100.0, t, 0.05, 0.2, 0.0));
        assert_relative_eq!(otm.delta(OptionKind::Call), 0.0, epsilon = 1e-6);
        assert_relative_eq!(otm.delta(OptionKind::Put), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let gamma_at = |strike: f64| BlackScholes::new(OptionContract { strike, ..atm() }).gamma();
        assert!(gamma_at(100.0) > gamma_at(70.0));
        assert!(gamma_at(100.0) > gamma_at(140.0));
    }

    #[test]
    fn test_theta_call_typically_negative() {
        let bs = BlackScholes::new(atm());
        assert!(bs.theta(OptionKind::Call) < 0.0);
        // ATM 1y call decays ≈ 6.41 per year
        assert_relative_eq!(bs.theta(OptionKind::Call) * 365.0, -6.414, epsilon = 1e-2);
    }

    #[test]
    fn test_rho_signs() {
        let bs = BlackScholes::new(atm());
        assert!(bs.rho(OptionKind::Call) > 0.0);
        assert!(bs.rho(OptionKind::Put) < 0.0);
    }

    #[test]
    fn test_degenerate_greeks_are_zero() {
        let bs = BlackScholes::new(OptionContract { expiry: 0.0, ..atm() });
        let greeks = bs.greeks(OptionKind::Call);
        assert_eq!(
            greeks,
            Greeks {
                price: 0.0,
                ..Greeks::default()
            }
        );

        let bs = BlackScholes::new(OptionContract { volatility: -0.2, spot: 120.0, ..atm() });
        let greeks = bs.greeks(OptionKind::Call);
        assert_eq!(greeks.price, 20.0);
        assert_eq!(greeks.delta, 0.0);
        assert_eq!(greeks.theta, 0.0);
    }

    #[test]
    fn test_greeks_bundle_matches_single_calls() {
        let bs = BlackScholes::new(OptionContract::new(105.0, 100.0, 0.75, 0.04, 0.3, 0.01));
        for kind in [OptionKind::Call, OptionKind::Put] {
            let greeks = bs.greeks(kind);
            assert_eq!(greeks.price, bs.price(kind));
            assert_eq!(greeks.delta, bs.delta(kind));
            assert_eq!(greeks.gamma, bs.gamma());
            assert_eq!(greeks.vega, bs.vega());
            assert_eq!(greeks.theta, bs.theta(kind));
            assert_eq!(greeks.rho, bs.rho(kind));
        }
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    fn call_price(contract: OptionContract) -> f64 {
        BlackScholes::new(contract).price(OptionKind::Call)
    }

    #[test]
    fn test_delta_vs_finite_diff() {
        let base = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.02);
        let h = 0.01;
        let fd = (call_price(OptionContract { spot: 100.0 + h, ..base })
            - call_price(OptionContract { spot: 100.0 - h, ..base }))
            / (2.0 * h);
        assert_relative_eq!(BlackScholes::new(base).delta(OptionKind::Call), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let base = atm();
        let h = 0.01;
        let fd = (call_price(OptionContract { spot: 100.0 + h, ..base }) - 2.0 * call_price(base)
            + call_price(OptionContract { spot: 100.0 - h, ..base }))
            / (h * h);
        assert_relative_eq!(BlackScholes::new(base).gamma(), fd, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let base = atm();
        let h = 0.001;
        let fd = (call_price(base.with_volatility(0.2 + h))
            - call_price(base.with_volatility(0.2 - h)))
            / (2.0 * h);
        assert_relative_eq!(BlackScholes::new(base).vega() * 100.0, fd, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        let base = OptionContract::new(100.0, 95.0, 1.0, 0.05, 0.2, 0.02);
        let h = 1e-4;
        // Theta is -∂V/∂T, quoted per day
        let fd = -(call_price(OptionContract { expiry: 1.0 + h, ..base })
            - call_price(OptionContract { expiry: 1.0 - h, ..base }))
            / (2.0 * h)
            / 365.0;
        assert_relative_eq!(BlackScholes::new(base).theta(OptionKind::Call), fd, epsilon = 1e-5);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let base = atm();
        let h = 0.0001;
        let fd = (call_price(OptionContract { rate: 0.05 + h, ..base })
            - call_price(OptionContract { rate: 0.05 - h, ..base }))
            / (2.0 * h);
        assert_relative_eq!(BlackScholes::new(base).rho(OptionKind::Call) * 100.0, fd, epsilon = 1e-3);
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    prop_compose! {
        fn valid_contract()(
            spot in 10.0_f64..500.0,
            moneyness in 0.5_f64..2.0,
            expiry in 0.01_f64..5.0,
            rate in -0.02_f64..0.10,
            volatility in 0.05_f64..1.0,
            dividend_yield in 0.0_f64..0.05,
        ) -> OptionContract {
            OptionContract::new(spot, spot * moneyness, expiry, rate, volatility, dividend_yield)
        }
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(contract in valid_contract()) {
            let bs = BlackScholes::new(contract);
            let lhs = bs.price(OptionKind::Put) + contract.spot * contract.dividend_factor();
            let rhs = bs.price(OptionKind::Call) + contract.strike * contract.discount_factor();
            prop_assert!((lhs - rhs).abs() < 1e-6 * contract.spot.max(1.0));
        }

        #[test]
        fn prop_gamma_and_vega_non_negative(contract in valid_contract()) {
            let bs = BlackScholes::new(contract);
            prop_assert!(bs.gamma() >= 0.0);
            prop_assert!(bs.vega() >= 0.0);
        }

        #[test]
        fn prop_prices_non_negative(contract in valid_contract()) {
            let bs = BlackScholes::new(contract);
            // Polynomial CDF error bounds how far below zero a worthless option can print
            prop_assert!(bs.price(OptionKind::Call) > -1e-5 * contract.spot);
            prop_assert!(bs.price(OptionKind::Put) > -1e-5 * contract.spot);
        }
    }
}
