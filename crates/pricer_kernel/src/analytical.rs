//! Closed-form entry points.

use pricer_core::types::{OptionContract, OptionKind};
use pricer_models::analytical::{self, BlackScholes};

#[inline]
fn engine(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> BlackScholes {
    BlackScholes::new(OptionContract::new(s, k, t, r, sigma, q))
}

/// Black-Scholes call price; intrinsic value for a degenerate contract.
pub fn call_price(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).price(OptionKind::Call)
}

/// Black-Scholes put price; intrinsic value for a degenerate contract.
pub fn put_price(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).price(OptionKind::Put)
}

/// Call delta `e^{−qT}·N(d1)`.
pub fn delta_call(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).delta(OptionKind::Call)
}

/// Put delta `−e^{−qT}·N(−d1)`.
pub fn delta_put(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).delta(OptionKind::Put)
}

/// Gamma, identical for calls and puts.
pub fn gamma(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).gamma()
}

/// Vega per one percentage point of volatility.
pub fn vega(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).vega()
}

/// Call theta per calendar day.
pub fn theta_call(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).theta(OptionKind::Call)
}

/// Put theta per calendar day.
pub fn theta_put(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).theta(OptionKind::Put)
}

/// Call rho per one percentage point of rate.
pub fn rho_call(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).rho(OptionKind::Call)
}

/// Put rho per one percentage point of rate.
pub fn rho_put(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> f64 {
    engine(s, k, t, r, sigma, q).rho(OptionKind::Put)
}

/// Volatility reproducing `market_price`.
///
/// `kind` 0 selects a call; every other code selects a put. Never fails:
/// the bounded Newton iterate in `[0.001, 20.0]` is returned whether or not
/// the price tolerance was met.
pub fn implied_volatility(
    market_price: f64,
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    q: f64,
    kind: i32,
) -> f64 {
    let kind = if kind == 0 {
        OptionKind::Call
    } else {
        OptionKind::Put
    };
    // Volatility is the unknown; the placeholder is ignored by the solver
    let contract = OptionContract::new(s, k, t, r, 0.0, q);
    analytical::implied_volatility(market_price, &contract, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_prices() {
        assert_relative_eq!(call_price(100.0, 100.0, 1.0, 0.05, 0.2, 0.0), 10.4506, epsilon = 1e-4);
        assert_relative_eq!(put_price(100.0, 100.0, 1.0, 0.05, 0.2, 0.0), 5.5735, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_inputs_fall_back() {
        assert_eq!(call_price(110.0, 100.0, 0.0, 0.05, 0.2, 0.0), 10.0);
        assert_eq!(put_price(90.0, 100.0, 1.0, 0.05, 0.0, 0.0), 10.0);
        assert_eq!(call_price(0.0, 100.0, 1.0, 0.05, 0.2, 0.0), 0.0);
        assert_eq!(delta_call(100.0, 100.0, -1.0, 0.05, 0.2, 0.0), 0.0);
        assert_eq!(gamma(100.0, 100.0, 1.0, 0.05, 0.0, 0.0), 0.0);
        assert_eq!(vega(100.0, 100.0, 0.0, 0.05, 0.2, 0.0), 0.0);
        assert_eq!(theta_put(100.0, 100.0, 0.0, 0.05, 0.2, 0.0), 0.0);
        assert_eq!(rho_call(100.0, 100.0, 0.0, 0.05, 0.2, 0.0), 0.0);
    }

    #[test]
    fn test_delta_spread_is_dividend_factor() {
        let spread = delta_call(100.0, 95.0, 0.5, 0.03, 0.25, 0.02)
            - delta_put(100.0, 95.0, 0.5, 0.03, 0.25, 0.02);
        assert_relative_eq!(spread, (-0.02_f64 * 0.5).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_implied_vol_kind_codes() {
        let put = put_price(100.0, 110.0, 0.75, 0.02, 0.3, 0.0);
        for code in [1, 7, -3] {
            assert_relative_eq!(
                implied_volatility(put, 100.0, 110.0, 0.75, 0.02, 0.0, code),
                0.3,
                epsilon = 1e-6
            );
        }
    }
}
