//! European option contract description.
//!
//! [`OptionContract`] is a plain value constructed by the caller for a single
//! computation. It carries no identity and is never mutated by a pricer.

use super::error::PricingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exercise direction of a vanilla option.
///
/// Integer codes match the host call surface: `0` = call, `1` = put.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// assert_eq!(OptionKind::Call.code(), 0);
/// assert_eq!(OptionKind::try_from(1), Ok(OptionKind::Put));
/// assert!(OptionKind::try_from(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Returns the integer code used across the host boundary.
    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            OptionKind::Call => 0,
            OptionKind::Put => 1,
        }
    }

    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl TryFrom<i32> for OptionKind {
    type Error = PricingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OptionKind::Call),
            1 => Ok(OptionKind::Put),
            _ => Err(PricingError::UnknownKindCode {
                family: "option kind",
                code,
            }),
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

/// Parameters of a European option on a dividend-paying underlying.
///
/// # Fields
/// - `spot` (S): current underlying price
/// - `strike` (K): exercise price
/// - `expiry` (T): time to expiry in years
/// - `rate` (r): continuously compounded risk-free rate
/// - `volatility` (σ): annualised volatility
/// - `dividend_yield` (q): continuous dividend or carry yield
///
/// A contract with `T ≤ 0`, `σ ≤ 0`, `S ≤ 0` or `K ≤ 0` is *degenerate*:
/// pricers must not evaluate any logarithmic or diffusion term for it and
/// fall back to intrinsic value instead.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(110.0, 100.0, 0.0, 0.05, 0.2, 0.0);
/// assert!(contract.is_degenerate());
/// assert_eq!(contract.intrinsic(OptionKind::Call), 10.0);
/// assert_eq!(contract.intrinsic(OptionKind::Put), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionContract {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Risk-free interest rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Continuous dividend yield (q)
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
}

impl OptionContract {
    /// Creates a contract from its six scalar parameters.
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield,
        }
    }

    /// Returns a copy of the contract with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns true when closed-form terms are undefined for this contract.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.expiry <= 0.0 || self.volatility <= 0.0 || self.spot <= 0.0 || self.strike <= 0.0
    }

    /// Intrinsic value `max(S − K, 0)` or `max(K − S, 0)`.
    #[inline]
    pub fn intrinsic(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => (self.spot - self.strike).max(0.0),
            OptionKind::Put => (self.strike - self.spot).max(0.0),
        }
    }

    /// Risk-free discount factor `e^{−rT}`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Dividend discount factor `e^{−qT}`.
    #[inline]
    pub fn dividend_factor(&self) -> f64 {
        (-self.dividend_yield * self.expiry).exp()
    }

    /// Checks that every field is a finite number.
    ///
    /// Degenerate but finite contracts pass: they have a well-defined
    /// intrinsic fallback. Only NaN and infinities are rejected.
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` naming the first non-finite field
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("dividend_yield", self.dividend_yield),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kind_codes_round_trip() {
        assert_eq!(OptionKind::try_from(OptionKind::Call.code()), Ok(OptionKind::Call));
        assert_eq!(OptionKind::try_from(OptionKind::Put.code()), Ok(OptionKind::Put));
    }

    #[test]
    fn test_kind_unknown_code() {
        match OptionKind::try_from(-1) {
            Err(PricingError::UnknownKindCode { code, .. }) => assert_eq!(code, -1),
            other => panic!("Expected UnknownKindCode, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_guards() {
        let base = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
        assert!(!base.is_degenerate());
        assert!(OptionContract { expiry: 0.0, ..base }.is_degenerate());
        assert!(OptionContract { volatility: -0.1, ..base }.is_degenerate());
        assert!(OptionContract { spot: 0.0, ..base }.is_degenerate());
        assert!(OptionContract { strike: -5.0, ..base }.is_degenerate());
    }

    #[test]
    fn test_intrinsic_values() {
        let contract = OptionContract::new(90.0, 100.0, 1.0, 0.05, 0.2, 0.0);
        assert_eq!(contract.intrinsic(OptionKind::Call), 0.0);
        assert_eq!(contract.intrinsic(OptionKind::Put), 10.0);
    }

    #[test]
    fn test_discount_factors() {
        let contract = OptionContract::new(100.0, 100.0, 2.0, 0.05, 0.2, 0.01);
        assert_relative_eq!(contract.discount_factor(), (-0.1_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(contract.dividend_factor(), (-0.02_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_with_volatility_keeps_other_fields() {
        let contract = OptionContract::new(100.0, 95.0, 0.5, 0.03, 0.2, 0.01);
        let bumped = contract.with_volatility(0.35);
        assert_eq!(bumped.volatility, 0.35);
        assert_eq!(bumped.strike, 95.0);
        assert_eq!(bumped.dividend_yield, 0.01);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let contract = OptionContract::new(100.0, f64::NAN, 1.0, 0.05, 0.2, 0.0);
        let err = contract.validate().unwrap_err();
        assert!(err.to_string().contains("strike"));
    }

    #[test]
    fn test_validate_accepts_degenerate_finite() {
        let contract = OptionContract::new(100.0, 100.0, 0.0, 0.05, 0.0, 0.0);
        assert!(contract.validate().is_ok());
    }
}
