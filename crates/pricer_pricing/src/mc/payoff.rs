//! Payoff kinds and barrier specification for the Monte Carlo engine.

use pricer_core::types::{OptionKind, PricingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terminal statistic a simulated path is paid on.
///
/// Integer codes match the host call surface:
///
/// | Code | Kind | Payoff |
/// |---|---|---|
/// | 0 | `Call` | `max(S_T − K, 0)` |
/// | 1 | `Put` | `max(K − S_T, 0)` |
/// | 2 | `AsianCall` | `max(A − K, 0)` |
/// | 3 | `AsianPut` | `max(K − A, 0)` |
/// | 4 | `BarrierUpAndOutCall` | `max(S_T − K, 0)` unless knocked out |
///
/// `A` is the arithmetic mean of the path including its starting price.
///
/// # Examples
/// ```
/// use pricer_pricing::mc::PayoffKind;
///
/// assert_eq!(PayoffKind::try_from(2), Ok(PayoffKind::AsianCall));
/// assert!(PayoffKind::try_from(5).is_err());
/// assert_eq!(PayoffKind::BarrierUpAndOutCall.code(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PayoffKind {
    /// European call on the terminal price.
    Call,
    /// European put on the terminal price.
    Put,
    /// Arithmetic-average call.
    AsianCall,
    /// Arithmetic-average put.
    AsianPut,
    /// Up-and-out barrier call.
    BarrierUpAndOutCall,
}

impl PayoffKind {
    /// Every kind, in code order.
    pub const ALL: [PayoffKind; 5] = [
        PayoffKind::Call,
        PayoffKind::Put,
        PayoffKind::AsianCall,
        PayoffKind::AsianPut,
        PayoffKind::BarrierUpAndOutCall,
    ];

    /// Returns the integer code used across the host boundary.
    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            PayoffKind::Call => 0,
            PayoffKind::Put => 1,
            PayoffKind::AsianCall => 2,
            PayoffKind::AsianPut => 3,
            PayoffKind::BarrierUpAndOutCall => 4,
        }
    }

    /// Returns true for the arithmetic-average variants.
    #[inline]
    pub fn is_asian(&self) -> bool {
        matches!(self, PayoffKind::AsianCall | PayoffKind::AsianPut)
    }

    /// Returns true if paths are monitored against a barrier.
    #[inline]
    pub fn is_barrier(&self) -> bool {
        matches!(self, PayoffKind::BarrierUpAndOutCall)
    }

    /// Payoff of one surviving path.
    ///
    /// # Arguments
    /// * `terminal` - Final path price
    /// * `average` - Arithmetic mean of the path including its start
    /// * `strike` - Strike price
    #[inline]
    pub fn payoff(&self, terminal: f64, average: f64, strike: f64) -> f64 {
        match self {
            PayoffKind::Call | PayoffKind::BarrierUpAndOutCall => (terminal - strike).max(0.0),
            PayoffKind::Put => (strike - terminal).max(0.0),
            PayoffKind::AsianCall => (average - strike).max(0.0),
            PayoffKind::AsianPut => (strike - average).max(0.0),
        }
    }
}

impl From<OptionKind> for PayoffKind {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Call => PayoffKind::Call,
            OptionKind::Put => PayoffKind::Put,
        }
    }
}

impl TryFrom<i32> for PayoffKind {
    type Error = PricingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        PayoffKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(PricingError::UnknownKindCode {
                family: "payoff kind",
                code,
            })
    }
}

impl std::fmt::Display for PayoffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PayoffKind::Call => "call",
            PayoffKind::Put => "put",
            PayoffKind::AsianCall => "asian-call",
            PayoffKind::AsianPut => "asian-put",
            PayoffKind::BarrierUpAndOutCall => "barrier-up-and-out",
        };
        f.write_str(name)
    }
}

/// Optional up-and-out barrier level.
///
/// Only [`PayoffKind::BarrierUpAndOutCall`] consults it. A non-positive or
/// non-finite level disables monitoring.
///
/// # Examples
/// ```
/// use pricer_pricing::mc::BarrierSpec;
///
/// let barrier = BarrierSpec::new(120.0);
/// assert!(barrier.is_breached(120.0));
/// assert!(!barrier.is_breached(119.9));
///
/// assert!(!BarrierSpec::new(0.0).is_active());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarrierSpec {
    level: Option<f64>,
}

impl BarrierSpec {
    /// Barrier at `level`; disabled unless `level` is positive and finite.
    #[inline]
    pub fn new(level: f64) -> Self {
        Self {
            level: (level > 0.0 && level.is_finite()).then_some(level),
        }
    }

    /// No barrier.
    #[inline]
    pub fn none() -> Self {
        Self { level: None }
    }

    /// Returns the active level, if any.
    #[inline]
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Returns true if a level is set.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.level.is_some()
    }

    /// Returns true if `price` reaches or exceeds the level.
    #[inline]
    pub fn is_breached(&self, price: f64) -> bool {
        self.level.is_some_and(|level| price >= level)
    }
}
