//! Valuation of a book of European option positions.
//!
//! [`value_book`] prices every position in closed form with its Greeks;
//! [`simulate_book`] prices the same book by Monte Carlo. Both fan out
//! across the Rayon pool through [`parallel_map_indexed`], and every figure
//! in a [`BookSummary`] is weighted by position quantity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::types::{OptionContract, OptionKind};
use pricer_models::analytical::{BlackScholes, Greeks};
use pricer_pricing::mc::{simulate_option, BarrierSpec, PayoffKind, PricingResult, SimulationConfig};
use pricer_pricing::rng::{with_thread_rng, PricerRng};

use super::{parallel_map_indexed, parallel_reduce, ParallelConfig};

/// A signed holding of one European option.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Free-form identifier used in reports.
    pub id: String,
    /// Contract terms and market inputs.
    pub contract: OptionContract,
    /// Call or put.
    pub kind: OptionKind,
    /// Number of contracts; negative for short positions.
    pub quantity: f64,
}

impl Position {
    /// Creates a position.
    pub fn new(id: impl Into<String>, contract: OptionContract, kind: OptionKind, quantity: f64) -> Self {
        Self {
            id: id.into(),
            contract,
            kind,
            quantity,
        }
    }
}

/// Closed-form valuation of one position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionValuation {
    /// Identifier of the valued position.
    pub id: String,
    /// Quantity held.
    pub quantity: f64,
    /// Per-contract price and Greeks.
    pub greeks: Greeks,
}

impl PositionValuation {
    /// Quantity-weighted value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.quantity * self.greeks.price
    }
}

/// Quantity-weighted totals over a book.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookSummary {
    /// Number of positions aggregated.
    pub positions: usize,
    /// Σ quantity · price
    pub value: f64,
    /// Σ quantity · delta
    pub delta: f64,
    /// Σ quantity · gamma
    pub gamma: f64,
    /// Σ quantity · vega (per 1% volatility)
    pub vega: f64,
    /// Σ quantity · theta (per calendar day)
    pub theta: f64,
    /// Σ quantity · rho (per 1% rate)
    pub rho: f64,
}

impl BookSummary {
    fn of_position(valuation: &PositionValuation) -> Self {
        let q = valuation.quantity;
        let g = &valuation.greeks;
        Self {
            positions: 1,
            value: q * g.price,
            delta: q * g.delta,
            gamma: q * g.gamma,
            vega: q * g.vega,
            theta: q * g.theta,
            rho: q * g.rho,
        }
    }

    fn combine(self, other: Self) -> Self {
        Self {
            positions: self.positions + other.positions,
            value: self.value + other.value,
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            vega: self.vega + other.vega,
            theta: self.theta + other.theta,
            rho: self.rho + other.rho,
        }
    }
}

/// Per-position valuations and their aggregate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookValuation {
    /// One entry per input position, in input order.
    pub positions: Vec<PositionValuation>,
    /// Quantity-weighted totals.
    pub summary: BookSummary,
}

/// Prices every position in closed form and aggregates the Greeks.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
/// use pricer_risk::parallel::{value_book, ParallelConfig, Position};
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// let book = [
///     Position::new("long-call", contract, OptionKind::Call, 10.0),
///     Position::new("short-put", contract, OptionKind::Put, -10.0),
/// ];
///
/// let valuation = value_book(&book, &ParallelConfig::default());
/// assert_eq!(valuation.summary.positions, 2);
/// // A synthetic forward has unit delta per contract
/// assert!((valuation.summary.delta - 10.0).abs() < 1e-9);
/// ```
pub fn value_book(positions: &[Position], config: &ParallelConfig) -> BookValuation {
    let valuations = parallel_map_indexed(positions, config, |_, position| PositionValuation {
        id: position.id.clone(),
        quantity: position.quantity,
        greeks: BlackScholes::new(position.contract).greeks(position.kind),
    });
    let summary = parallel_reduce(
        &valuations,
        BookSummary::default(),
        BookSummary::of_position,
        BookSummary::combine,
    );
    tracing::debug!(
        positions = summary.positions,
        value = summary.value,
        delta = summary.delta,
        "valued book in closed form"
    );
    BookValuation {
        positions: valuations,
        summary,
    }
}

/// Monte Carlo valuation of one position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulatedPosition {
    /// Identifier of the valued position.
    pub id: String,
    /// Quantity held.
    pub quantity: f64,
    /// Per-contract Monte Carlo result.
    pub result: PricingResult,
}

impl SimulatedPosition {
    /// Quantity-weighted value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.quantity * self.result.price
    }
}

/// Monte Carlo valuation of a whole book.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulatedBook {
    /// One entry per input position, in input order.
    pub positions: Vec<SimulatedPosition>,
    /// Σ quantity · price
    pub value: f64,
    /// Standard error of `value`, treating positions as independent runs.
    pub std_error: f64,
}

/// Prices every position by Monte Carlo.
///
/// With a seed in `simulation`, position `i` draws from its own generator
/// seeded with `seed + i`, so the result does not depend on how Rayon
/// schedules the work. Without one, each worker thread uses its own
/// entropy-seeded generator via [`with_thread_rng`].
pub fn simulate_book(
    positions: &[Position],
    simulation: &SimulationConfig,
    config: &ParallelConfig,
) -> SimulatedBook {
    let n_paths = simulation.n_paths();
    let n_steps = simulation.n_steps();

    let simulated = parallel_map_indexed(positions, config, |index, position| {
        let price = |rng: &mut PricerRng| {
            simulate_option(
                &position.contract,
                PayoffKind::from(position.kind),
                BarrierSpec::none(),
                n_paths,
                n_steps,
                rng,
            )
        };
        let result = match simulation.seed() {
            Some(seed) => price(&mut PricerRng::from_seed(seed.wrapping_add(index as u64))),
            None => with_thread_rng(price),
        };
        SimulatedPosition {
            id: position.id.clone(),
            quantity: position.quantity,
            result,
        }
    });

    let value = simulated.iter().map(SimulatedPosition::value).sum();
    let variance: f64 = simulated
        .iter()
        .map(|p| (p.quantity * p.result.std_error).powi(2))
        .sum();

    tracing::debug!(
        positions = simulated.len(),
        n_paths,
        n_steps,
        value,
        "valued book by Monte Carlo"
    );

    SimulatedBook {
        positions: simulated,
        value,
        std_error: variance.sqrt(),
    }
}
