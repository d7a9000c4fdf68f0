//! Implied volatility by bounded Newton-Raphson.
//!
//! Inverts [`BlackScholes::price`] in σ. The iteration starts at 20%, clamps
//! every iterate into `[0.001, 20.0]` and stops after at most 100 steps. It
//! never fails: the last iterate is returned whether or not the price
//! residual reached `1e-8`.

use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, Termination};
use pricer_core::types::{OptionContract, OptionKind};

use super::black_scholes::BlackScholes;

/// Starting volatility guess.
pub const INITIAL_VOLATILITY: f64 = 0.20;
/// Lower clamp for iterates.
pub const MIN_VOLATILITY: f64 = 0.001;
/// Upper clamp for iterates.
pub const MAX_VOLATILITY: f64 = 20.0;
/// Price residual accepted as converged.
pub const PRICE_TOLERANCE: f64 = 1e-8;
/// Raw vega below which no step is taken.
pub const VEGA_FLOOR: f64 = 1e-10;
/// Iteration cap.
pub const MAX_ITERATIONS: usize = 100;

/// Implied volatility together with solver diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolResult {
    /// Best volatility estimate reached.
    pub volatility: f64,
    /// Number of price evaluations performed.
    pub iterations: usize,
    /// Why the iteration stopped.
    pub termination: Termination,
}

impl ImpliedVolResult {
    /// Returns true if the price residual fell below tolerance.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Solves for the volatility that reproduces `market_price`.
///
/// The contract's own `volatility` field is ignored.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
/// use pricer_models::analytical::{implied_volatility, BlackScholes};
///
/// let contract = OptionContract::new(100.0, 110.0, 0.5, 0.03, 0.35, 0.0);
/// let market = BlackScholes::new(contract).price(OptionKind::Call);
///
/// let sigma = implied_volatility(market, &contract, OptionKind::Call);
/// assert!((sigma - 0.35).abs() < 1e-4);
/// ```
pub fn implied_volatility(market_price: f64, contract: &OptionContract, kind: OptionKind) -> f64 {
    implied_volatility_detailed(market_price, contract, kind).volatility
}

/// Same as [`implied_volatility`] but reports iterations and termination.
pub fn implied_volatility_detailed(
    market_price: f64,
    contract: &OptionContract,
    kind: OptionKind,
) -> ImpliedVolResult {
    let solver = NewtonRaphsonSolver::new(SolverConfig::new(
        PRICE_TOLERANCE,
        MAX_ITERATIONS,
        VEGA_FLOOR,
    ));

    let engine_at = |sigma: f64| BlackScholes::new(contract.with_volatility(sigma));
    let residual = |sigma: f64| engine_at(sigma).price(kind) - market_price;
    // Vega is quoted per 1%; undo the scaling for the true dP/dσ
    let raw_vega = |sigma: f64| engine_at(sigma).vega() * 100.0;

    let outcome = solver.find_root_bounded(
        residual,
        raw_vega,
        INITIAL_VOLATILITY,
        MIN_VOLATILITY,
        MAX_VOLATILITY,
    );

    if !outcome.converged() {
        tracing::debug!(
            market_price,
            kind = %kind,
            volatility = outcome.root,
            iterations = outcome.iterations,
            termination = ?outcome.termination,
            "implied volatility did not reach price tolerance"
        );
    }

    ImpliedVolResult {
        volatility: outcome.root,
        iterations: outcome.iterations,
        termination: outcome.termination,
    }
}
