//! Monte Carlo pricing engine.
//!
//! [`simulate_option`] prices one contract by simulating independent
//! risk-neutral GBM paths. Knocked-out barrier paths are removed from both
//! the payoff sum and the path count, so they never dilute the average
//! towards zero. If every path knocks out the price is `0.0`.
//!
//! [`MonteCarloPricer`] binds a validated [`SimulationConfig`] to an owned
//! normal source for repeated runs.

use pricer_core::types::OptionContract;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::SimulationConfig;
use super::paths::{fill_terminal_prices, GbmStepper, TerminalDistribution};
use super::payoff::{BarrierSpec, PayoffKind};
use crate::rng::{NormalSource, PricerRng};

/// Result of a Monte Carlo pricing run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingResult {
    /// Discounted mean payoff over surviving paths.
    pub price: f64,
    /// Discounted standard error of the mean (0 with fewer than two survivors).
    pub std_error: f64,
    /// Paths that were not knocked out.
    pub surviving_paths: usize,
    /// Paths simulated.
    pub total_paths: usize,
}

impl PricingResult {
    /// Half-width of the 95% confidence interval.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Fraction of paths removed by the barrier.
    #[inline]
    pub fn knockout_ratio(&self) -> f64 {
        if self.total_paths == 0 {
            return 0.0;
        }
        1.0 - self.surviving_paths as f64 / self.total_paths as f64
    }
}

/// Prices `contract` over `n_paths` paths of `n_steps` steps each.
///
/// Per-step drift `(r − q − σ²/2)·dt` and diffusion `σ·√dt` use
/// `dt = T / n_steps`; the mean surviving payoff is discounted by `e^{−rT}`.
/// A barrier path stops simulating at the first step whose price reaches
/// the level. `barrier` is ignored for non-barrier kinds.
///
/// Zero paths price at `0.0`; zero steps are treated as one; a negative
/// expiry is treated as zero.
///
/// # Example
///
/// ```rust
/// use pricer_core::types::OptionContract;
/// use pricer_pricing::mc::{simulate_option, BarrierSpec, PayoffKind};
/// use pricer_pricing::rng::PricerRng;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// let mut rng = PricerRng::from_seed(42);
///
/// let result = simulate_option(
///     &contract,
///     PayoffKind::Call,
///     BarrierSpec::none(),
///     50_000,
///     1,
///     &mut rng,
/// );
/// assert!((result.price - 10.45).abs() < 4.0 * result.std_error + 0.05);
/// ```
pub fn simulate_option<S: NormalSource>(
    contract: &OptionContract,
    kind: PayoffKind,
    barrier: BarrierSpec,
    n_paths: usize,
    n_steps: usize,
    source: &mut S,
) -> PricingResult {
    let n_steps = n_steps.max(1);
    let contract = OptionContract {
        expiry: contract.expiry.max(0.0),
        ..*contract
    };
    let stepper = GbmStepper::risk_neutral(&contract, n_steps);
    let discount = contract.discount_factor();
    let barrier = if kind.is_barrier() {
        barrier
    } else {
        BarrierSpec::none()
    };

    let mut payoff_sum = 0.0;
    let mut payoff_sq_sum = 0.0;
    let mut surviving = 0_usize;

    for _ in 0..n_paths {
        let mut price = contract.spot;
        let mut path_sum = price;
        let mut knocked_out = false;

        for _ in 0..n_steps {
            price = stepper.advance(price, source);
            path_sum += price;
            if barrier.is_breached(price) {
                knocked_out = true;
                break;
            }
        }
        if knocked_out {
            continue;
        }

        let average = path_sum / (n_steps + 1) as f64;
        let payoff = kind.payoff(price, average, contract.strike);
        payoff_sum += payoff;
        payoff_sq_sum += payoff * payoff;
        surviving += 1;
    }

    if surviving == 0 {
        if n_paths > 0 {
            tracing::debug!(
                kind = %kind,
                barrier = ?barrier.level(),
                n_paths,
                "every path knocked out; pricing at zero"
            );
        }
        return PricingResult {
            total_paths: n_paths,
            ..PricingResult::default()
        };
    }

    let count = surviving as f64;
    let mean = payoff_sum / count;
    let std_error = if surviving > 1 {
        let variance = ((payoff_sq_sum - count * mean * mean) / (count - 1.0)).max(0.0);
        discount * (variance / count).sqrt()
    } else {
        0.0
    };

    let result = PricingResult {
        price: discount * mean,
        std_error,
        surviving_paths: surviving,
        total_paths: n_paths,
    };
    tracing::trace!(
        kind = %kind,
        price = result.price,
        std_error = result.std_error,
        surviving = result.surviving_paths,
        "monte carlo run complete"
    );
    result
}

/// Monte Carlo pricer bound to a configuration and a normal source.
///
/// # Example
///
/// ```rust
/// use pricer_core::types::OptionContract;
/// use pricer_pricing::mc::{BarrierSpec, MonteCarloPricer, PayoffKind, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(20_000)
///     .n_steps(12)
///     .seed(7)
///     .build()
///     .unwrap();
/// let mut pricer = MonteCarloPricer::new(config);
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// let asian = pricer.simulate_option(&contract, PayoffKind::AsianCall, BarrierSpec::none());
/// let vanilla = pricer.simulate_option(&contract, PayoffKind::Call, BarrierSpec::none());
///
/// // Averaging dampens volatility
/// assert!(asian.price < vanilla.price);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloPricer<S: NormalSource = PricerRng> {
    config: SimulationConfig,
    source: S,
}

impl MonteCarloPricer<PricerRng> {
    /// Creates a pricer with its own [`PricerRng`].
    ///
    /// Uses the configured seed, or operating-system entropy when none is set.
    pub fn new(config: SimulationConfig) -> Self {
        let source = match config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        };
        Self { config, source }
    }

    /// Restarts the generator from `seed`.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.source = PricerRng::from_seed(seed);
    }

    /// Seed of the current generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: NormalSource> MonteCarloPricer<S> {
    /// Creates a pricer drawing from an injected source.
    pub fn with_source(config: SimulationConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Prices `contract` with the configured path and step counts.
    pub fn simulate_option(
        &mut self,
        contract: &OptionContract,
        kind: PayoffKind,
        barrier: BarrierSpec,
    ) -> PricingResult {
        simulate_option(
            contract,
            kind,
            barrier,
            self.config.n_paths(),
            self.config.n_steps(),
            &mut self.source,
        )
    }

    /// Fills `output` with real-world terminal prices using the configured step count.
    pub fn terminal_prices(
        &mut self,
        spot: f64,
        mu: f64,
        sigma: f64,
        expiry: f64,
        output: &mut [f64],
    ) {
        fill_terminal_prices(
            spot,
            mu,
            sigma,
            expiry,
            self.config.n_steps(),
            output,
            &mut self.source,
        );
    }

    /// Simulates `n_paths` real-world terminal prices and summarises them.
    pub fn terminal_distribution(
        &mut self,
        spot: f64,
        mu: f64,
        sigma: f64,
        expiry: f64,
    ) -> Option<TerminalDistribution> {
        let mut prices = vec![0.0; self.config.n_paths()];
        self.terminal_prices(spot, mu, sigma, expiry, &mut prices);
        TerminalDistribution::from_prices(spot, &prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm() -> OptionContract {
        OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0)
    }

    fn seeded(n_paths: usize, n_steps: usize, seed: u64) -> MonteCarloPricer {
        let config = SimulationConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloPricer::new(config)
    }

    #[test]
    fn test_same_seed_reproducible() {
        let a = seeded(5_000, 10, 99).simulate_option(&atm(), PayoffKind::Put, BarrierSpec::none());
        let b = seeded(5_000, 10, 99).simulate_option(&atm(), PayoffKind::Put, BarrierSpec::none());
        assert_eq!(a, b);
    }

    #[test]
    fn test_reset_with_seed_replays() {
        let mut pricer = seeded(2_000, 5, 1);
        let first = pricer.simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none());
        pricer.reset_with_seed(1);
        let again = pricer.simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none());
        assert_eq!(first, again);
        assert_eq!(pricer.seed(), 1);
    }

    #[test]
    fn test_zero_paths_prices_zero() {
        let mut rng = PricerRng::from_seed(0);
        let result = simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none(), 0, 10, &mut rng);
        assert_eq!(result, PricingResult::default());
    }

    #[test]
    fn test_zero_volatility_is_discounted_forward_intrinsic() {
        let contract = OptionContract::new(100.0, 90.0, 1.0, 0.05, 0.0, 0.0);
        let mut rng = PricerRng::from_seed(0);
        let result = simulate_option(&contract, PayoffKind::Call, BarrierSpec::none(), 10, 4, &mut rng);
        let expected = (-0.05_f64).exp() * (100.0 * 0.05_f64.exp() - 90.0);
        assert_relative_eq!(result.price, expected, epsilon = 1e-10);
        assert!(result.std_error < 1e-9);
    }

    #[test]
    fn test_expired_contract_is_intrinsic() {
        let contract = OptionContract::new(100.0, 90.0, -1.0, 0.05, 0.2, 0.0);
        let mut rng = PricerRng::from_seed(0);
        let call = simulate_option(&contract, PayoffKind::Call, BarrierSpec::none(), 10, 4, &mut rng);
        assert_eq!(call.price, 10.0);
    }

    #[test]
    fn test_barrier_below_spot_knocks_everything_out() {
        // Barrier at spot/1000: no step can land below it with σ = 20%
        let mut rng = PricerRng::from_seed(3);
        let result = simulate_option(
            &atm(),
            PayoffKind::BarrierUpAndOutCall,
            BarrierSpec::new(0.1),
            1_000,
            10,
            &mut rng,
        );
        assert_eq!(result.price, 0.0);
        assert_eq!(result.surviving_paths, 0);
        assert_eq!(result.total_paths, 1_000);
        assert_eq!(result.knockout_ratio(), 1.0);
    }

    #[test]
    fn test_barrier_ignored_for_vanilla_kinds() {
        let barrier = BarrierSpec::new(0.1);
        let with = seeded(3_000, 4, 5).simulate_option(&atm(), PayoffKind::Call, barrier);
        let without = seeded(3_000, 4, 5).simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none());
        assert_eq!(with, without);
        assert_eq!(with.surviving_paths, 3_000);
    }

    #[test]
    fn test_disabled_barrier_matches_vanilla_call() {
        let barrier = seeded(3_000, 4, 8).simulate_option(
            &atm(),
            PayoffKind::BarrierUpAndOutCall,
            BarrierSpec::new(-1.0),
        );
        let vanilla = seeded(3_000, 4, 8).simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none());
        assert_eq!(barrier, vanilla);
    }

    #[test]
    fn test_barrier_survivors_never_exceed_level() {
        // Survivors finish below the barrier, so payoff ≤ barrier − strike
        let contract = atm();
        let result = seeded(20_000, 50, 21).simulate_option(
            &contract,
            PayoffKind::BarrierUpAndOutCall,
            BarrierSpec::new(120.0),
        );
        assert!(result.surviving_paths > 0);
        assert!(result.surviving_paths < 20_000);
        assert!(result.price <= 20.0 * contract.discount_factor());
    }

    #[test]
    fn test_asian_below_vanilla() {
        let mut pricer = seeded(50_000, 12, 4);
        let asian = pricer.simulate_option(&atm(), PayoffKind::AsianCall, BarrierSpec::none());
        let vanilla = pricer.simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none());
        assert!(asian.price < vanilla.price);
    }

    #[test]
    fn test_terminal_distribution_zero_volatility() {
        let mut pricer = seeded(100, 10, 2);
        let summary = pricer.terminal_distribution(50.0, 0.1, 0.0, 1.0).unwrap();
        let expected = 50.0 * 0.1_f64.exp();
        assert_relative_eq!(summary.p5, expected, max_relative = 1e-12);
        assert_relative_eq!(summary.p95, expected, max_relative = 1e-12);
        assert!(summary.std_dev < 1e-9);
        assert_eq!(summary.count, 100);
    }

    #[test]
    fn test_with_source_uses_injected_generator() {
        let config = SimulationConfig::new(1_000, 2).unwrap();
        let mut rng = PricerRng::from_seed(77);
        let injected = MonteCarloPricer::with_source(config, &mut rng)
            .simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none());
        let direct = seeded(1_000, 2, 77).simulate_option(&atm(), PayoffKind::Call, BarrierSpec::none());
        assert_eq!(injected, direct);
    }
}
