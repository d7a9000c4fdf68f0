//! Monte Carlo entry points, driven by the calling thread's generator.

use pricer_core::types::OptionContract;
use pricer_pricing::mc::{self, fill_terminal_prices, BarrierSpec, PayoffKind};
use pricer_pricing::rng::with_thread_rng;

/// Clamps a host-supplied count to at least one.
#[inline]
fn at_least_one(count: i32) -> usize {
    count.max(1) as usize
}

/// Discounted Monte Carlo price of a vanilla, Asian or barrier payoff.
///
/// `kind` is a payoff code in `0..=4`; any other code prices at `0.0`, as
/// does `sim_count < 1`. `step_count < 1` is treated as one step. `barrier`
/// only applies to code 4 and is disabled unless positive.
#[allow(clippy::too_many_arguments)]
pub fn simulate_option(
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
    q: f64,
    kind: i32,
    barrier: f64,
    sim_count: i32,
    step_count: i32,
) -> f64 {
    let Ok(payoff) = PayoffKind::try_from(kind) else {
        tracing::trace!(kind, "unknown payoff code; pricing at zero");
        return 0.0;
    };
    if sim_count < 1 {
        return 0.0;
    }

    let contract = OptionContract::new(s, k, t, r, sigma, q);
    let n_steps = at_least_one(step_count);
    with_thread_rng(|rng| {
        mc::simulate_option(
            &contract,
            payoff,
            BarrierSpec::new(barrier),
            sim_count as usize,
            n_steps,
            rng,
        )
        .price
    })
}

/// Writes real-world terminal GBM prices into the front of `output`.
///
/// Exactly `min(sim_count, output.len())` slots are written; the rest of the
/// buffer is left untouched and it is never resized. With `sigma = 0` every
/// written slot is the deterministic forward `s0·e^{mu·t}`.
pub fn final_prices(
    s0: f64,
    mu: f64,
    sigma: f64,
    t: f64,
    step_count: i32,
    sim_count: i32,
    output: &mut [f64],
) {
    let n = (sim_count.max(0) as usize).min(output.len());
    if n == 0 {
        return;
    }
    let n_steps = at_least_one(step_count);
    with_thread_rng(|rng| fill_terminal_prices(s0, mu, sigma, t, n_steps, &mut output[..n], rng));
}
