//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Measures pricing throughput per payoff kind and the terminal-price
//! buffer fill across step counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_core::types::OptionContract;
use pricer_pricing::mc::{fill_terminal_prices, simulate_option, BarrierSpec, PayoffKind};
use pricer_pricing::rng::PricerRng;

const N_PATHS: usize = 10_000;

/// Benchmark each payoff kind at a fixed path and step count.
fn bench_simulate_option(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_option");
    group.throughput(Throughput::Elements(N_PATHS as u64));

    let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
    let barrier = BarrierSpec::new(130.0);

    for kind in PayoffKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| {
                simulate_option(
                    black_box(&contract),
                    kind,
                    barrier,
                    N_PATHS,
                    52,
                    &mut rng,
                )
            });
        });
    }

    group.finish();
}

/// Benchmark terminal-price generation across step counts.
fn bench_terminal_prices(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal_prices");
    group.throughput(Throughput::Elements(N_PATHS as u64));

    for n_steps in [1, 12, 252] {
        let mut buffer = vec![0.0; N_PATHS];
        group.bench_with_input(BenchmarkId::from_parameter(n_steps), &n_steps, |b, &n_steps| {
            let mut rng = PricerRng::from_seed(7);
            b.iter(|| {
                fill_terminal_prices(100.0, 0.08, 0.25, 1.0, n_steps, &mut buffer, &mut rng);
                black_box(buffer[0])
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulate_option, bench_terminal_prices);
criterion_main!(benches);
