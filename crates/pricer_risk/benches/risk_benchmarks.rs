//! Criterion benchmarks for VaR estimation and book valuation.
//!
//! Benchmarks cover:
//! - Historical VaR across sample sizes (dominated by the sort)
//! - Simulated VaR across horizons
//! - Closed-form book valuation, sequential versus Rayon

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_core::types::{OptionContract, OptionKind};
use pricer_pricing::rng::PricerRng;
use pricer_risk::parallel::{value_book, ParallelConfig, Position};
use pricer_risk::var::{
    historical_estimate, simulate_horizon_returns, simulated_var, ReturnSeries, VarConfig,
};

/// Benchmark historical VaR, including series construction.
fn bench_historical_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("historical_var");
    let config = VarConfig::new(0.99, 10).unwrap();

    for n in [250, 2_500, 25_000] {
        let mut rng = PricerRng::from_seed(1);
        let sample = simulate_horizon_returns(0.0, 0.01, 1, n, &mut rng);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &sample, |b, sample| {
            b.iter(|| {
                let series = ReturnSeries::from_slice(black_box(sample)).unwrap();
                historical_estimate(&series, &config)
            });
        });
    }

    group.finish();
}

/// Benchmark simulated VaR across holding periods.
fn bench_simulated_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulated_var");
    const N_SIMS: usize = 10_000;

    for horizon in [1_u32, 10] {
        let config = VarConfig::new(0.99, horizon).unwrap();
        group.throughput(Throughput::Elements(N_SIMS as u64 * u64::from(horizon)));
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &config, |b, config| {
            let mut rng = PricerRng::from_seed(3);
            b.iter(|| simulated_var(black_box(0.0), 0.01, config, N_SIMS, &mut rng));
        });
    }

    group.finish();
}

fn synthetic_book(n: usize) -> Vec<Position> {
    (0..n)
        .map(|i| {
            let strike = 70.0 + (i % 60) as f64;
            let expiry = 0.25 + (i % 8) as f64 * 0.25;
            let contract = OptionContract::new(100.0, strike, expiry, 0.03, 0.25, 0.01);
            let kind = if i % 2 == 0 { OptionKind::Call } else { OptionKind::Put };
            Position::new(format!("T{:05}", i), contract, kind, 1.0)
        })
        .collect()
}

/// Benchmark closed-form book valuation.
fn bench_value_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_book");
    let book = synthetic_book(10_000);
    group.throughput(Throughput::Elements(book.len() as u64));

    group.bench_function("sequential", |b| {
        let config = ParallelConfig::sequential();
        b.iter(|| value_book(black_box(&book), &config))
    });
    group.bench_function("parallel", |b| {
        let config = ParallelConfig::default();
        b.iter(|| value_book(black_box(&book), &config))
    });

    group.finish();
}

criterion_group!(benches, bench_historical_var, bench_simulated_var, bench_value_book);
criterion_main!(benches);
