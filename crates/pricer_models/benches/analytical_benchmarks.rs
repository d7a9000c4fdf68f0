//! Criterion benchmarks for the closed-form engine.
//!
//! Measures a single price, the full Greeks bundle and implied volatility
//! inversion across moneyness.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::{OptionContract, OptionKind};
use pricer_models::analytical::{implied_volatility, norm_cdf, BlackScholes};

fn contract(strike: f64) -> OptionContract {
    OptionContract::new(100.0, strike, 1.0, 0.05, 0.2, 0.01)
}

/// Benchmark the normal CDF on its own.
fn bench_norm_cdf(c: &mut Criterion) {
    c.bench_function("norm_cdf", |b| {
        b.iter(|| norm_cdf(black_box(0.35_f64)));
    });
}

/// Benchmark price and Greeks across strikes.
fn bench_black_scholes(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes");

    for strike in [80.0, 100.0, 120.0] {
        let bs = BlackScholes::new(contract(strike));

        group.bench_with_input(BenchmarkId::new("price", strike), &bs, |b, bs| {
            b.iter(|| black_box(bs).price(OptionKind::Call));
        });

        group.bench_with_input(BenchmarkId::new("greeks", strike), &bs, |b, bs| {
            b.iter(|| black_box(bs).greeks(OptionKind::Put));
        });
    }

    group.finish();
}

/// Benchmark implied volatility recovery across strikes.
fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");

    for strike in [80.0, 100.0, 120.0] {
        let target = contract(strike).with_volatility(0.45);
        let market = BlackScholes::new(target).price(OptionKind::Call);

        group.bench_with_input(BenchmarkId::from_parameter(strike), &target, |b, target| {
            b.iter(|| implied_volatility(black_box(market), target, OptionKind::Call));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_norm_cdf,
    bench_black_scholes,
    bench_implied_volatility
);
criterion_main!(benches);
