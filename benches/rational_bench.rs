//! Benchmarks for rational arithmetic, reduction and rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fract::prelude::*;

fn q(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

/// Harmonic partial sums 1/1 + 1/2 + ... + 1/n.
fn harmonic(n: i64) -> Rational {
    (1..=n).map(|k| q(1, k)).sum()
}

/// Benchmark the four checked operations on small operands.
fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a = q(355, 113);
    let b = q(-22, 7);

    group.bench_function("add", |bench| bench.iter(|| black_box(a).checked_add(&black_box(b))));
    group.bench_function("sub", |bench| bench.iter(|| black_box(a).checked_sub(&black_box(b))));
    group.bench_function("mul", |bench| bench.iter(|| black_box(a).checked_mul(&black_box(b))));
    group.bench_function("div", |bench| bench.iter(|| black_box(a).checked_div(&black_box(b))));

    group.finish();
}

/// Benchmark reduction, where the gcd loop dominates.
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for scale in [1i64, 1_000, 1_000_000] {
        // Consecutive Fibonacci numbers are the worst case for Euclid.
        let r = q(832_040 * scale, 1_346_269 * scale);
        group.bench_with_input(BenchmarkId::new("fibonacci", scale), &r, |bench, r| {
            bench.iter(|| black_box(r).reduced());
        });
    }

    group.finish();
}

/// Benchmark summing a series with running reduction.
fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for n in [10i64, 20, 30] {
        group.bench_with_input(BenchmarkId::new("harmonic", n), &n, |bench, &n| {
            bench.iter(|| harmonic(black_box(n)));
        });
    }

    group.finish();
}

/// Benchmark canonical and mixed-number rendering.
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let r = q(1_234_567, 8_910);

    group.bench_function("display", |bench| bench.iter(|| black_box(r).to_string()));
    group.bench_function("mixed", |bench| bench.iter(|| black_box(r).as_mixed()));

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_reduce, bench_sum, bench_format);
criterion_main!(benches);
