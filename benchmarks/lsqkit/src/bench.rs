//! lsqkit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Design system construction (rows x columns)
//! - Normal-equations reduction for tall systems
//! - Residual norms, including the scalar vs SIMD sum of squares

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lsqkit::internals::math::products::{sum_of_squares_scalar, sum_of_squares_simd_f64};
use lsqkit::prelude::*;
use ndarray::Array1;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

/// Deterministic candidate solution with alternating signs.
fn candidate(n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |j| {
        let sign = if j % 2 == 0 { 1.0 } else { -0.5 };
        sign / (j + 1) as f64
    })
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_design_system(c: &mut Criterion) {
    let mut group = c.benchmark_group("design_system");

    for &(m, n) in &[(100, 4), (1_000, 8), (10_000, 8), (10_000, 16)] {
        group.throughput(Throughput::Elements((m * n) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{m}x{n}")),
            &(m, n),
            |bench, &(m, n)| bench.iter(|| design_system::<f64>(black_box(m), black_box(n))),
        );
    }

    group.finish();
}

fn bench_normal_equations(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_equations");

    for &(m, n) in &[(100, 4), (1_000, 8), (10_000, 8), (10_000, 16)] {
        let (a, b) = design_system::<f64>(m, n).expect("valid design system");
        group.throughput(Throughput::Elements((m * n) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{m}x{n}")),
            &(a, b),
            |bench, (a, b)| bench.iter(|| normal_equations(black_box(a), black_box(b))),
        );
    }

    group.finish();
}

fn bench_residual_norm(c: &mut Criterion) {
    let mut group = c.benchmark_group("residual_norm");

    for &(m, n) in &[(100, 4), (1_000, 8), (10_000, 8), (100_000, 4)] {
        let (a, b) = design_system::<f64>(m, n).expect("valid design system");
        let x = candidate(n);
        group.throughput(Throughput::Elements((m * n) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{m}x{n}")),
            &(a, x, b),
            |bench, (a, x, b)| bench.iter(|| residual_norm(black_box(a), black_box(x), black_box(b))),
        );
    }

    group.finish();
}

fn bench_sum_of_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_of_squares");

    for &size in &[1_000usize, 100_000] {
        let v: Vec<f64> = (0..size).map(|i| (i as f64 * 0.37).sin()).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("scalar", size), &v, |bench, v| {
            bench.iter(|| sum_of_squares_scalar(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("simd", size), &v, |bench, v| {
            bench.iter(|| sum_of_squares_simd_f64(black_box(v)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_design_system,
    bench_normal_equations,
    bench_residual_norm,
    bench_sum_of_squares
);
criterion_main!(benches);
