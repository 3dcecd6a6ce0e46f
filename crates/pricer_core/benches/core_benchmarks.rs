//! Criterion benchmarks for the pricer_core tridiagonal solver.
//!
//! Measures the allocating and the scratch-reusing Thomas solver across
//! system sizes typical for price-axis sweeps.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::solvers::{solve_tridiagonal, SolverConfig, TridiagonalSolver};

/// Generate a diagonally dominant implicit-Euler style system of size `n`.
fn generate_system(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let lower = vec![-0.4; n];
    let diag = vec![1.9; n];
    let upper = vec![-0.5; n];
    let rhs: Vec<f64> = (0..n).map(|i| (i as f64 / n as f64).sin()).collect();
    (lower, diag, upper, rhs)
}

/// Benchmark the allocating solver.
fn bench_solve_tridiagonal(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_tridiagonal");

    for size in [64, 256, 1024, 4096] {
        let (lower, diag, upper, rhs) = generate_system(size);
        group.bench_with_input(BenchmarkId::new("allocating", size), &size, |b, _| {
            b.iter(|| {
                solve_tridiagonal(
                    black_box(&lower),
                    black_box(&diag),
                    black_box(&upper),
                    black_box(&rhs),
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark repeated sweeps that reuse scratch buffers.
fn bench_solver_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("tridiagonal_solver_reuse");

    for size in [64, 256, 1024, 4096] {
        let (lower, diag, upper, rhs) = generate_system(size);
        let mut solver = TridiagonalSolver::with_capacity(size, SolverConfig::default());
        let mut out = vec![0.0; size];

        group.bench_with_input(BenchmarkId::new("in_place", size), &size, |b, _| {
            b.iter(|| {
                solver
                    .solve_into(
                        black_box(&lower),
                        black_box(&diag),
                        black_box(&upper),
                        black_box(&rhs),
                        &mut out,
                    )
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve_tridiagonal, bench_solver_reuse);
criterion_main!(benches);
