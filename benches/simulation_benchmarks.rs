//! Simulation benchmarks with confidence intervals.
//!
//! Reproducible performance measurements for the stepping loop and the
//! full experiment.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kinbench::catalog;
use kinbench::prelude::*;

/// Single-system run benchmark across the catalog archetypes.
fn bench_simulate_system(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_system");
    group.sample_size(100);
    group.confidence_level(0.95);

    let archetypes = [
        ("agile_robot", catalog::agile_robot()),
        ("electric_vehicle", catalog::electric_vehicle()),
        ("ai_agent", catalog::ai_agent()),
    ];

    for (name, params) in archetypes {
        let params = params.expect("catalog parameters are valid");
        group.bench_with_input(BenchmarkId::new("archetype", name), &params, |b, p| {
            b.iter(|| {
                let report = simulate_system(p.clone(), 5.0);
                black_box(report)
            });
        });
    }

    group.finish();
}

/// Stepping-loop scaling: step count grows with the energy budget.
fn bench_budget_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("budget_scaling");
    group.sample_size(50);
    group.confidence_level(0.95);

    for budget in [1_000.0, 10_000.0, 100_000.0] {
        let params = SystemParameters::new("scaling", 1.0, 0.8, budget)
            .expect("parameters are valid");
        group.bench_with_input(
            BenchmarkId::new("steps", budget as u64),
            &params,
            |b, p| {
                b.iter(|| {
                    let report = simulate_system(p.clone(), 5.0);
                    black_box(report)
                });
            },
        );
    }

    group.finish();
}

/// Full experiment benchmark: catalog, three runs, sort.
fn bench_full_experiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_experiment");
    group.sample_size(100);
    group.confidence_level(0.95);

    let systems = catalog::benchmark_suite().expect("catalog is valid");

    group.bench_function("run_experiment", |b| {
        b.iter(|| {
            let reports = run_experiment(&systems);
            black_box(reports)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_simulate_system,
    bench_budget_scaling,
    bench_full_experiment
);
criterion_main!(benches);
