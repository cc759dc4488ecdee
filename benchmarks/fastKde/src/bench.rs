//! KDE benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100 to 10K samples)
//! - Grid resolution
//! - Kernel width (spread)
//! - Real-world shapes (bimodal, heavy-tailed, clustered)
//! - The two building blocks on their own
//!
//! For serial execution, use `FASTKDE_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTKDE_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastKde::prelude::*;
use kde::prelude::{aggregate, evaluate};
use rand::prelude::*;
use rand_distr::{Cauchy, Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTKDE_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate samples from one normal distribution.
fn generate_normal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(2.0, 3.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate a two-component mixture.
fn generate_bimodal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let left = Normal::new(0.5, 1.0).unwrap();
    let right = Normal::new(9.5, 1.5).unwrap();
    (0..size)
        .map(|_| {
            if rng.random_bool(0.6) {
                left.sample(&mut rng)
            } else {
                right.sample(&mut rng)
            }
        })
        .collect()
}

/// Generate heavy-tailed samples, many of them outside the grid.
fn generate_heavy_tailed_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Cauchy::new(5.0, 2.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate tight clusters spread over the grid.
fn generate_clustered_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let jitter = Uniform::new(-0.01, 0.01).unwrap();
    (0..size)
        .map(|i| (i % 7) as f64 * 4.0 - 8.0 + jitter.sample(&mut rng))
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(30);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let samples = generate_normal_data(size, 42);

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| {
                Kde::new()
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .fit(black_box(&samples))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("resolution_{}", mode_name));
    group.sample_size(50);

    let samples = generate_normal_data(1_000, 42);

    for resolution in [250, 1_000, 4_000] {
        group.throughput(Throughput::Elements((resolution * samples.len()) as u64));

        group.bench_with_input(
            BenchmarkId::new("batch", resolution),
            &resolution,
            |b, &resolution| {
                b.iter(|| {
                    Kde::new()
                        .grid_resolution(resolution)
                        .adapter(Batch)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .fit(black_box(&samples))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_spread(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("spread_{}", mode_name));
    group.sample_size(50);

    let samples = generate_normal_data(1_000, 42);

    for spread in [0.1, 0.5, 2.25, 10.0] {
        group.bench_with_input(BenchmarkId::new("batch", spread), &spread, |b, &spread| {
            b.iter(|| {
                Kde::new()
                    .spread(spread)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .fit(black_box(&samples))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("shapes_{}", mode_name));
    group.sample_size(50);

    let size = 2_000;
    let cases = [
        ("bimodal", generate_bimodal_data(size, 42)),
        ("heavy_tailed", generate_heavy_tailed_data(size, 42)),
        ("clustered", generate_clustered_data(size, 42)),
    ];

    for (name, samples) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| {
                Kde::new()
                    .return_diagnostics()
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .fit(black_box(samples))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_building_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("building_blocks");
    group.sample_size(100);

    group.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(1.5), 2.25, 0.7, -10.0, 25.1, 0.0351).unwrap())
    });

    let samples = generate_normal_data(500, 42);
    let curves: Vec<_> = samples
        .iter()
        .map(|&s| evaluate(s, 2.25, 0.7, -10.0, 25.1, 0.0351).unwrap())
        .collect();

    group.throughput(Throughput::Elements(curves.len() as u64));
    group.bench_function("aggregate", |b| {
        b.iter(|| aggregate(black_box(&curves), curves.len(), 0.7).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_resolution,
    bench_spread,
    bench_shapes,
    bench_building_blocks,
);
criterion_main!(benches);
