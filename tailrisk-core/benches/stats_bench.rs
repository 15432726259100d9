//! Criterion benchmarks for tailrisk hot paths.
//!
//! Benchmarks:
//! 1. Partial selection vs. a full sort at several sample sizes
//! 2. Quantile lookup
//! 3. CVaR weight construction and tail expectation
//! 4. Standard deviation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tailrisk_core::{cvar_weights, quantile, select_rank, std_dev, tail_expectation, Tail};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_samples(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    for n in [100, 1_000, 10_000, 100_000] {
        let samples = make_samples(n);

        group.bench_with_input(BenchmarkId::new("select_rank", n), &samples, |b, v| {
            b.iter(|| select_rank(black_box(v), black_box(95.0)))
        });

        group.bench_with_input(BenchmarkId::new("full_sort", n), &samples, |b, v| {
            b.iter(|| {
                let mut sorted = v.clone();
                sorted.sort_unstable_by(|a, b| a.total_cmp(b));
                black_box(sorted[sorted.len() * 95 / 100])
            })
        });
    }
    group.finish();
}

fn bench_quantile(c: &mut Criterion) {
    let samples = make_samples(10_000);
    c.bench_function("quantile_10k", |b| {
        b.iter(|| quantile(black_box(&samples), black_box(50.0)))
    });
}

fn bench_cvar(c: &mut Criterion) {
    let samples = make_samples(10_000);

    c.bench_function("cvar_weights_10k", |b| {
        b.iter(|| cvar_weights(black_box(&samples), black_box(5.0), Tail::Lower))
    });

    c.bench_function("tail_expectation_10k", |b| {
        b.iter(|| tail_expectation(black_box(&samples), black_box(5.0), Tail::Lower))
    });
}

fn bench_dispersion(c: &mut Criterion) {
    let samples = make_samples(10_000);
    c.bench_function("std_dev_10k", |b| {
        b.iter(|| std_dev(black_box(&samples)))
    });
}

criterion_group!(
    benches,
    bench_selection,
    bench_quantile,
    bench_cvar,
    bench_dispersion
);
criterion_main!(benches);
