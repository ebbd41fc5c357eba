// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for scales
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Full enumeration runs across pitch counts
//! - Fingerprinting and registry marking

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scales::{enumerate_into, CanonicalRegistry, PitchSet, SearchParams};

/// Benchmark complete runs with a generous run limit (widest search tree)
fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");

    for pitches in [3i64, 5, 7, 9].iter() {
        let params = SearchParams::new(*pitches, 12).unwrap();
        group.bench_with_input(BenchmarkId::new("pitches", pitches), &params, |b, &params| {
            let mut registry = CanonicalRegistry::new();
            b.iter(|| {
                let mut scales: Vec<PitchSet> = Vec::new();
                black_box(enumerate_into(params, &mut registry, &mut scales).unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark a tightly pruned run
fn bench_enumerate_pruned(c: &mut Criterion) {
    let params = SearchParams::new(7, 2).unwrap();

    c.bench_function("enumerate_7_2", |b| {
        let mut registry = CanonicalRegistry::new();
        b.iter(|| {
            let mut scales: Vec<PitchSet> = Vec::new();
            black_box(enumerate_into(black_box(params), &mut registry, &mut scales).unwrap())
        })
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let major = PitchSet::from_pattern("101011010101").unwrap();

    c.bench_function("fingerprint_all_modes", |b| {
        b.iter(|| {
            black_box(&major)
                .active_degrees()
                .filter_map(|m| major.fingerprint(m))
                .count()
        })
    });

    c.bench_function("mark_all_rotations", |b| {
        let mut registry = CanonicalRegistry::new();
        b.iter(|| {
            registry.reset();
            registry.mark_all_rotations(black_box(&major));
            black_box(registry.seen_count())
        })
    });
}

criterion_group!(
    benches,
    bench_enumerate,
    bench_enumerate_pruned,
    bench_fingerprint,
);
criterion_main!(benches);
