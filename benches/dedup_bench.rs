// ABOUTME: Criterion benchmarks for batch assembly and deduplication
// ABOUTME: Measures per-record assembly, the rayon threshold, and dedup over realistic batch sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the normalization pipeline.
//!
//! Batches of several hundred to several thousand records, the sizes a
//! single platform sync produces.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{heart_rate_records, RecordBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use health_bridge::model::{HealthDataType, HealthPlatform};
use health_bridge::{assemble_batch, count_duplicates, deduplicate, normalize, BridgeConfig};

fn bench_deduplicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("deduplicate");
    let config = BridgeConfig::default();

    for size in RecordBatchSize::ALL {
        let records = heart_rate_records(size, 10);
        let points = assemble_batch(
            &HealthDataType::HeartRate,
            &records,
            HealthPlatform::AppleHealth,
            "bench",
            &config,
        )
        .points;

        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::new("points", size.label()), &points, |b, points| {
            b.iter(|| deduplicate(black_box(points.clone())));
        });
        group.bench_with_input(BenchmarkId::new("count", size.label()), &points, |b, points| {
            b.iter(|| count_duplicates(black_box(points)));
        });
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_batch");
    let sequential = BridgeConfig::default().with_parallel_threshold(usize::MAX);
    let parallel = BridgeConfig::default().with_parallel_threshold(0);

    for size in RecordBatchSize::ALL {
        let records = heart_rate_records(size, 0);
        group.throughput(Throughput::Elements(records.len() as u64));

        for (name, config) in [("sequential", &sequential), ("parallel", &parallel)] {
            group.bench_with_input(BenchmarkId::new(name, size.label()), &records, |b, records| {
                b.iter(|| {
                    assemble_batch(
                        &HealthDataType::HeartRate,
                        black_box(records),
                        HealthPlatform::AppleHealth,
                        "bench",
                        config,
                    )
                });
            });
        }
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let records = heart_rate_records(RecordBatchSize::Medium, 10);
    let config = BridgeConfig::default();

    c.bench_function("normalize_1440", |b| {
        b.iter(|| {
            normalize(
                &HealthDataType::HeartRate,
                black_box(&records),
                HealthPlatform::GoogleHealthConnect,
                "bench",
                &config,
            )
        });
    });
}

criterion_group!(benches, bench_deduplicate, bench_assemble, bench_normalize);
criterion_main!(benches);
