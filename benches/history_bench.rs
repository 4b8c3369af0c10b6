// ABOUTME: Criterion benchmarks for history generation and insight aggregation
// ABOUTME: Measures per-window series generation and report building over generated data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for history series generation.
//!
//! Covers the four series families over the standard windows plus a full
//! insight report over a generated quarter.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitalsync::constants::history::{STANDARD_WINDOWS, YEAR_WINDOW_DAYS};
use vitalsync::intelligence::{InsightReport, TimeRange};
use vitalsync::providers::SampleGenerator;

fn bench_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default()
}

fn bench_history_generation(c: &mut Criterion) {
    let generator = SampleGenerator::seeded(42);
    let end = bench_end_date();
    let mut group = c.benchmark_group("history_generation");

    for days in STANDARD_WINDOWS.into_iter().chain([YEAR_WINDOW_DAYS]) {
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::new("hrv", days), &days, |b, &days| {
            b.iter(|| generator.hrv_history(black_box(end), black_box(days)));
        });
        group.bench_with_input(BenchmarkId::new("sleep", days), &days, |b, &days| {
            b.iter(|| generator.sleep_history(black_box(end), black_box(days)));
        });
        group.bench_with_input(BenchmarkId::new("stress", days), &days, |b, &days| {
            b.iter(|| generator.stress_history(black_box(end), black_box(days)));
        });
        group.bench_with_input(BenchmarkId::new("activity", days), &days, |b, &days| {
            b.iter(|| generator.activity_history(black_box(end), black_box(days)));
        });
    }

    group.finish();
}

fn bench_insight_report(c: &mut Criterion) {
    let generator = SampleGenerator::seeded(42);
    let end = bench_end_date();
    let mut group = c.benchmark_group("insight_report");

    for range in TimeRange::ALL {
        let days = range.days();
        let hrv = generator.hrv_history(end, days);
        let sleep = generator.sleep_history(end, days);
        let stress = generator.stress_history(end, days);

        group.bench_function(BenchmarkId::from_parameter(range), |b| {
            b.iter(|| {
                InsightReport::from_series(
                    black_box(range),
                    black_box(&hrv),
                    black_box(&sleep),
                    black_box(&stress),
                )
            });
        });
    }

    group.finish();
}

fn bench_live_updates(c: &mut Criterion) {
    let generator = SampleGenerator::seeded(42);
    let timestamp = chrono::Utc::now();
    c.bench_function("live_update", |b| {
        b.iter(|| generator.live_update(black_box(timestamp)));
    });
}

criterion_group!(
    benches,
    bench_history_generation,
    bench_insight_report,
    bench_live_updates
);
criterion_main!(benches);
