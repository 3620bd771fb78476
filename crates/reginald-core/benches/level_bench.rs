//! # Level Benchmarks
//!
//! Performance benchmarks for the level string codec.
//!
//! Run with: `cargo bench -p reginald-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reginald_core::Level;
use std::hint::black_box;

/// One level per band plus a far out-of-range one.
fn sample_levels() -> Vec<Level> {
    vec![
        Level::TRACE - 1_000_000,
        Level::DEBUG + 1,
        Level::INFO,
        Level::WARN + 3,
        Level::ERROR + 42,
    ]
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for level in sample_levels() {
        group.bench_with_input(BenchmarkId::from_parameter(level), &level, |b, &level| {
            b.iter(|| black_box(level.encode()));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for text in ["INFO", "warn+3", "Error-8", "TRACE-1000000"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| black_box(Level::parse(text)));
        });
    }

    group.finish();
}

fn bench_append_text(c: &mut Criterion) {
    let levels = sample_levels();

    c.bench_function("append_text", |b| {
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            for level in &levels {
                level.append_text(&mut buf);
            }
            black_box(buf.len())
        });
    });
}

fn bench_json_round_trip(c: &mut Criterion) {
    let level = Level::WARN + 3;

    c.bench_function("json_round_trip", |b| {
        b.iter(|| black_box(Level::unmarshal_json(&level.marshal_json())));
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_parse,
    bench_append_text,
    bench_json_round_trip,
);

criterion_main!(benches);
