//! Benchmarks for the caseboard dataset pipeline
//!
//! Run with: cargo bench

use caseboard::dataset::{normalize, parse_day_first, DatasetLoader, RawTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io::Write;
use tempfile::tempdir;

fn create_raw_table(rows: usize) -> RawTable {
    RawTable {
        headers: vec![
            "Date".to_string(),
            "Daily_New_Cases".to_string(),
            "Active_Cases".to_string(),
        ],
        rows: (0..rows)
            .map(|i| {
                vec![
                    format!("{}/{}/2020", i % 28 + 1, i % 12 + 1),
                    (i % 500).to_string(),
                    (i % 900).to_string(),
                ]
            })
            .collect(),
    }
}

fn bench_parse_day_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_day_first");

    group.bench_function("day_first", |b| {
        b.iter(|| parse_day_first(black_box("13/3/2020")))
    });

    group.bench_function("iso_fallback", |b| {
        b.iter(|| parse_day_first(black_box("2020-03-13")))
    });

    group.bench_function("unparseable", |b| {
        b.iter(|| parse_day_first(black_box("not-a-date")))
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [100, 1000, 10000] {
        let raw = create_raw_table(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("clean_{}", size), |b| {
            b.iter(|| normalize(black_box(&raw)).unwrap())
        });
    }

    group.finish();
}

fn bench_cached_load(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.csv");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Date,Daily_New_Cases").unwrap();
    for i in 0..1000 {
        writeln!(file, "{}/{}/2020,{}", i % 28 + 1, i % 12 + 1, i).unwrap();
    }
    drop(file);

    let loader = DatasetLoader::new();
    loader.load(&path).unwrap(); // populate the cache

    c.bench_function("cached_load", |b| {
        b.iter(|| loader.load(black_box(&path)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_parse_day_first,
    bench_normalize,
    bench_cached_load
);
criterion_main!(benches);
