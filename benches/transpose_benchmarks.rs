//! Performance benchmarks for the transpose pipeline
//! Measures the map, shuffle and reduce stages separately and end to end

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use csv_pivot::pipeline::{Grouper, KeyGrouper, Transposer};
use csv_pivot::transpose::{group_by_key, map, reduce, EmittedPair, InputRecord};
use std::hint::black_box;

/// Create a rectangular table of `rows` x `cols` cells
fn create_table(rows: usize, cols: usize) -> Vec<InputRecord> {
    (0..rows)
        .map(|row| {
            let text = (0..cols)
                .map(|col| format!("r{}c{}", row, col))
                .collect::<Vec<_>>()
                .join(",");
            InputRecord::new(row, text)
        })
        .collect()
}

fn emitted_pairs(table: &[InputRecord]) -> Vec<EmittedPair> {
    table.iter().flat_map(|r| map(r.index, &r.text)).collect()
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for cols in [10, 100, 1000] {
        let table = create_table(1, cols);
        group.bench_with_input(BenchmarkId::from_parameter(cols), &table[0], |b, row| {
            b.iter(|| black_box(map(row.index, &row.text)));
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_key");
    for rows in [100, 1000] {
        let pairs = emitted_pairs(&create_table(rows, 20));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &pairs, |b, pairs| {
            b.iter_batched(
                || pairs.clone(),
                |pairs| black_box(group_by_key(pairs)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    for rows in [100, 1000, 10000] {
        let groups = KeyGrouper.group(emitted_pairs(&create_table(rows, 1)));
        let members = groups[0].members.clone();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &members, |b, members| {
            b.iter(|| black_box(reduce(0, members)));
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    let transposer = Transposer::default();
    for (rows, cols) in [(10, 10), (100, 50), (1000, 20)] {
        let table = create_table(rows, cols);
        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}x{}", rows, cols)),
            &table,
            |b, table| {
                b.iter_batched(
                    || table.clone(),
                    |records| black_box(transposer.run_records(records)),
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_map,
    bench_shuffle,
    bench_reduce,
    bench_end_to_end
);
criterion_main!(benches);
