//! Benchmarks for the chi-squared association family.
//!
//! Compares the textbook per-cell expected-count path against the fused
//! marginal identity used by `cramers_v_from_table`.

use asociar::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn labels(n: usize) -> (Vec<u32>, Vec<u32>) {
    // Deterministic pseudo-categorical data: 6 row levels, 8 column levels.
    let x: Vec<u32> = (0..n as u32).map(|i| i % 6).collect();
    let y: Vec<u32> = (0..n as u32).map(|i| (i * 7 + 3) % 8).collect();
    (x, y)
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("contingency_from_labels");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let (x, y) = labels(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| ContingencyTable::from_labels(black_box(&x), black_box(&y)).unwrap());
        });
    }

    group.finish();
}

fn bench_cramers_v_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("cramers_v");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let (x, y) = labels(*size);
        let table = ContingencyTable::from_labels(&x, &y).unwrap();
        let n = table.grand_total() as f64;
        let k = (table.n_rows().min(table.n_cols()) - 1) as f64;

        group.bench_with_input(
            BenchmarkId::new("per_cell_expected", size),
            size,
            |b, _| {
                b.iter(|| (chi_squared_statistic(black_box(&table)) / (n * k)).sqrt());
            },
        );

        group.bench_with_input(BenchmarkId::new("fused_marginals", size), size, |b, _| {
            b.iter(|| cramers_v_from_table(black_box(&table)));
        });

        group.bench_with_input(BenchmarkId::new("end_to_end", size), size, |b, _| {
            b.iter(|| cramers_v(black_box(&x), black_box(&y)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table_build, bench_cramers_v_paths);
criterion_main!(benches);
