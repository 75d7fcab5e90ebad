//! Traversal order benchmarks
//!
//! Compares row-major (storage order) and column-major (strided) walks over
//! grids of growing size, plus point insert/retrieve.
//!
//! Measure before optimizing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use weather_grid_db::{AccessOrder, MatrixStore, WeatherRecord};

/// Create a `size × size` store with roughly `fill` of the cells present
fn create_store(size: usize, fill: f64) -> MatrixStore {
    let years: Vec<i32> = (0..size).map(|r| 1900 + i32::try_from(r).unwrap()).collect();
    let cities: Vec<String> = (0..size).map(|c| format!("city_{c}")).collect();
    let mut store = MatrixStore::new(years.clone(), cities.clone()).unwrap();

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for year in &years {
        let date = format!("01/01/{year}");
        for city in &cities {
            if rng.gen_bool(fill) {
                let record = WeatherRecord::parse(&date, city.as_str(), rng.gen_range(-10.0..45.0))
                    .unwrap();
                store.insert(&record).unwrap();
            }
        }
    }
    store
}

fn sum_present(store: &MatrixStore, order: AccessOrder) -> f64 {
    store
        .lanes(order)
        .into_iter()
        .flat_map(|lane| lane.cells.into_iter().filter_map(|(_, v)| v))
        .sum()
}

/// Benchmark full traversals in both orders
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [16, 64, 256] {
        let store = create_store(size, 0.5);

        group.bench_with_input(BenchmarkId::new("row_major", size), &store, |b, store| {
            b.iter(|| black_box(sum_present(store, AccessOrder::RowMajor)));
        });
        group.bench_with_input(BenchmarkId::new("column_major", size), &store, |b, store| {
            b.iter(|| black_box(sum_present(store, AccessOrder::ColumnMajor)));
        });
    }

    group.finish();
}

/// Benchmark point operations (should be flat across sizes)
fn bench_point_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_ops");

    for size in [16, 256] {
        let mut store = create_store(size, 0.5);
        let last_year = 1900 + i32::try_from(size - 1).unwrap();
        let record = WeatherRecord::parse(&format!("01/01/{last_year}"), "city_0", 21.0).unwrap();

        group.bench_with_input(BenchmarkId::new("insert", size), &record, |b, record| {
            b.iter(|| black_box(store.insert(record).unwrap()));
        });

        let store = create_store(size, 0.5);
        group.bench_with_input(BenchmarkId::new("retrieve", size), &store, |b, store| {
            b.iter(|| black_box(store.retrieve("city_0", last_year).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the full-scan sparsity report
fn bench_sparsity(c: &mut Criterion) {
    let mut store = create_store(256, 0.2);
    c.bench_function("sparsity_report_256", |b| {
        b.iter(|| black_box(store.sparsity_report().missing));
    });
}

criterion_group!(benches, bench_traversal, bench_point_ops, bench_sparsity);
criterion_main!(benches);
