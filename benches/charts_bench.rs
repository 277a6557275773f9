//! Benchmarks for dataset loading and chart updates
//!
//! Run with: cargo bench

use africa_gdp_dashboard::charts::update_charts;
use africa_gdp_dashboard::dataset::{Dataset, DatasetLoader, EconomicRecord};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const COUNTRIES: usize = 54;
const YEARS: i32 = 60;

fn create_test_records() -> Vec<EconomicRecord> {
    (0..YEARS)
        .flat_map(|y| {
            (0..COUNTRIES).map(move |c| {
                EconomicRecord::new(
                    format!("Country {}", c),
                    format!("C{:02}", c),
                    1960 + y,
                    (c as f64 + 1.0) * (y as f64 + 1.0) * 1.5e8,
                )
            })
        })
        .collect()
}

fn create_test_csv() -> String {
    let mut csv = String::from("Country,Code,Year,GDP (USD)\n");
    for r in create_test_records() {
        csv.push_str(&format!("{},{},{},{}\n", r.country, r.code, r.year, r.gdp_usd));
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let csv = create_test_csv();

    group.throughput(Throughput::Elements(COUNTRIES as u64 * YEARS as u64));
    group.bench_function("csv_reader", |b| {
        b.iter(|| DatasetLoader::new().load_reader(black_box(csv.as_bytes())).unwrap())
    });

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let dataset = Dataset::new(create_test_records()).unwrap();

    group.bench_function("single_year", |b| {
        b.iter(|| update_charts(black_box(&dataset), black_box(1990)))
    });

    group.bench_function("sweep_all_years", |b| {
        b.iter(|| {
            for year in dataset.year_range().iter() {
                black_box(update_charts(&dataset, year));
            }
        })
    });

    group.bench_function("serialize_json", |b| {
        let charts = update_charts(&dataset, 1990);
        b.iter(|| serde_json::to_vec(black_box(&charts)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_update);
criterion_main!(benches);
