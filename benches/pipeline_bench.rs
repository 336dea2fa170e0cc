//! Benchmarks for the population pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use uspop::*;

fn create_response(years: usize) -> String {
    let nations = [
        ("United States", "01000US"),
        ("Puerto Rico", "04000US72"),
    ];

    let data: Vec<serde_json::Value> = (0..years)
        .flat_map(|i| {
            nations.iter().map(move |(nation, id)| {
                serde_json::json!({
                    "Nation ID": id,
                    "Nation": nation,
                    "Year": 1900 + i,
                    "Total Population": 76_000_000 + i * 2_000_000,
                })
            })
        })
        .collect();

    serde_json::json!({ "data": data }).to_string()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for years in [10, 100, 1000] {
        let body = create_response(years);
        group.throughput(Throughput::Elements(years as u64 * 2));

        group.bench_function(format!("parse_population_{}", years), |b| {
            b.iter(|| parse_population(black_box(&body), DEFAULT_NATION).unwrap())
        });
    }

    group.finish();
}

fn bench_chart_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");

    let records = parse_population(&create_response(100), DEFAULT_NATION).unwrap();
    let plot = PlotArea::new(800.0, 400.0, Margins::default());

    for window in TrendWindow::ALL {
        let slice = trend_slice(&records, window);
        let domain = YDomain::from_records(slice).unwrap();
        let y = plot.y_scale(domain);
        let points: Vec<Point> = slice
            .iter()
            .enumerate()
            .map(|(i, r)| Point::new(plot.x_for_index(i, slice.len()), y.map(r.value())))
            .collect();

        group.bench_function(format!("monotone_{}", window.years()), |b| {
            b.iter(|| monotone_segments(black_box(&points)))
        });
    }

    group.bench_function("y_ticks", |b| {
        let domain = YDomain::from_records(&records).unwrap();
        b.iter(|| y_ticks(black_box(domain), 5))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_chart_path);
criterion_main!(benches);
