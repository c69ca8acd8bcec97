#![forbid(unsafe_code)]

//! Benchmarks for the table engines.

use collapsible_table::column::{Column, ColumnDef, ingest_columns};
use collapsible_table::layout::{LayoutBudget, layout};
use collapsible_table::row::{Row, record, rows_from_records};
use collapsible_table::search::search;
use collapsible_table::sort::{Direction, Sort, apply_sort};
use collapsible_table::value::CellValue;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn build_columns(count: u32) -> Vec<Column> {
    let defs = (0..count)
        .map(|i| ColumnDef::new(format!("col{i}"), format!("Column {i}"), i % 4))
        .collect();
    ingest_columns(defs).unwrap_or_default()
}

fn build_rows(count: usize) -> Vec<Row> {
    rows_from_records(
        (0..count)
            .map(|i| {
                record([
                    ("col0", CellValue::from(format!("Person {i}"))),
                    ("col1", CellValue::from(u32::try_from(i % 97).unwrap_or(0))),
                    ("col2", CellValue::from(if i % 3 == 0 { "active" } else { "idle" })),
                    ("col3", CellValue::from(format!("Region {}", i % 11))),
                ])
            })
            .collect(),
    )
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for size in [100usize, 1_000, 10_000] {
        let rows = build_rows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("numeric", size), &rows, |b, rows| {
            let sort = Sort::new("col1", Direction::Ascending);
            b.iter(|| apply_sort(black_box(rows), &sort));
        });
        group.bench_with_input(BenchmarkId::new("text_desc", size), &rows, |b, rows| {
            let sort = Sort::new("col0", Direction::Descending);
            b.iter(|| apply_sort(black_box(rows), &sort));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let columns = build_columns(4);
    let mut group = c.benchmark_group("search");
    for size in [100usize, 1_000, 10_000] {
        let rows = build_rows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("substring", size), &rows, |b, rows| {
            b.iter(|| search(black_box("region 7"), rows, &columns));
        });
        group.bench_with_input(BenchmarkId::new("empty", size), &rows, |b, rows| {
            b.iter(|| search(black_box(""), rows, &columns));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let budget = LayoutBudget::default();
    let mut group = c.benchmark_group("layout");
    for count in [4u32, 16, 64] {
        let columns = build_columns(count);
        group.bench_with_input(BenchmarkId::new("collapsible", count), &columns, |b, columns| {
            b.iter(|| layout(black_box(900), columns, true, &budget));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_search, bench_layout);
criterion_main!(benches);
