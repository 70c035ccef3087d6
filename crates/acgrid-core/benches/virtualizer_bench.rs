//! Benchmarks for the virtualizer and filters
//!
//! Run with: cargo bench -p acgrid-core

use acgrid_core::{
    FilterColumn, FilterState, FilterType, VirtualizationConfig, Virtualizer,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

// ============================================================================
// Virtualizer
// ============================================================================

fn bench_virtual_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtualizer/virtual_state");

    for total in [1_000usize, 100_000, 10_000_000] {
        let mut virt = Virtualizer::new(VirtualizationConfig::enabled());
        group.bench_with_input(BenchmarkId::new("scroll", total), &total, |b, &total| {
            let mut scroll = 0.0;
            b.iter(|| {
                scroll = (scroll + 137.0) % (total as f64 * 35.0);
                virt.update_state(scroll, 700.0, total);
                black_box(virt.virtual_state());
            })
        });
    }

    group.finish();
}

fn bench_visible_rows(c: &mut Criterion) {
    let rows: Vec<u64> = (0..1_000_000).collect();
    let mut virt = Virtualizer::new(VirtualizationConfig::enabled().with_overscan(10));
    virt.update_state(12_345_678.0, 1_080.0, rows.len());

    c.bench_function("virtualizer/visible_rows", |b| {
        b.iter(|| black_box(virt.visible_rows(black_box(&rows)).len()))
    });
}

// ============================================================================
// Filters
// ============================================================================

fn bench_filter_state(c: &mut Criterion) {
    let rows: Vec<Value> = (0..10_000)
        .map(|i| json!({ "name": format!("Row {i}"), "qty": i % 500, "day": "2024-03-15" }))
        .collect();
    let columns = vec![
        FilterColumn::new("name"),
        FilterColumn::new("qty").with_type(FilterType::Number),
        FilterColumn::new("day").with_type(FilterType::Date),
    ];

    let mut group = c.benchmark_group("filter/apply");
    for (label, column, value) in [
        ("text", "name", "row 99"),
        ("number", "qty", ">250"),
        ("date", "day", "2024-03-15"),
        ("json", "name", r#"{"operator":"startsWith","value":"row 1"}"#),
    ] {
        let mut state = FilterState::default();
        state.set_column_filter(column, value);
        group.bench_function(label, |b| {
            b.iter(|| black_box(state.apply(&rows, &columns).len()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_virtual_state,
    bench_visible_rows,
    bench_filter_state,
);

criterion_main!(benches);
