//! FILENAME: grid-engine/benches/grid_pipeline.rs
//! Pipeline benchmarks over a 10k-row dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smallvec::smallvec;

use grid_engine::{compute_visible_rows, SortKey, ViewState};
use model::{resolve_columns, ColumnDef, Record, ResolvedColumn};

const STATUSES: [&str; 4] = ["success", "pending", "processing", "failed"];

fn dataset(rows: usize) -> Vec<Record> {
    (0..rows)
        .map(|i| {
            Record::new()
                .with_field("status", STATUSES[i % STATUSES.len()])
                .with_field("email", format!("user{}@example.com", i))
                .with_field("amount", ((i * 7919) % 10_000) as f64)
        })
        .collect()
}

fn columns() -> Vec<ResolvedColumn<Record>> {
    resolve_columns(vec![
        ColumnDef::field("status", "Status", "status"),
        ColumnDef::field("email", "Email", "email"),
        ColumnDef::field("amount", "Amount", "amount"),
    ])
    .expect("valid columns")
}

fn bench_pipeline(c: &mut Criterion) {
    let rows = dataset(10_000);
    let columns = columns();

    c.bench_function("pipeline_unfiltered_unsorted_10k", |b| {
        let state = ViewState::default();
        b.iter(|| compute_visible_rows(black_box(&rows), &columns, &state))
    });

    c.bench_function("pipeline_filtered_10k", |b| {
        let mut state = ViewState::default();
        state.global_filter = "success".to_string();
        b.iter(|| compute_visible_rows(black_box(&rows), &columns, &state))
    });

    c.bench_function("pipeline_sorted_10k", |b| {
        let mut state = ViewState::default();
        state.sorting = smallvec![SortKey::descending("amount")];
        b.iter(|| compute_visible_rows(black_box(&rows), &columns, &state))
    });

    c.bench_function("pipeline_filter_multi_sort_10k", |b| {
        let mut state = ViewState::default();
        state.global_filter = "example.com".to_string();
        state.sorting = smallvec![
            SortKey::ascending("status"),
            SortKey::descending("amount"),
        ];
        b.iter(|| compute_visible_rows(black_box(&rows), &columns, &state))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
