//! Benchmarks for interaction filtering
//!
//! Run with: cargo bench --package pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::InteractionLog;
use pipeline::{filter_by_item_id, FilterPipeline, InteractionQuery};

/// 100k attempts spread over 500 items and 2000 learners
fn synthetic_logs() -> Vec<InteractionLog> {
    (0..100_000)
        .map(|id| InteractionLog::attempt(id, id % 2_000, id % 500))
        .collect()
}

fn bench_filter_by_item_id(c: &mut Criterion) {
    let logs = synthetic_logs();

    c.bench_function("filter_by_item_id_some", |b| {
        b.iter(|| {
            let result = filter_by_item_id(black_box(&logs), black_box(Some(42)));
            black_box(result)
        })
    });

    c.bench_function("filter_by_item_id_none", |b| {
        b.iter(|| {
            let result = filter_by_item_id(black_box(&logs), black_box(None));
            black_box(result)
        })
    });
}

fn bench_standard_pipeline(c: &mut Criterion) {
    let logs = synthetic_logs();
    let pipeline = FilterPipeline::standard();
    let query = InteractionQuery::for_item(42).with_learner(Some(42));

    c.bench_function("standard_pipeline", |b| {
        b.iter(|| {
            let result = pipeline.apply(logs.clone(), black_box(&query));
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_filter_by_item_id, bench_standard_pipeline);
criterion_main!(benches);
