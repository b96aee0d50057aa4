//! Benchmarks for drift detection over histories of increasing length.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scoredrift::scores::parse_scores;
use scoredrift::{detect, Direction, DriftThresholds, ScoreHistory};
use std::hint::black_box;

fn synthetic_scores(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 0.6 + ((i * 7919) % 1000) as f64 / 10_000.0)
        .collect()
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    for size in [10usize, 1_000, 100_000] {
        let history = ScoreHistory::new(synthetic_scores(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("history", size), &history, |b, h| {
            b.iter(|| {
                detect(
                    h,
                    black_box(0.3625),
                    Direction::HigherIsBetter,
                    DriftThresholds::default(),
                )
            })
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let history = ScoreHistory::new(synthetic_scores(10_000)).unwrap();
    let literal = history.to_literal();

    c.bench_function("parse_10k_scores", |b| {
        b.iter(|| parse_scores(black_box(&literal)))
    });
}

criterion_group!(benches, bench_detect, bench_parse);
criterion_main!(benches);
