//! Criterion benchmarks for index construction and boolean line search.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use javelin::index::IndexBuilder;
use javelin::query::{MatchStrategy, QueryEngine};

/// Generate test lines for benchmarking.
fn generate_lines(count: usize) -> Vec<String> {
    let words = [
        "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi", "index", "query",
        "search", "term", "line", "posting", "set", "match",
    ];

    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let length = 4 + (i % 8); // Variable length lines
        let mut line_words = Vec::with_capacity(length);
        for j in 0..length {
            line_words.push(words[(i * 7 + j * 3) % words.len()]);
        }
        lines.push(line_words.join(" "));
    }
    lines
}

fn bench_index_build(c: &mut Criterion) {
    let lines = generate_lines(10_000);

    let mut group = c.benchmark_group("index_build");
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("build_10k_lines", |b| {
        b.iter(|| {
            let builder = IndexBuilder::new();
            black_box(builder.build(black_box(lines.clone())).unwrap())
        })
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let index = IndexBuilder::new().build(generate_lines(10_000)).unwrap();
    let engine = QueryEngine::new(&index);
    let terms: Vec<String> = ["alice", "query", "match"]
        .iter()
        .map(|word| word.to_string())
        .collect();

    let mut group = c.benchmark_group("search");
    for strategy in [MatchStrategy::All, MatchStrategy::Any, MatchStrategy::None] {
        group.bench_function(strategy.as_str(), |b| {
            b.iter(|| black_box(engine.search(strategy, black_box(&terms))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_search);
criterion_main!(benches);
