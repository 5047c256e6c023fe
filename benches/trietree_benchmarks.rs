// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trietree Benchmarks
//!
//! Criterion benchmarks for insertion, lookup and completion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use trietree_lib::TrieTree;

/// Deterministic word list: zero-padded numbers share long prefixes.
fn generate_words(count: usize, width: usize) -> Vec<String> {
    (0..count).map(|i| format!("{i:0width$}")).collect()
}

/// Benchmark building trees of different word lengths
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_tree_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for width in [8, 16, 32, 64].iter() {
        let words = generate_words(1000, *width);
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", width), &words, |b, words| {
            b.iter(|| black_box(TrieTree::from_strings(words)));
        });
    }

    group.finish();
}

/// Benchmark membership tests and completion against a fixed tree
fn bench_queries(c: &mut Criterion) {
    let words = generate_words(10_000, 8);
    let tree = TrieTree::from_strings(&words);

    let mut group = c.benchmark_group("trie_tree_queries");
    group.measurement_time(Duration::from_secs(2));

    group.bench_function("contains_hit", |b| {
        let mut index = 0;
        b.iter(|| {
            let word = &words[index % words.len()];
            index += 1;
            black_box(tree.contains(word))
        });
    });

    group.bench_function("contains_miss", |b| {
        b.iter(|| black_box(tree.contains(black_box("0000x"))));
    });

    for prefix in ["0000", "00000", "0000000"].iter() {
        group.bench_with_input(BenchmarkId::new("complete", prefix), prefix, |b, prefix| {
            b.iter(|| black_box(tree.complete(prefix)));
        });
    }

    group.bench_function("iter_all", |b| {
        b.iter(|| black_box(tree.iter().count()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02);
    targets = bench_insert, bench_queries
}
criterion_main!(benches);
