use criterion::{criterion_group, criterion_main, Criterion};

use select_test_tools::patterns;

mod modules;

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    // I had a bug, where the test logic for fixed seeds, made the benchmarks always use the same
    // numbers, and random wasn't random at all anymore.
    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_lens = [
        7, 16, 24, 50, 100, 500, 1_000, 10_000, 100_000, 1_000_000,
    ];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_len in test_lens {
        modules::select::bench_patterns(c, test_len);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
