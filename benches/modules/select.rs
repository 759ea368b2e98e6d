use std::env;

use criterion::{black_box, Criterion};

use select_test_tools::{patterns, Selection};

use crate::modules::util;

fn measure_comp_count<S: Selection>(
    name: &str,
    test_len: usize,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    target_fn: fn(usize) -> usize,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else if test_len < 1_000_000 {
        100
    } else {
        10
    };

    let mut comp_count = 0u64;

    // Instrument via select_nth_by to ensure the type properties such as Copy of the type
    // that is being selected on don't change. And we get representative numbers.
    for _ in 0..run_count {
        let mut test_data = pattern_provider(test_len);
        let index = target_fn(test_data.len());
        S::select_nth_by(black_box(test_data.as_mut_slice()), index, |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

pub fn bench_fn<S: Selection>(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    target_name: &str,
    target_fn: fn(usize) -> usize,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!(
            "{}-comp-{}-{}-{}",
            bench_name, pattern_name, target_name, test_len
        );

        if util::should_run_benchmark(&name) {
            measure_comp_count::<S>(&name, test_len, pattern_provider, target_fn);
        }
    } else {
        util::bench_fn(
            c,
            test_len,
            pattern_name,
            pattern_provider,
            target_name,
            target_fn,
            &bench_name,
            S::select_nth,
        );
    }
}

pub fn bench_patterns(c: &mut Criterion, test_len: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32) as i32)
        }),
        ("random_binary", |size| {
            patterns::random_uniform(size, 0..=1 as i32)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("pipe_organ", patterns::pipe_organ),
        ("push_front", patterns::push_front),
        ("push_middle", patterns::push_middle),
        ("median3_killer", patterns::median3_killer),
    ];

    let target_fns: Vec<(&'static str, fn(usize) -> usize)> = vec![
        ("first", |_len| 0),
        ("p25", |len| len / 4),
        ("median", |len| len / 2),
        ("last", |len| len.saturating_sub(1)),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_len < 3 && *pattern_name != "random" {
            continue;
        }

        for (target_name, target_fn) in target_fns.iter() {
            macro_rules! bench_inst {
                ($select_impl_path:path) => {{
                    use $select_impl_path::*;

                    bench_fn::<SelectImpl>(
                        c,
                        test_len,
                        pattern_name,
                        pattern_provider,
                        target_name,
                        *target_fn,
                    );
                }};
            }

            bench_inst!(select_comp::floyd_rivest);
            bench_inst!(select_comp::heap_select);
            bench_inst!(select_comp::median_of_3_random);
            bench_inst!(select_comp::median_of_medians);
            bench_inst!(select_comp::median_of_ninthers);
            bench_inst!(select_comp::pdqselect::branchless);
            bench_inst!(select_comp::pdqselect::branchy);
            bench_inst!(select_comp::rust_std);
        }
    }
}
