use std::env;

use criterion::{black_box, BatchSize, Criterion};

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id_2) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id_2);
            }

            affinity_already_set.set(true);
        }
    });
}

pub fn should_run_benchmark(name: &str) -> bool {
    // The last argument is the filter criterion itself would have applied.
    let args = env::args().collect::<Vec<_>>();
    let filter_arg = args.last().unwrap();

    if filter_arg == "--bench" {
        return true;
    }

    name.contains(filter_arg.as_str())
}

#[allow(clippy::too_many_arguments)]
pub fn bench_fn(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    target_name: &str,
    target_fn: fn(usize) -> usize,
    bench_name: &str,
    select_fn: impl Fn(&mut [i32], usize),
) {
    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{pattern_name}-{target_name}-{test_len}"),
        |b| {
            b.iter_batched(
                || {
                    let test_data = pattern_provider(test_len);
                    // Some patterns yield a different length than requested.
                    let index = target_fn(test_data.len());
                    (test_data, index)
                },
                |(mut test_data, index)| {
                    select_fn(black_box(test_data.as_mut_slice()), index)
                },
                batch_size,
            )
        },
    );
}
