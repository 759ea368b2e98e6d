use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use rand::prelude::*;

/// Provides a set of patterns useful for testing and benchmarking selection algorithms.
/// Currently limited to i32 values.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = rand::rngs::StdRng::from(new_seed());

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_shuffled(len: usize) -> Vec<i32> {
    // 0..len in random order, every value occurs exactly once.

    let mut rng = rand::rngs::StdRng::from(new_seed());

    let mut vals = (0..len as i32).collect::<Vec<_>>();
    vals.shuffle(&mut rng);

    vals
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

pub fn push_front(len: usize) -> Vec<i32> {
    // :::::.

    // Ascending run with the smallest value appended at the back.
    if len == 0 {
        return Vec::new();
    }

    let mut vals = (1..len as i32).collect::<Vec<_>>();
    vals.push(0);

    vals
}

pub fn push_middle(len: usize) -> Vec<i32> {
    // Ascending run with the middle value moved to the back.

    if len == 0 {
        return Vec::new();
    }

    let mid = (len / 2) as i32;
    let mut vals = (0..len as i32).filter(|&i| i != mid).collect::<Vec<_>>();
    vals.push(mid);

    vals
}

pub fn median3_killer(len: usize) -> Vec<i32> {
    // Interleaved pattern known to push naive median-of-3 pivots into
    // quadratic behavior. Yields 2 * (len / 2) elements.

    let k = len / 2;
    let mut vals = Vec::with_capacity(2 * k);

    for i in 1..(k + 1) {
        if i % 2 != 0 {
            vals.push(i as i32);
        } else {
            vals.push((k + i - 1) as i32);
        }
    }

    for i in 1..(k + 1) {
        vals.push((2 * i) as i32);
    }

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to use call this function.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE.lock().unwrap().get_or_insert_with(|| {
        if let Some(override_seed) = env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).unwrap())
        {
            (SeedType::ExternalOverride, override_seed)
        } else {
            let per_process_seed = thread_rng().gen();
            (SeedType::RandomOncePerProcess, per_process_seed)
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = rand::rngs::StdRng::from(new_seed());

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
