//! Selection with a median-of-3 pivot over three uniformly random sample
//! positions. The PRNG is seeded from the call shape, so a failing input
//! found by the test suite replays identically.

use std::cmp::Ordering;

use rand::prelude::*;

use crate::quickselect::{median3_idx, pivot_partition, quickselect};

select_impl!("median_of_3_random");

#[inline]
pub fn select_nth<T>(v: &mut [T], index: usize)
where
    T: Ord,
{
    select_nth_by(v, index, |a, b| a.cmp(b));
}

#[inline]
pub fn select_nth_by<T, F>(v: &mut [T], index: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    select_nth_is_less(v, index, &mut |a, b| compare(a, b).is_lt());
}

#[inline]
pub fn partial_sort<T>(v: &mut [T], mid: usize)
where
    T: Ord,
{
    partial_sort_by(v, mid, |a, b| a.cmp(b));
}

#[inline]
pub fn partial_sort_by<T, F>(v: &mut [T], mid: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if mid == 0 {
        return;
    }

    select_nth_by(v, mid - 1, |a, b| compare(a, b));
    v[..mid].sort_unstable_by(|a, b| compare(a, b));
}

pub(crate) fn select_nth_is_less<T, F>(v: &mut [T], index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if index >= v.len() {
        return;
    }

    let mut rng = StdRng::seed_from_u64(((v.len() as u64) << 32) | index as u64);

    let mut partition = |v: &mut [T], is_less: &mut F| -> usize {
        let len = v.len();
        if len < 3 {
            return pivot_partition(v, len / 2, is_less);
        }

        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        let c = rng.gen_range(0..len);

        let pivot = median3_idx(v, is_less, a, b, c);
        pivot_partition(v, pivot, is_less)
    };

    quickselect(v, index, is_less, &mut partition);
}
