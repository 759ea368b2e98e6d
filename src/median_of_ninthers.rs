//! Selection with Tukey's ninther pivot estimate: nine evenly spread samples,
//! median-of-three over three triples, median-of-three over the results.
//! Cheap per step and hard to mislead with structured inputs, but without
//! the deterministic linear worst case of median-of-medians.

use std::cmp::Ordering;

use crate::quickselect::{median3_idx, pivot_partition, quickselect};

select_impl!("median_of_ninthers");

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

    quickselect(v, index, is_less, &mut partition::<T, F>);
}

fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 9 {
        return pivot_partition(v, len / 2, is_less);
    }

    // Sample positions `0, frac, 2 * frac, ..., 8 * frac`, which spread over
    // the whole bracket since `frac == len / 9`.
    let frac = len / 9;
    let mut medians = [0usize; 3];
    for (group, median) in medians.iter_mut().enumerate() {
        let a = group * 3 * frac;
        *median = median3_idx(v, is_less, a, a + frac, a + 2 * frac);
    }

    let pivot = median3_idx(v, is_less, medians[0], medians[1], medians[2]);
    pivot_partition(v, pivot, is_less)
}
