//! Median-of-medians selection, worst-case linear. Elements are grouped into
//! quintets whose medians are compacted to the front of the bracket; the
//! median of those medians is found by mutual recursion through the shared
//! skeleton using this very partition function, then used as the pivot for
//! the full bracket.

use std::cmp::Ordering;

use crate::quickselect::{partition5, pivot_partition, quickselect};

select_impl!("median_of_medians");

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
    if len < 5 {
        return pivot_partition(v, len / 2, is_less);
    }

    // Each quintet's median ends up at its center, then gets swapped into
    // the growing prefix of medians `v[..j]`.
    let mut j = 0;
    let mut i = 4;
    while i < len {
        partition5(v, i - 4, i - 3, i, i - 2, i - 1, is_less);
        v.swap(i, j);
        i += 5;
        j += 1;
    }

    // The partition function recurses through the skeleton with itself as
    // the strategy to place the median of medians at `j / 2`.
    quickselect(&mut v[..j], j / 2, is_less, &mut partition::<T, F>);

    pivot_partition(v, j / 2, is_less)
}
