//! Baseline wrapping the standard library's introselect
//! (`slice::select_nth_unstable`). The other strategies are measured against
//! this one.

use std::cmp::Ordering;

select_impl!("rust_std_select");

#[inline]
pub fn select_nth<T>(v: &mut [T], index: usize)
where
    T: Ord,
{
    if index >= v.len() {
        return;
    }

    v.select_nth_unstable(index);
}

#[inline]
pub fn select_nth_by<T, F>(v: &mut [T], index: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if index >= v.len() {
        return;
    }

    v.select_nth_unstable_by(index, |a, b| compare(a, b));
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

    v.select_nth_unstable_by(mid - 1, |a, b| compare(a, b));
    v[..mid].sort_unstable_by(|a, b| compare(a, b));
}
