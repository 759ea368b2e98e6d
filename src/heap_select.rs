//! Selection via a bounded max-heap of size `index + 1` over the prefix. The
//! remainder is scanned once, replacing the heap root whenever a smaller
//! candidate shows up, so cost is near `n log k`. Favorable when the target
//! index is a small fraction of the length, degrades as it grows.

use std::cmp::Ordering;

select_impl!("heap_select");

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

    let heap_len = index + 1;

    // Max-heap over the prefix, its root is the largest of the `heap_len`
    // smallest candidates seen so far.
    for i in (0..heap_len / 2).rev() {
        sift_down(&mut v[..heap_len], i, is_less);
    }

    for i in heap_len..v.len() {
        if is_less(&v[i], &v[0]) {
            // The displaced root lands outside the heap and stays there, it
            // is not smaller than anything still inside.
            v.swap(0, i);
            sift_down(&mut v[..heap_len], 0, is_less);
        }
    }

    // The root is the order statistic itself.
    v.swap(0, index);
}

fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
