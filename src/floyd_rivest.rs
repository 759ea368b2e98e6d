//! Floyd-Rivest selection (Algorithm 489, "The algorithm SELECT"). Above a
//! fixed bracket size the target's neighborhood is estimated from the sample
//! statistics of the bracket, the estimate bracket is resolved recursively,
//! and only then is the full bracket partitioned. Expected comparison count
//! is `n + min(k, n - k) + o(n)`.

use std::cmp::Ordering;

use crate::quickselect::pivot_partition;

select_impl!("floyd_rivest");

// Brackets larger than this are narrowed via the sampling estimate first.
const SAMPLING_THRESHOLD: isize = 600;

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

    select_loop(v, 0, v.len() as isize - 1, index as isize, is_less);
}

// Bracket indices are signed so that `right` may drop below `left` when the
// bracket collapses at the front.
fn select_loop<T, F>(v: &mut [T], mut left: isize, mut right: isize, k: isize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while right > left {
        if right - left > SAMPLING_THRESHOLD {
            // Estimate the neighborhood of the k-th element from the
            // bracket's order statistics and resolve it first, so the
            // partition below runs against a near-final pivot.
            let n = right - left + 1;
            let i = k - left + 1;
            let n_f = n as f64;
            let i_f = i as f64;
            let z = n_f.ln();
            let s = 0.5 * (2.0 * z / 3.0).exp();
            let mut sd = 0.5 * (z * s * (n_f - s) / n_f).sqrt();
            if i < n / 2 {
                sd = -sd;
            }

            // Truncation toward zero, then clamped back into the bracket.
            let new_left = left.max((k as f64 - i_f * s / n_f + sd) as isize);
            let new_right = right.min((k as f64 + (n_f - i_f) * s / n_f + sd) as isize);
            select_loop(v, new_left, new_right, k, is_less);
        }

        let bracket = &mut v[left as usize..(right + 1) as usize];
        let j = left + pivot_partition(bracket, (k - left) as usize, is_less) as isize;

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            right = j - 1;
        }
    }
}
