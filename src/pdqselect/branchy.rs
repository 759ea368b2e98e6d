//! Adaptive selection with the branchy Hoare partition kernel.

use std::cmp::Ordering;

select_impl!("pdqselect_branchy");

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
    super::select_nth_is_less::<T, _, PartitionImpl>(v, index, &mut |a, b| compare(a, b).is_lt());
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

pub(crate) struct PartitionImpl;

impl super::Partition for PartitionImpl {
    fn partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        // Two-pointer scan swapping out-of-order pairs inward from both ends.
        let mut l = 0;
        let mut r = v.len();
        loop {
            // Find the first element greater than or equal to the pivot.
            while l < r && is_less(&v[l], pivot) {
                l += 1;
            }

            // Find the last element smaller than the pivot.
            while l < r && !is_less(&v[r - 1], pivot) {
                r -= 1;
            }

            // Are we done?
            if l >= r {
                break;
            }

            // Swap the found pair of out-of-order elements.
            r -= 1;
            v.swap(l, r);
            l += 1;
        }

        l
    }
}
