//! Adaptive selection with a branchless Lomuto partition kernel. The inner
//! loop trades data-dependent branches for an unconditional conditional-move
//! style swap, which pays off on inputs where the comparison outcome is
//! unpredictable.

use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

select_impl!("pdqselect_branchless");

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

/// Swap the values pointed to by `x` and `y` if `should_swap` is true.
#[inline(always)]
unsafe fn branchless_swap<T>(x: *mut T, y: *mut T, should_swap: bool) {
    // SAFETY: the caller must guarantee that `x` and `y` are valid for writes and properly aligned,
    // and part of the same allocation.

    // This is a branchless version of swap if.
    // The equivalent code with a branch would be:
    //
    // if should_swap {
    //     ptr::swap(x, y);
    // }

    // The goal is to generate cmov instructions here.
    let x_swap = if should_swap { y } else { x };
    let y_swap = if should_swap { x } else { y };

    let y_swap_copy = ManuallyDrop::new(ptr::read(y_swap));

    ptr::copy(x_swap, x, 1);
    ptr::copy_nonoverlapping(&*y_swap_copy, y, 1);
}

pub(crate) struct PartitionImpl;

impl super::Partition for PartitionImpl {
    fn partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = v.len();
        let v_base = v.as_mut_ptr();

        // SAFETY: The bounded loop ensures that `right` is always in-bounds. `v` and `pivot` can't
        // alias because of type system rules. `left` is guaranteed somewhere between `v_base` and
        // `right` making it also in-bounds.
        unsafe {
            let mut lt_count = 0;
            let mut right = v_base;

            let end = v_base.add(len);
            while right < end {
                let right_is_lt = is_less(&*right, pivot);

                let left = v_base.add(lt_count);
                branchless_swap(left, right, right_is_lt);

                lt_count += right_is_lt as usize;
                right = right.add(1);
            }

            lt_count
        }
    }
}
