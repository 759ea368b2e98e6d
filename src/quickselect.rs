//! Shared quickselect skeleton and partition primitives. Every strategy that
//! narrows a bracket around successive pivots goes through `quickselect` and
//! differs only in the partition function it plugs in.

/// Narrows `v` around pivot positions produced by `partition` until the
/// element at `index` is at its final sorted position.
///
/// `partition` must rearrange the slice around some pivot and return the
/// pivot's final position.
pub(crate) fn quickselect<T, F, P>(
    mut v: &mut [T],
    mut index: usize,
    is_less: &mut F,
    partition: &mut P,
) where
    F: FnMut(&T, &T) -> bool,
    P: FnMut(&mut [T], &mut F) -> usize,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        // The first and last order statistic don't need partitioning, a
        // linear scan does.
        if index == 0 {
            // We're free to use `unwrap()` here because we know v must not be empty.
            let min_idx = min_index(v, is_less).unwrap();
            v.swap(min_idx, 0);
            return;
        }

        if index == v.len() - 1 {
            let max_idx = max_index(v, is_less).unwrap();
            v.swap(max_idx, index);
            return;
        }

        let p = partition(v, is_less);

        if p == index {
            return;
        } else if p > index {
            v = &mut v[..p];
        } else {
            // Since `p < index < v.len()`, `p + 1` doesn't overflow and is
            // a valid index into the slice.
            v = &mut v[p + 1..];
            index -= p + 1;
        }
    }
}

/// Helper function that returns the index of the minimum element in the slice using the given
/// comparator function
pub(crate) fn min_index<T, F: FnMut(&T, &T) -> bool>(
    slice: &[T],
    is_less: &mut F,
) -> Option<usize> {
    slice
        .iter()
        .enumerate()
        .reduce(|acc, t| if is_less(t.1, acc.1) { t } else { acc })
        .map(|(i, _)| i)
}

/// Helper function that returns the index of the maximum element in the slice using the given
/// comparator function
pub(crate) fn max_index<T, F: FnMut(&T, &T) -> bool>(
    slice: &[T],
    is_less: &mut F,
) -> Option<usize> {
    slice
        .iter()
        .enumerate()
        .reduce(|acc, t| if is_less(acc.1, t.1) { t } else { acc })
        .map(|(i, _)| i)
}

/// Hoare partition of `v` around the element at `pivot`. Swap-only, so
/// move-only element types work and a panicking comparator can't duplicate
/// elements. Returns the pivot's final position.
pub(crate) fn pivot_partition<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(pivot < v.len());

    v.swap(0, pivot);

    let mut lo = 1;
    let mut hi = v.len() - 1;

    'outer: loop {
        loop {
            if lo > hi {
                break 'outer;
            }
            if !is_less(&v[lo], &v[0]) {
                break;
            }
            lo += 1;
        }

        // Can't run past the front, `is_less(&v[0], &v[0])` is false.
        while is_less(&v[0], &v[hi]) {
            hi -= 1;
        }

        if lo >= hi {
            break;
        }

        v.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }

    lo -= 1;
    v.swap(0, lo);
    lo
}

/// Places the median of the five elements at `a, b, c, d, e` into `c` with
/// the other four partitioned around it, using at most six comparisons.
pub(crate) fn partition5<T, F>(
    v: &mut [T],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    e: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[c], &v[a]) {
        v.swap(a, c);
    }
    if is_less(&v[d], &v[b]) {
        v.swap(b, d);
    }
    if is_less(&v[d], &v[c]) {
        v.swap(c, d);
        v.swap(a, b);
    }
    if is_less(&v[e], &v[b]) {
        v.swap(b, e);
    }
    if is_less(&v[e], &v[c]) {
        v.swap(c, e);
        if is_less(&v[c], &v[a]) {
            v.swap(a, c);
        }
    } else if is_less(&v[c], &v[b]) {
        v.swap(b, c);
    }
}

/// returns the index pointing to the median of the 3
/// elements `v[a]`, `v[b]` and `v[c]`
pub(crate) fn median3_idx<T, F: FnMut(&T, &T) -> bool>(
    v: &[T],
    is_less: &mut F,
    mut a: usize,
    b: usize,
    mut c: usize,
) -> usize {
    if is_less(&v[c], &v[a]) {
        std::mem::swap(&mut a, &mut c);
    }
    if is_less(&v[c], &v[b]) {
        return c;
    }
    if is_less(&v[b], &v[a]) {
        return a;
    }
    b
}
