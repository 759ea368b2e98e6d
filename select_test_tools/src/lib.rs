pub trait Selection {
    fn name() -> String;

    fn select_nth<T>(v: &mut [T], index: usize)
    where
        T: Ord;

    fn select_nth_by<T, F>(v: &mut [T], index: usize, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    fn partial_sort<T>(v: &mut [T], mid: usize)
    where
        T: Ord;

    fn partial_sort_by<T, F>(v: &mut [T], mid: usize, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
