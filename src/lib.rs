macro_rules! select_impl {
    ($name:expr) => {
        pub struct SelectImpl;

        impl select_test_tools::Selection for SelectImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn select_nth<T>(v: &mut [T], index: usize)
            where
                T: Ord,
            {
                select_nth(v, index);
            }

            #[inline]
            fn select_nth_by<T, F>(v: &mut [T], index: usize, compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                select_nth_by(v, index, compare);
            }

            #[inline]
            fn partial_sort<T>(v: &mut [T], mid: usize)
            where
                T: Ord,
            {
                partial_sort(v, mid);
            }

            #[inline]
            fn partial_sort_by<T, F>(v: &mut [T], mid: usize, compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                partial_sort_by(v, mid, compare);
            }
        }
    };
}

mod quickselect;

pub mod floyd_rivest;
pub mod heap_select;
pub mod median_of_3_random;
pub mod median_of_medians;
pub mod median_of_ninthers;
pub mod pdqselect;
pub mod rust_std;
