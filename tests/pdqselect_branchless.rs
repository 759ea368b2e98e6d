use select_comp::pdqselect::branchless::SelectImpl;
use select_test_tools::{instantiate_select_tests, patterns};

instantiate_select_tests!(SelectImpl);

#[test]
#[cfg(not(miri))]
fn many_duplicates_comp_count() {
    // Runs of equal elements are short-circuited by the equal-to-predecessor
    // check instead of being partitioned over and over.
    let v = patterns::random_uniform(100_000, 0..4);
    let len = v.len();

    let mut comp_count = 0u64;
    let mut test_data = v.clone();
    select_comp::pdqselect::branchless::select_nth_by(&mut test_data, len / 2, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert!(comp_count < (len as u64) * 8);
}
