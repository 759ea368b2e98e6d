use select_comp::floyd_rivest::SelectImpl;
use select_test_tools::{instantiate_select_tests, patterns};

instantiate_select_tests!(SelectImpl);

#[test]
#[cfg(not(miri))]
fn sampling_estimate_comp_count() {
    // With the sampled bracket the expected cost is a small constant factor
    // of the length.
    let v = patterns::random(100_000);
    let len = v.len();

    let mut comp_count = 0u64;
    let mut test_data = v.clone();
    select_comp::floyd_rivest::select_nth_by(&mut test_data, len / 2, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert!(comp_count < (len as u64) * 8);
}

#[test]
#[cfg(not(miri))]
fn bracket_estimate_stays_clamped() {
    // Target indices near the ends push the estimated bracket outside the
    // slice, it must be clamped back in.
    let v = patterns::random_shuffled(300_000);

    for index in [1, v.len() - 2] {
        let mut test_data = v.clone();
        select_comp::floyd_rivest::select_nth(&mut test_data, index);
        assert_eq!(test_data[index], index as i32);
    }
}
