#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() <= 3 {
        return;
    }

    // First byte picks the implementation, second byte the prefix length,
    // the rest is the input. mid == len is allowed and sorts everything.
    let impl_selector = data[0] % 8;
    let payload = data[2..data.len().min(130)]
        .iter()
        .map(|x| *x as i8)
        .collect::<Vec<i8>>();
    let mid = data[1] as usize % (payload.len() + 1);

    let mut v = payload.clone();
    match impl_selector {
        0 => select_comp::floyd_rivest::partial_sort(&mut v, mid),
        1 => select_comp::heap_select::partial_sort(&mut v, mid),
        2 => select_comp::median_of_3_random::partial_sort(&mut v, mid),
        3 => select_comp::median_of_medians::partial_sort(&mut v, mid),
        4 => select_comp::median_of_ninthers::partial_sort(&mut v, mid),
        5 => select_comp::pdqselect::branchy::partial_sort(&mut v, mid),
        6 => select_comp::pdqselect::branchless::partial_sort(&mut v, mid),
        7 => select_comp::rust_std::partial_sort(&mut v, mid),
        _ => unreachable!(),
    }

    let mut canonical = payload;
    canonical.sort_unstable();

    let mut re_sorted = v.clone();
    re_sorted.sort_unstable();

    let valid = v[..mid] == canonical[..mid]
        && (mid == 0 || v[mid..].iter().all(|x| *x >= v[mid - 1]))
        && re_sorted == canonical;

    if !valid {
        eprintln!("Canonical: {canonical:?}");
        eprintln!("Got:       {v:?}");
        eprintln!("Mid:       {mid}");
        panic!("partial sort disagrees with the sorted oracle");
    }
});
