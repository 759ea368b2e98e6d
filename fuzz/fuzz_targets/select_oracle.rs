#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() <= 3 {
        return;
    }

    // First byte picks the implementation, second byte the target index,
    // the rest is the input.
    let impl_selector = data[0] % 8;
    let payload = data[2..data.len().min(130)]
        .iter()
        .map(|x| *x as i8)
        .collect::<Vec<i8>>();
    let index = data[1] as usize % payload.len();

    let mut v = payload.clone();
    match impl_selector {
        0 => select_comp::floyd_rivest::select_nth(&mut v, index),
        1 => select_comp::heap_select::select_nth(&mut v, index),
        2 => select_comp::median_of_3_random::select_nth(&mut v, index),
        3 => select_comp::median_of_medians::select_nth(&mut v, index),
        4 => select_comp::median_of_ninthers::select_nth(&mut v, index),
        5 => select_comp::pdqselect::branchy::select_nth(&mut v, index),
        6 => select_comp::pdqselect::branchless::select_nth(&mut v, index),
        7 => select_comp::rust_std::select_nth(&mut v, index),
        _ => unreachable!(),
    }

    let mut canonical = payload;
    canonical.sort_unstable();

    let mut re_sorted = v.clone();
    re_sorted.sort_unstable();

    let valid = v[index] == canonical[index]
        && v[..index].iter().all(|x| *x <= v[index])
        && v[index + 1..].iter().all(|x| *x >= v[index])
        && re_sorted == canonical;

    if !valid {
        eprintln!("Canonical: {canonical:?}");
        eprintln!("Got:       {v:?}");
        eprintln!("Index:     {index}");
        panic!("selection disagrees with the sorted oracle");
    }
});
