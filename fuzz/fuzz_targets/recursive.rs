#![no_main]

use libfuzzer_sys::fuzz_target;

use lomuto_sort::quicksort as test_sort;

fuzz_target!(|data: &[u8]| {
    lomuto_sort_fuzz::check_sort(data, test_sort::sort);
});
