/// Reinterprets `data` as little endian `i32` values, trailing bytes are dropped.
pub fn bytes_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Sorts a copy of `data` with `sort_fn` and checks it against `slice::sort_unstable`.
pub fn check_sort(data: &[u8], sort_fn: impl FnOnce(&mut [i32])) {
    let mut v = bytes_as_i32(data);

    let mut expected = v.clone();
    expected.sort_unstable();

    sort_fn(&mut v);

    assert_eq!(v, expected);
}
