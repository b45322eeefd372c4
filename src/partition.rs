use crate::{range, RangeError};

pub struct PartitionImpl;

impl sort_test_tools::Partition for PartitionImpl {
    fn name() -> String {
        "lomuto_branchy".into()
    }

    #[inline]
    fn partition(v: &mut [i32]) -> usize {
        lomuto_partition(v)
    }
}

/// Exchanges the values at `a` and `b`. Nothing else in `v` changes.
///
/// # Panics
///
/// Panics if `a` or `b` are out of bounds.
#[inline]
pub fn swap(v: &mut [i32], a: usize, b: usize) {
    v.swap(a, b);
}

/// Partitions `v[low..=high]` around the value at `high` and returns the final index of that
/// value.
///
/// Afterwards every element in `[low, p - 1]` is `<=` the pivot and every element in
/// `[p + 1, high]` is `>=` it. Elements equal to the pivot are moved to the left side. Elements
/// outside the range are not touched.
pub fn partition(v: &mut [i32], low: isize, high: isize) -> Result<usize, RangeError> {
    let bounds = range::partition_bounds(v.len(), low, high)?;
    let offset = bounds.start;

    Ok(offset + lomuto_partition(&mut v[bounds]))
}

/// Lomuto partition of `v` around its last element. Returns the final position of the pivot.
///
/// Performs only swaps and never allocates. `v` must not be empty.
pub(crate) fn lomuto_partition(v: &mut [i32]) -> usize {
    debug_assert!(!v.is_empty());

    let pivot_pos = v.len() - 1;
    let pivot = v[pivot_pos];

    // `v[..boundary]` holds the elements seen so far that are `<= pivot`.
    let mut boundary = 0;
    for j in 0..pivot_pos {
        if v[j] <= pivot {
            swap(v, boundary, j);
            boundary += 1;
        }
    }

    swap(v, boundary, pivot_pos);

    boundary
}
