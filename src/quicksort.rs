//! Basic recursive quicksort.
//!
//! Recursion depth follows the shape of the partition tree. With the last element as pivot,
//! sorted, reverse sorted and all equal inputs split off a single element per partition, so
//! they recurse once per element. Large inputs of that shape can exhaust the call stack, use
//! [`crate::quicksort_stack`] when that matters.

use crate::partition::lomuto_partition;
use crate::{range, RangeError};

sort_impl!("lomuto_recursive_unstable");

/// Sorts all of `v`.
#[inline]
pub fn sort(v: &mut [i32]) {
    quicksort(v);
}

/// Sorts `v[low..=high]`, leaving the rest of `v` untouched.
pub fn sort_range(v: &mut [i32], low: isize, high: isize) -> Result<(), RangeError> {
    let bounds = range::sort_bounds(v.len(), low, high)?;
    quicksort(&mut v[bounds]);

    Ok(())
}

fn quicksort(v: &mut [i32]) {
    if v.len() < 2 {
        return;
    }

    let pivot_pos = lomuto_partition(v);
    tracing::trace!(len = v.len(), pivot_pos, "partitioned");

    let (left, right) = v.split_at_mut(pivot_pos);

    quicksort(left);
    quicksort(&mut right[1..]);
}
