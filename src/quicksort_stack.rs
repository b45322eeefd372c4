//! Non-recursive quicksort with an explicit stack of pending ranges.
//!
//! Partitions exactly the same ranges as [`crate::quicksort`], only the order in which
//! independent ranges are visited differs, so the result is identical. The native stack usage is
//! constant.

use crate::partition::lomuto_partition;
use crate::{range, RangeError};

sort_impl!("lomuto_worklist_unstable");

/// Upper bound for the number of pending ranges, see [`quicksort`].
const MAX_PENDING: usize = usize::BITS as usize;

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

/// Returns the largest number of ranges that were pending at the same time.
///
/// After each partition the larger side is pushed first, so the smaller side is always the next
/// one to be partitioned. A pending range then waits only for the sub-ranges of its smaller
/// sibling, and every such step at least halves the length. With only ranges of length `>= 2`
/// ever pushed, at most `floor(log2(len)) + 1` ranges are pending, which [`MAX_PENDING`] covers
/// for every possible `len`.
fn quicksort(v: &mut [i32]) -> usize {
    if v.len() < 2 {
        return 0;
    }

    // Half-open `(start, end)` pairs into `v`.
    let mut pending = [(0usize, 0usize); MAX_PENDING];
    pending[0] = (0, v.len());
    let mut pending_len = 1;
    let mut peak = pending_len;

    while pending_len != 0 {
        pending_len -= 1;
        let (start, end) = pending[pending_len];

        let pivot_pos = start + lomuto_partition(&mut v[start..end]);
        tracing::trace!(start, end, pivot_pos, "partitioned");

        let left = (start, pivot_pos);
        let right = (pivot_pos + 1, end);

        let (smaller, larger) = if range_len(left) <= range_len(right) {
            (left, right)
        } else {
            (right, left)
        };

        for range in [larger, smaller] {
            if range_len(range) >= 2 {
                pending[pending_len] = range;
                pending_len += 1;
            }
        }

        peak = peak.max(pending_len);
    }

    tracing::trace!(len = v.len(), peak, "work-list drained");

    peak
}

#[inline]
fn range_len((start, end): (usize, usize)) -> usize {
    end - start
}
