//! In-place Lomuto quicksort for `i32` sequences.
//!
//! The pivot is always the last element of a range and elements equal to it go left, so the
//! sort is unstable. Already sorted input is the worst case for both time and recursion depth.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            type Error = crate::RangeError;

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(v: &mut [i32]) {
                sort(v);
            }

            #[inline]
            fn sort_range(
                v: &mut [i32],
                low: isize,
                high: isize,
            ) -> Result<(), crate::RangeError> {
                sort_range(v, low, high)
            }
        }
    };
}

mod error;
mod range;

pub mod partition;
pub mod quicksort;
pub mod quicksort_stack;

pub use error::RangeError;
pub use partition::{partition, swap};

/// Selects how the partitioned sub-ranges are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Driver {
    /// Recurse into both sides, see [`quicksort`].
    #[default]
    Recursive,
    /// Keep pending sides on an explicit stack, see [`quicksort_stack`].
    WorkList,
}

/// Sorts `v[low..=high]` in non-decreasing order with the default [`Driver`].
///
/// `low` and `high` are inclusive. The full range of `v` is `(0, v.len() - 1)`, which is
/// `(0, -1)` for an empty `v`. The range is validated before anything is moved, an invalid range
/// leaves `v` untouched.
///
/// The recursive driver can exhaust the call stack for large, already sorted inputs.
pub fn sort(v: &mut [i32], low: isize, high: isize) -> Result<(), RangeError> {
    sort_with(v, low, high, Driver::default())
}

/// Like [`sort`], with an explicit choice of driver.
#[tracing::instrument(level = "trace", skip(v), fields(len = v.len()))]
pub fn sort_with(
    v: &mut [i32],
    low: isize,
    high: isize,
    driver: Driver,
) -> Result<(), RangeError> {
    match driver {
        Driver::Recursive => quicksort::sort_range(v, low, high),
        Driver::WorkList => quicksort_stack::sort_range(v, low, high),
    }
}

/// Sorts all of `v` with the recursive driver.
pub fn sort_all(v: &mut [i32]) {
    quicksort::sort(v);
}
