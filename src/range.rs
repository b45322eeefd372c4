use std::ops::Range;

use crate::RangeError;

/// Converts the inclusive bounds of a sort call into a half-open index range of `v`.
///
/// Empty ranges are accepted when `high == low - 1`, which covers the full range `(0, -1)` of an
/// empty sequence.
pub(crate) fn sort_bounds(len: usize, low: isize, high: isize) -> Result<Range<usize>, RangeError> {
    checked_bounds(len, low, high, 0)
}

/// Same as [`sort_bounds`], but the range must hold at least the pivot.
pub(crate) fn partition_bounds(
    len: usize,
    low: isize,
    high: isize,
) -> Result<Range<usize>, RangeError> {
    checked_bounds(len, low, high, 1)
}

fn checked_bounds(
    len: usize,
    low: isize,
    high: isize,
    min_len: isize,
) -> Result<Range<usize>, RangeError> {
    let result = if low < 0 {
        Err(RangeError::NegativeLow { low, high })
    } else if high >= len as isize {
        // Slices never hold more than `isize::MAX` bytes, so `len` fits.
        Err(RangeError::HighOutOfBounds { low, high, len })
    } else if low > (high + 1) - min_len {
        // `high < len` so `high + 1` can't overflow.
        Err(RangeError::Inverted { low, high })
    } else {
        Ok((low as usize)..((high + 1) as usize))
    };

    if let Err(err) = &result {
        tracing::debug!(len, low, high, %err, "rejecting range");
    }

    result
}
