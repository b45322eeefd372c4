/// A `[low, high]` range that does not describe a valid span of the sequence.
///
/// Every entry point validates its range before the first swap, so a call that returns this
/// error has not touched the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Range [{low}, {high}] starts below index 0")]
    NegativeLow { low: isize, high: isize },
    #[error("Range [{low}, {high}] ends past the last index of a sequence of length {len}")]
    HighOutOfBounds { low: isize, high: isize, len: usize },
    #[error("Range [{low}, {high}] is inverted")]
    Inverted { low: isize, high: isize },
}
