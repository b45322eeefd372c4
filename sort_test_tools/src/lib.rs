use std::error::Error;

pub trait Sort {
    type Error: Error + Send + 'static;

    fn name() -> String;

    fn sort(v: &mut [i32]);

    fn sort_range(v: &mut [i32], low: isize, high: isize) -> Result<(), Self::Error>;
}

/// A partition of the whole slice around its last element.
///
/// Returns the final position of the pivot. Everything left of it compares `<=` the pivot,
/// everything right of it `>=`.
pub trait Partition {
    fn name() -> String;

    fn partition(v: &mut [i32]) -> usize;
}

pub mod patterns;
