//! Compute the distance between vectors.

use num_traits::Float;

use crate::error::{Error, Result};

/// Squared Euclidean distance, the caller guarantees equal lengths.
#[inline]
pub fn squared_euclidean<T: Float>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter().zip(rhs.iter()).fold(T::zero(), |acc, (&l, &r)| {
        let diff = l - r;
        acc + diff * diff
    })
}

/// Euclidean distance between two vectors of the same length.
pub fn euclidean<T: Float>(lhs: &[T], rhs: &[T]) -> Result<T> {
    if lhs.len() != rhs.len() {
        return Err(Error::DimensionMismatch {
            expected: lhs.len(),
            found: rhs.len(),
        });
    }
    Ok(squared_euclidean(lhs, rhs).sqrt())
}

/// Index of the minimum value. Ties resolve to the first occurrence.
pub fn argmin<T: Float>(values: &[T]) -> usize {
    let mut index = 0;
    let mut minimum = T::infinity();
    for (i, &v) in values.iter().enumerate() {
        if v < minimum {
            minimum = v;
            index = i;
        }
    }
    index
}
