//! Helpers shared by the clustering routines.

use num_traits::Float;

use crate::distance::squared_euclidean;
use crate::error::{Error, Result};

/// Return the dimension shared by all vectors.
pub fn check_dimension<T>(vecs: &[Vec<T>]) -> Result<usize> {
    let dim = vecs.first().map(Vec::len).ok_or(Error::EmptyInput)?;
    match vecs.iter().find(|v| v.len() != dim) {
        Some(v) => Err(Error::DimensionMismatch {
            expected: dim,
            found: v.len(),
        }),
        None => Ok(dim),
    }
}

/// Reject vectors holding NaN or infinite values.
pub fn check_finite<T: Float>(vecs: &[Vec<T>]) -> Result<()> {
    match vecs.iter().position(|v| v.iter().any(|x| !x.is_finite())) {
        Some(index) => Err(Error::NonFinite { index }),
        None => Ok(()),
    }
}

/// Within-cluster sum of squared distances.
///
/// # Panics
///
/// Panics if a label is not a valid index into `centroids`.
pub fn inertia<T: Float>(vecs: &[Vec<T>], centroids: &[Vec<T>], labels: &[usize]) -> T {
    vecs.iter()
        .zip(labels.iter())
        .fold(T::zero(), |acc, (vec, &label)| {
            acc + squared_euclidean(vec, &centroids[label])
        })
}

/// Number of instances assigned to each cluster.
///
/// # Panics
///
/// Panics if a label is not below `n_cluster`.
pub fn cluster_sizes(labels: &[usize], n_cluster: usize) -> Vec<usize> {
    let mut sizes = vec![0; n_cluster];
    for &label in labels {
        sizes[label] += 1;
    }
    sizes
}
