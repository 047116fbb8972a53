//! Clustering traits.

use crate::error::Result;

/// Common interface for hard clustering algorithms.
pub trait Clustering<T> {
    /// Fit the model to `data`.
    ///
    /// Returns one cluster label per input vector and the cluster centroids.
    fn fit(&mut self, data: &[Vec<T>]) -> Result<(Vec<usize>, Vec<Vec<T>>)>;

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;
}
