//! Errors returned by the clustering routines.

use core::fmt;

/// Result alias for `lloyd`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by clustering primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The dataset has no instances.
    EmptyInput,

    /// Fewer instances than requested clusters.
    InsufficientData {
        /// Requested number of clusters.
        k: usize,
        /// Number of instances.
        n_items: usize,
    },

    /// Vectors of different lengths were compared.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// A cluster lost all of its members during the update step.
    EmptyCluster {
        /// Index of the empty cluster.
        cluster: usize,
    },

    /// A feature value is NaN or infinite.
    NonFinite {
        /// Index of the offending vector.
        index: usize,
    },

    /// A label does not index into the centroid set.
    InvalidLabel {
        /// The offending label.
        label: usize,
        /// Number of clusters.
        n_cluster: usize,
    },

    /// Labels and vectors differ in count.
    LabelCountMismatch {
        /// Number of vectors.
        expected: usize,
        /// Number of labels.
        found: usize,
    },

    /// The model has to be fitted before it can predict.
    NotFitted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InsufficientData { k, n_items } => {
                write!(f, "cannot create {k} clusters from {n_items} items")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::EmptyCluster { cluster } => {
                write!(f, "cluster {cluster} has no assigned instances")
            }
            Error::NonFinite { index } => {
                write!(f, "vector {index} contains a non-finite value")
            }
            Error::InvalidLabel { label, n_cluster } => {
                write!(f, "label {label} is out of range for {n_cluster} clusters")
            }
            Error::LabelCountMismatch { expected, found } => {
                write!(f, "expected {expected} labels, found {found}")
            }
            Error::NotFitted => write!(f, "model is not fitted, call fit() first"),
        }
    }
}

impl std::error::Error for Error {}
