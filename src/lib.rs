//! K-means clustering with Lloyd's algorithm.
//!
//! ```rust
//! use lloyd::{Clustering, KMeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 0.0],
//!     vec![10.0, 1.0],
//! ];
//! let mut kmeans = KMeans::new(2, 100).with_seed(42);
//! let (labels, centroids) = kmeans.fit(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! assert_eq!(centroids.len(), 2);
//! ```

#![deny(missing_docs)]

pub mod distance;
pub mod error;
pub mod kmeans;
pub mod sampling;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
pub use kmeans::{EmptyCluster, KMeans, Termination};
pub use traits::Clustering;
