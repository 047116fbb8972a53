//! K-means clustering implementation.

use core::fmt;
use std::time::Instant;

use log::{debug, info};
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::distance::{argmin, euclidean, squared_euclidean};
use crate::error::{Error, Result};
use crate::sampling::subsample;
use crate::traits::Clustering;
use crate::utils::{check_dimension, check_finite, inertia};

/// Policy for a cluster that has no members after assignment.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum EmptyCluster {
    /// Stop with [`Error::EmptyCluster`].
    #[default]
    Fail,
    /// Keep the previous centroid of the empty cluster.
    KeepPrevious,
}

/// Reason the refinement loop stopped.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Termination {
    /// No centroid changed in this iteration.
    CentroidsConverged {
        /// Zero-based iteration index.
        iteration: usize,
    },
    /// Centroids moved but no vector switched cluster in this iteration.
    LabelsConverged {
        /// Zero-based iteration index.
        iteration: usize,
    },
    /// Ran out of iterations.
    MaxIterations {
        /// Number of iterations run.
        iterations: usize,
    },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::CentroidsConverged { iteration } => {
                write!(f, "centroids converged in {iteration} iterations")
            }
            Termination::LabelsConverged { iteration } => {
                write!(f, "labels converged in {iteration} iterations")
            }
            Termination::MaxIterations { iterations } => {
                write!(f, "stopped after {iterations} iterations without convergence")
            }
        }
    }
}

/// Index of the centroid closest to `vec`, the lowest index wins a tie.
pub fn assign<T: Float>(vec: &[T], centroids: &[Vec<T>]) -> Result<usize> {
    let distances = centroids
        .iter()
        .map(|centroid| euclidean(centroid, vec))
        .collect::<Result<Vec<T>>>()?;
    Ok(argmin(&distances))
}

/// Assign vectors to centroids.
pub fn assign_all<T: Float>(vecs: &[Vec<T>], centroids: &[Vec<T>]) -> Result<Vec<usize>> {
    vecs.iter().map(|vec| assign(vec, centroids)).collect()
}

/// Compute new centroids as the mean of the assigned vectors.
///
/// `centroids` is left untouched, the result is a fresh set of the same size.
/// Labels must index into `centroids` and every vector must match the centroid
/// dimension.
pub fn update_centroids<T: Float>(
    vecs: &[Vec<T>],
    labels: &[usize],
    centroids: &[Vec<T>],
    empty_cluster: EmptyCluster,
) -> Result<Vec<Vec<T>>> {
    if labels.len() != vecs.len() {
        return Err(Error::LabelCountMismatch {
            expected: vecs.len(),
            found: labels.len(),
        });
    }
    let dim = centroids.first().map_or(0, Vec::len);
    let mut means = vec![vec![T::zero(); dim]; centroids.len()];
    let mut elements = vec![T::zero(); centroids.len()];
    for (vec, &label) in vecs.iter().zip(labels.iter()) {
        if label >= centroids.len() {
            return Err(Error::InvalidLabel {
                label,
                n_cluster: centroids.len(),
            });
        }
        if vec.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: vec.len(),
            });
        }
        elements[label] = elements[label] + T::one();
        means[label]
            .iter_mut()
            .zip(vec.iter())
            .for_each(|(m, &v)| *m = *m + v);
    }

    means
        .into_iter()
        .zip(elements)
        .enumerate()
        .map(|(i, (mut mean, element))| {
            if element == T::zero() {
                return match empty_cluster {
                    EmptyCluster::Fail => Err(Error::EmptyCluster { cluster: i }),
                    EmptyCluster::KeepPrevious => {
                        debug!("keep the previous centroid of empty cluster {}", i);
                        Ok(centroids[i].clone())
                    }
                };
            }
            mean.iter_mut().for_each(|m| *m = *m / element);
            Ok(mean)
        })
        .collect()
}

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct KMeans<T = f64> {
    n_cluster: usize,
    max_iter: usize,
    tolerance: T,
    empty_cluster: EmptyCluster,
    seed: Option<u64>,
    centroids: Vec<Vec<T>>,
    labels: Vec<usize>,
    termination: Option<Termination>,
    inertia: Option<T>,
}

impl<T: Float> Default for KMeans<T> {
    fn default() -> Self {
        Self::new(5, 100)
    }
}

impl<T: Float> KMeans<T> {
    /// Create a new KMeans instance.
    ///
    /// # Arguments
    ///
    /// * `n_cluster` - number of clusters
    /// * `max_iter` - max number of refinement iterations
    ///
    /// # Panics
    ///
    /// Panics if either argument is zero.
    pub fn new(n_cluster: usize, max_iter: usize) -> Self {
        if n_cluster < 1 {
            panic!("n_cluster must be greater than 0");
        }
        if max_iter < 1 {
            panic!("max_iter must be greater than 0");
        }
        Self {
            n_cluster,
            max_iter,
            tolerance: T::zero(),
            empty_cluster: EmptyCluster::default(),
            seed: None,
            centroids: Vec::new(),
            labels: Vec::new(),
            termination: None,
            inertia: None,
        }
    }

    /// Set the random seed used to place the initial centroids.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the policy for clusters that lose all of their members.
    pub fn with_empty_cluster(mut self, empty_cluster: EmptyCluster) -> Self {
        self.empty_cluster = empty_cluster;
        self
    }

    /// Treat a centroid as unchanged when its squared shift is at most `tolerance`.
    ///
    /// The default of zero compares centroids exactly.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is negative or NaN.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        if tolerance.is_nan() || tolerance < T::zero() {
            panic!("tolerance must not be negative");
        }
        self.tolerance = tolerance;
        self
    }

    /// Max number of refinement iterations.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Centroids of the last fit, empty before the first one.
    pub fn centroids(&self) -> &[Vec<T>] {
        &self.centroids
    }

    /// Labels of the last fit, empty before the first one.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Why the last fit stopped.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Within-cluster sum of squared distances of the last fit.
    pub fn inertia(&self) -> Option<T> {
        self.inertia
    }

    /// Assign new vectors to the fitted centroids.
    pub fn predict(&self, vecs: &[Vec<T>]) -> Result<Vec<usize>> {
        if self.centroids.is_empty() {
            return Err(Error::NotFitted);
        }
        assign_all(vecs, &self.centroids)
    }

    /// Fit with an explicit random source for the initial centroids.
    ///
    /// Vectors holding NaN or infinite values are rejected with
    /// [`Error::NonFinite`]. On error the previously fitted state is kept.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &mut self,
        vecs: &[Vec<T>],
        rng: &mut R,
    ) -> Result<(Vec<usize>, Vec<Vec<T>>)> {
        let dim = check_dimension(vecs)?;
        check_finite(vecs)?;
        debug!(
            "num of points: {}, dim: {}, num of clusters: {}",
            vecs.len(),
            dim,
            self.n_cluster
        );

        let mut centroids = self.place_centroids(vecs, rng)?;
        let mut labels = assign_all(vecs, &centroids)?;
        let mut termination = Termination::MaxIterations {
            iterations: self.max_iter,
        };

        debug!("start training");
        for i in 0..self.max_iter {
            let start_time = Instant::now();
            let new_centroids = update_centroids(vecs, &labels, &centroids, self.empty_cluster)?;
            let centroids_changed = self.centroids_changed(&centroids, &new_centroids);
            centroids = new_centroids;

            let new_labels = assign_all(vecs, &centroids)?;
            let labels_changed = new_labels != labels;
            labels = new_labels;
            debug!("iter {} takes {} s", i, start_time.elapsed().as_secs_f32());

            if !centroids_changed {
                termination = Termination::CentroidsConverged { iteration: i };
                break;
            }
            if !labels_changed {
                termination = Termination::LabelsConverged { iteration: i };
                break;
            }
        }
        info!("{}", termination);

        self.inertia = Some(inertia(vecs, &centroids, &labels));
        self.termination = Some(termination);
        self.centroids.clone_from(&centroids);
        self.labels.clone_from(&labels);
        Ok((labels, centroids))
    }

    /// Randomly pick `n_cluster` distinct vectors as the initial centroids.
    fn place_centroids<R: Rng + ?Sized>(
        &self,
        vecs: &[Vec<T>],
        rng: &mut R,
    ) -> Result<Vec<Vec<T>>> {
        if vecs.len() < self.n_cluster {
            return Err(Error::InsufficientData {
                k: self.n_cluster,
                n_items: vecs.len(),
            });
        }
        Ok(subsample(self.n_cluster, vecs, rng))
    }

    fn centroids_changed(&self, old: &[Vec<T>], new: &[Vec<T>]) -> bool {
        old.iter().zip(new.iter()).any(|(o, n)| {
            if self.tolerance > T::zero() {
                squared_euclidean(o, n) > self.tolerance
            } else {
                o != n
            }
        })
    }
}

impl<T: Float> Clustering<T> for KMeans<T> {
    fn fit(&mut self, data: &[Vec<T>]) -> Result<(Vec<usize>, Vec<Vec<T>>)> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.fit_with_rng(data, rng.as_mut())
    }

    fn n_clusters(&self) -> usize {
        self.n_cluster
    }
}
