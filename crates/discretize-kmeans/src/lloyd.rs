//! Lloyd's algorithm with k-means++ seeding
//!
//! One-dimensional k-means over `f64` samples. Every run is fully
//! seeded, so a given configuration always produces the same fit. The
//! fit is restarted `n_init` times from different seedings and the
//! restart with the lowest inertia wins.

use discretize_core::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::types::KMeansFit;

/// Configurable one-dimensional k-means
///
/// Defaults mirror the common reference configuration: 10 seeded
/// restarts, 300 iterations per restart, convergence once no centroid
/// moves more than `1e-4`, seed 42.
///
/// # Examples
///
/// ```
/// use discretize_kmeans::KMeans;
///
/// let sample = vec![1.0, 1.2, 0.8, 10.0, 10.1, 9.9];
/// let fit = KMeans::new(2).fit(&sample).unwrap();
///
/// assert_eq!(fit.n_clusters(), 2);
/// // the two halves land in different clusters
/// assert_eq!(fit.assignments()[0], fit.assignments()[1]);
/// assert_ne!(fit.assignments()[0], fit.assignments()[3]);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    n_clusters: usize,
    n_init: usize,
    max_iter: usize,
    tol: f64,
    seed: u64,
}

impl KMeans {
    /// Create a clustering configuration for `n_clusters` clusters
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            n_init: 10,
            max_iter: 300,
            tol: 1e-4,
            seed: 42,
        }
    }

    /// Sets the number of seeded restarts (minimum 1)
    ///
    /// More restarts cost proportionally more time but reduce the
    /// chance of settling in a poor local optimum.
    pub fn n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    /// Sets the iteration cap per restart (minimum 1)
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter.max(1);
        self
    }

    /// Sets the convergence threshold on centroid movement
    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = tol.max(0.0);
        self
    }

    /// Set random seed for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit the clustering to a sample
    ///
    /// Rejects empty samples and cluster counts the sample cannot
    /// support. Values are assumed finite; filtering NaN is the
    /// caller's responsibility. The input does not need to be sorted.
    #[instrument(skip(self, sample), fields(n = sample.len(), k = self.n_clusters))]
    pub fn fit(&self, sample: &[f64]) -> Result<KMeansFit> {
        Error::check_non_empty(sample)?;
        Error::check_bin_count(self.n_clusters)?;
        if self.n_clusters > sample.len() {
            return Err(Error::bins_exceed_sample(self.n_clusters, sample.len()));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best = self.lloyd_once(sample, &mut rng);
        debug!("restart 0: {} iterations, inertia {:.6}", best.iterations(), best.inertia());

        for run in 1..self.n_init {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(run as u64));
            let fit = self.lloyd_once(sample, &mut rng);
            debug!("restart {}: {} iterations, inertia {:.6}", run, fit.iterations(), fit.inertia());
            if fit.inertia() < best.inertia() {
                best = fit;
            }
        }

        Ok(best)
    }

    /// One seeded restart: k-means++ seeding followed by Lloyd iteration
    fn lloyd_once(&self, sample: &[f64], rng: &mut StdRng) -> KMeansFit {
        let mut centroids = plus_plus_seeds(sample, self.n_clusters, rng);
        let mut assignments = vec![0usize; sample.len()];
        let mut iterations = 0;

        for iter in 0..self.max_iter {
            iterations = iter + 1;
            assign_nearest(sample, &centroids, &mut assignments);
            let shift = update_centroids(sample, &assignments, &mut centroids);
            if shift <= self.tol {
                break;
            }
        }

        // Assignments must match the final centroid positions
        assign_nearest(sample, &centroids, &mut assignments);
        let inertia = wcss(sample, &assignments, &centroids);
        KMeansFit::new(centroids, assignments, inertia, iterations)
    }
}

/// Choose initial centroids with probability proportional to squared
/// distance from the centroids already chosen
fn plus_plus_seeds(sample: &[f64], k: usize, rng: &mut StdRng) -> Vec<f64> {
    let n = sample.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(sample[rng.gen_range(0..n)]);

    let mut min_dists = vec![f64::MAX; n];
    while centroids.len() < k {
        let last = centroids[centroids.len() - 1];
        for (d, &x) in min_dists.iter_mut().zip(sample) {
            let dist = (x - last).powi(2);
            if dist < *d {
                *d = dist;
            }
        }

        let total: f64 = min_dists.iter().sum();
        if total <= 0.0 {
            // Every point already coincides with a centroid
            centroids.push(sample[rng.gen_range(0..n)]);
            continue;
        }

        let mut target = rng.gen::<f64>() * total;
        let mut chosen = n - 1;
        for (i, &d) in min_dists.iter().enumerate() {
            target -= d;
            if target <= 0.0 {
                chosen = i;
                break;
            }
        }
        centroids.push(sample[chosen]);
    }

    centroids
}

/// Assign each value to its nearest centroid, lowest identifier on ties
fn assign_nearest(sample: &[f64], centroids: &[f64], assignments: &mut [usize]) {
    for (slot, &x) in assignments.iter_mut().zip(sample) {
        let mut best = 0usize;
        let mut best_dist = (x - centroids[0]).powi(2);
        for (c, &center) in centroids.iter().enumerate().skip(1) {
            let dist = (x - center).powi(2);
            if dist < best_dist {
                best_dist = dist;
                best = c;
            }
        }
        *slot = best;
    }
}

/// Move each centroid to the mean of its members, returning the
/// largest movement seen
///
/// A cluster that lost all its members is reseeded to the sample point
/// currently farthest from its own centroid.
fn update_centroids(sample: &[f64], assignments: &[usize], centroids: &mut [f64]) -> f64 {
    let k = centroids.len();
    let mut sums = vec![0.0f64; k];
    let mut counts = vec![0usize; k];
    for (&x, &c) in sample.iter().zip(assignments) {
        sums[c] += x;
        counts[c] += 1;
    }

    let mut shift = 0.0f64;
    for c in 0..k {
        let new = if counts[c] > 0 {
            sums[c] / counts[c] as f64
        } else {
            farthest_point(sample, assignments, centroids)
        };
        shift = shift.max((new - centroids[c]).abs());
        centroids[c] = new;
    }
    shift
}

/// Sample point with the largest squared distance to its assigned centroid
fn farthest_point(sample: &[f64], assignments: &[usize], centroids: &[f64]) -> f64 {
    let mut best = sample[0];
    let mut best_dist = -1.0f64;
    for (&x, &c) in sample.iter().zip(assignments) {
        let dist = (x - centroids[c]).powi(2);
        if dist > best_dist {
            best_dist = dist;
            best = x;
        }
    }
    best
}

/// Within-cluster sum of squares for a finished assignment
fn wcss(sample: &[f64], assignments: &[usize], centroids: &[f64]) -> f64 {
    sample
        .iter()
        .zip(assignments)
        .map(|(&x, &c)| (x - centroids[c]).powi(2))
        .sum()
}
