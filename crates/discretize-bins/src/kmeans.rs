//! K-means binning

use crate::traits::Discretizer;
use crate::types::{BinLabel, Discretized};
use discretize_core::Result;
use discretize_kmeans::KMeans;
use tracing::debug;

/// K-means binning strategy
///
/// Clusters the sample with seeded one-dimensional k-means and labels
/// each value by its cluster. The clusterer numbers clusters
/// arbitrarily, so they are relabeled in ascending centroid order
/// before labels are handed out; `Bin_1` is always the lowest-valued
/// cluster. Repeated calls with one seed produce identical results.
///
/// Unlike the edge-based strategies, clusters have no boundary
/// description, so the result reports no edges.
///
/// # Examples
///
/// ```
/// use discretize_bins::{Discretizer, KMeansBinner};
///
/// let sample = vec![10.0, 0.5, 10.2, 0.0, 5.0, 5.1];
/// let result = KMeansBinner::new(3).discretize(&sample).unwrap();
///
/// assert_eq!(result.label_of(3).to_string(), "Bin_1");
/// assert_eq!(result.label_of(0).to_string(), "Bin_3");
/// ```
pub struct KMeansBinner {
    n_bins: usize,
    seed: u64,
}

impl KMeansBinner {
    /// Create a k-means strategy with the given cluster count
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins, seed: 42 }
    }

    /// Set random seed for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Discretizer for KMeansBinner {
    fn discretize(&self, sample: &[f64]) -> Result<Discretized> {
        let fit = KMeans::new(self.n_bins).seed(self.seed).fit(sample)?;
        debug!(
            "k-means converged: inertia {:.6} after {} iterations",
            fit.inertia(),
            fit.iterations()
        );

        let rank = fit.rank_by_centroid();
        let assignments = fit.assignments().iter().map(|&c| rank[c]).collect();

        Ok(Discretized::new(
            assignments,
            BinLabel::vocabulary(self.n_bins),
            None,
        ))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.n_bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discretize_core::Error;

    #[test]
    fn test_labels_follow_value_order() {
        let sample = [10.0, 10.1, 0.0, 0.1, 5.0, 5.1];
        let result = KMeansBinner::new(3).discretize(&sample).unwrap();

        assert_eq!(result.assignments(), &[2, 2, 0, 0, 1, 1]);
        assert!(result.edges().is_none());
    }

    #[test]
    fn test_deterministic_across_calls() {
        let sample = [3.0, 1.0, 4.0, 1.5, 5.0, 9.0, 2.6, 5.3];
        let first = KMeansBinner::new(3).discretize(&sample).unwrap();
        let second = KMeansBinner::new(3).discretize(&sample).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_more_clusters_than_samples() {
        let err = KMeansBinner::new(5).discretize(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::PreconditionFailed(_)));
    }

    #[test]
    fn test_rejects_empty_sample() {
        assert!(matches!(
            KMeansBinner::new(2).discretize(&[]),
            Err(Error::InvalidInput(_))
        ));
    }
}
