//! Result type for a fitted clustering

/// A fitted one-dimensional k-means clustering
///
/// Holds the centroids in the order the algorithm produced them, the
/// per-value cluster assignments into that order, and the fit
/// diagnostics. Cluster identifiers are arbitrary; callers that need a
/// value-ordered view go through [`rank_by_centroid`].
///
/// [`rank_by_centroid`]: KMeansFit::rank_by_centroid
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    centroids: Vec<f64>,
    assignments: Vec<usize>,
    inertia: f64,
    iterations: usize,
}

impl KMeansFit {
    pub(crate) fn new(
        centroids: Vec<f64>,
        assignments: Vec<usize>,
        inertia: f64,
        iterations: usize,
    ) -> Self {
        Self {
            centroids,
            assignments,
            inertia,
            iterations,
        }
    }

    /// Cluster centers, indexed by raw cluster identifier
    pub fn centroids(&self) -> &[f64] {
        &self.centroids
    }

    /// Raw cluster identifier for each input value, in input order
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Number of clusters
    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Within-cluster sum of squared distances to the assigned centroid
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Iterations the winning restart ran before converging
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Map raw cluster identifiers to ranks in ascending centroid order
    ///
    /// `rank[raw_id]` is the position of that cluster's centroid when
    /// all centroids are sorted ascending. Equal centroids keep their
    /// raw order. This is what turns arbitrary cluster identifiers
    /// into a stable, value-ordered labeling.
    pub fn rank_by_centroid(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.centroids.len()).collect();
        order.sort_by(|&a, &b| {
            self.centroids[a]
                .partial_cmp(&self.centroids[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut rank = vec![0; order.len()];
        for (pos, &raw) in order.iter().enumerate() {
            rank[raw] = pos;
        }
        rank
    }
}

impl std::fmt::Display for KMeansFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "k-means fit: k={}, inertia={:.4}, {} iterations",
            self.centroids.len(),
            self.inertia,
            self.iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_centroid_orders_ascending() {
        let fit = KMeansFit::new(vec![9.0, 1.0, 5.0], vec![0, 1, 2, 1], 0.0, 3);
        // centroid 1.0 ranks first, 5.0 second, 9.0 last
        assert_eq!(fit.rank_by_centroid(), vec![2, 0, 1]);
    }

    #[test]
    fn test_rank_by_centroid_ties_keep_raw_order() {
        let fit = KMeansFit::new(vec![4.0, 4.0, 1.0], vec![0, 1, 2], 0.0, 1);
        assert_eq!(fit.rank_by_centroid(), vec![1, 2, 0]);
    }

    #[test]
    fn test_display() {
        let fit = KMeansFit::new(vec![1.0, 2.0], vec![0, 1], 12.5, 7);
        assert_eq!(fit.to_string(), "k-means fit: k=2, inertia=12.5000, 7 iterations");
    }
}
