//! Jenks natural breaks binning

use crate::traits::Discretizer;
use crate::types::{BinLabel, Discretized};
use discretize_core::{distinct_count, lower_bound, sorted_copy, Error, Result};

/// Jenks natural breaks strategy
///
/// Finds the partition of the sorted sample into `n_bins` contiguous
/// classes that minimizes the total within-class sum of squared
/// deviations, by dynamic programming over break positions. Unlike
/// [`QuantileBinner`], which equalizes counts, this places breaks in
/// the gaps of the data, so a lone outlier gets its own bin instead of
/// dragging a quantile edge with it.
///
/// Edges follow the class-maximum convention: the reported list is the
/// sample minimum followed by the largest value of each class, so a
/// bin covers values above the previous class maximum up to and
/// including its own. Equal values always share a bin.
///
/// The search is `O(n_bins * n^2)` in the sample length.
///
/// [`QuantileBinner`]: crate::QuantileBinner
///
/// # Examples
///
/// ```
/// use discretize_bins::{Discretizer, JenksBinner};
///
/// let sample = vec![1.0, 2.0, 3.0, 4.0, 100.0];
/// let result = JenksBinner::new(2).discretize(&sample).unwrap();
///
/// // The outlier is isolated rather than grouped with 4.0
/// assert_eq!(result.assignments(), &[0, 0, 0, 0, 1]);
/// assert_eq!(result.edges().unwrap(), &[1.0, 4.0, 100.0]);
/// ```
pub struct JenksBinner {
    n_bins: usize,
}

impl JenksBinner {
    /// Create a natural-breaks strategy with the given bin count
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins }
    }
}

impl Discretizer for JenksBinner {
    fn discretize(&self, sample: &[f64]) -> Result<Discretized> {
        Error::check_non_empty(sample)?;
        Error::check_bin_count(self.n_bins)?;

        let sorted = sorted_copy(sample);
        let distinct = distinct_count(&sorted);
        if distinct < self.n_bins {
            return Err(Error::bins_exceed_distinct(self.n_bins, distinct));
        }

        let breaks = fisher_jenks(&sorted, self.n_bins);
        let uppers: Vec<f64> = (0..self.n_bins)
            .map(|j| sorted[breaks[j + 1] - 1])
            .collect();

        let mut edges = Vec::with_capacity(self.n_bins + 1);
        edges.push(sorted[0]);
        edges.extend_from_slice(&uppers);

        let assignments = sample
            .iter()
            .map(|&value| lower_bound(&uppers, value))
            .collect();

        Ok(Discretized::new(
            assignments,
            BinLabel::vocabulary(self.n_bins),
            Some(edges),
        ))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.n_bins)
    }
}

/// Optimal break positions for ascending data
///
/// Returns `n_classes + 1` indices `b_0 = 0 < b_1 < .. < b_k = n`;
/// class `j` spans `sorted[b_j..b_{j+1}]`. Minimizes the summed
/// within-class squared deviation using prefix sums for constant-time
/// segment cost.
fn fisher_jenks(sorted: &[f64], n_classes: usize) -> Vec<usize> {
    let n = sorted.len();
    let mut sum = vec![0.0f64; n + 1];
    let mut sum_sq = vec![0.0f64; n + 1];
    for (i, &x) in sorted.iter().enumerate() {
        sum[i + 1] = sum[i] + x;
        sum_sq[i + 1] = sum_sq[i] + x * x;
    }
    // Within-segment sum of squared deviations for sorted[a..b]
    let cost = |a: usize, b: usize| {
        let len = (b - a) as f64;
        let s = sum[b] - sum[a];
        ((sum_sq[b] - sum_sq[a]) - s * s / len).max(0.0)
    };

    // prev[i]: best cost of splitting sorted[0..i] into c - 1 classes
    let mut prev: Vec<f64> = (0..=n)
        .map(|i| if i == 0 { f64::INFINITY } else { cost(0, i) })
        .collect();
    let mut split = vec![vec![0usize; n + 1]; n_classes + 1];

    for c in 2..=n_classes {
        let mut cur = vec![f64::INFINITY; n + 1];
        for i in c..=n {
            for m in (c - 1)..i {
                let candidate = prev[m] + cost(m, i);
                if candidate < cur[i] {
                    cur[i] = candidate;
                    split[c][i] = m;
                }
            }
        }
        prev = cur;
    }

    let mut breaks = vec![0usize; n_classes + 1];
    breaks[n_classes] = n;
    for c in (2..=n_classes).rev() {
        breaks[c - 1] = split[c][breaks[c]];
    }
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_separated_clusters() {
        // Shuffled input from three tight groups
        let sample = [11.0, 1.0, 21.0, 2.0, 12.0, 22.0, 3.0, 10.0, 20.0];
        let result = JenksBinner::new(3).discretize(&sample).unwrap();

        assert_eq!(result.assignments(), &[1, 0, 2, 0, 1, 2, 0, 1, 2]);
        assert_eq!(result.edges().unwrap(), &[1.0, 3.0, 12.0, 22.0]);
        assert_eq!(result.counts(), vec![3, 3, 3]);
    }

    #[test]
    fn test_isolates_outlier() {
        let sample = [1.0, 2.0, 3.0, 4.0, 100.0];
        let result = JenksBinner::new(2).discretize(&sample).unwrap();
        assert_eq!(result.assignments(), &[0, 0, 0, 0, 1]);
        assert_eq!(result.edges().unwrap(), &[1.0, 4.0, 100.0]);
    }

    #[test]
    fn test_class_maximum_stays_in_its_class() {
        let sample = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
        let result = JenksBinner::new(2).discretize(&sample).unwrap();
        // 3.0 is the first class maximum and belongs to it
        assert_eq!(result.assignments(), &[0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_singleton_classes() {
        let sample = [10.0, 20.0, 30.0];
        let result = JenksBinner::new(3).discretize(&sample).unwrap();
        assert_eq!(result.assignments(), &[0, 1, 2]);
        // Class-maximum convention repeats the minimum for a singleton first class
        assert_eq!(result.edges().unwrap(), &[10.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_single_class_takes_everything() {
        let sample = [5.0, 1.0, 3.0];
        let result = JenksBinner::new(1).discretize(&sample).unwrap();
        assert!(result.assignments().iter().all(|&a| a == 0));
        assert_eq!(result.edges().unwrap(), &[1.0, 5.0]);
    }

    #[test]
    fn test_too_few_distinct_values_fails() {
        let err = JenksBinner::new(3)
            .discretize(&[1.0, 1.0, 2.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, Error::PreconditionFailed(_)));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(JenksBinner::new(2).discretize(&[]).is_err());
        assert!(JenksBinner::new(0).discretize(&[1.0, 2.0]).is_err());
    }
}
