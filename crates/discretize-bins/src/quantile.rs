//! Ordinal quantile binning

use crate::traits::Discretizer;
use crate::types::{BinLabel, Discretized};
use discretize_core::{
    distinct_count, interpolated_quantile, sorted_copy, upper_bound, Error, Result,
};

/// Quantile binning strategy
///
/// Computes `n_bins + 1` edges at evenly spaced quantile levels
/// (linear interpolation between order statistics) and assigns each
/// value the number of interior edges at or below it. A value exactly
/// on an interior edge therefore goes to the higher of the two
/// adjacent bins, the opposite of the equal-width rule.
///
/// Heavily tied data can produce repeated edges; the edge list is
/// reported as computed and the affected bins come out empty.
///
/// # Examples
///
/// ```
/// use discretize_bins::{Discretizer, QuantileBinner};
///
/// let sample = vec![0.0, 1.0, 2.0, 3.0, 4.0];
/// let result = QuantileBinner::new(2).discretize(&sample).unwrap();
///
/// assert_eq!(result.edges().unwrap(), &[0.0, 2.0, 4.0]);
/// // 2.0 sits on the interior edge and goes to the upper bin
/// assert_eq!(result.assignments(), &[0, 0, 1, 1, 1]);
/// ```
pub struct QuantileBinner {
    n_bins: usize,
}

impl QuantileBinner {
    /// Create a quantile strategy with the given bin count
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins }
    }
}

impl Discretizer for QuantileBinner {
    fn discretize(&self, sample: &[f64]) -> Result<Discretized> {
        Error::check_non_empty(sample)?;
        Error::check_bin_count(self.n_bins)?;

        let sorted = sorted_copy(sample);
        let distinct = distinct_count(&sorted);
        if distinct < self.n_bins {
            return Err(Error::bins_exceed_distinct(self.n_bins, distinct));
        }

        let edges = (0..=self.n_bins)
            .map(|i| interpolated_quantile(&sorted, i as f64 / self.n_bins as f64))
            .collect::<Result<Vec<f64>>>()?;

        let interior = &edges[1..self.n_bins];
        let assignments = sample
            .iter()
            .map(|&value| upper_bound(interior, value))
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_even_counts_on_unique_values() {
        let sample: Vec<f64> = (1..=10).map(f64::from).collect();
        let result = QuantileBinner::new(5).discretize(&sample).unwrap();
        assert_eq!(result.counts(), vec![2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_interpolated_edges() {
        let sample = [1.0, 2.0, 3.0, 4.0];
        let result = QuantileBinner::new(4).discretize(&sample).unwrap();

        let edges = result.edges().unwrap();
        assert_eq!(edges.len(), 5);
        assert_relative_eq!(edges[0], 1.0);
        assert_relative_eq!(edges[1], 1.75);
        assert_relative_eq!(edges[2], 2.5);
        assert_relative_eq!(edges[3], 3.25);
        assert_relative_eq!(edges[4], 4.0);
    }

    #[test]
    fn test_interior_edge_goes_to_upper_bin() {
        let sample = [0.0, 1.0, 2.0, 3.0, 4.0];
        let result = QuantileBinner::new(2).discretize(&sample).unwrap();
        assert_eq!(result.assignments(), &[0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_input_order_preserved() {
        let sample = [9.0, 1.0, 5.0, 3.0, 7.0];
        let result = QuantileBinner::new(5).discretize(&sample).unwrap();
        assert_eq!(result.len(), sample.len());
        // Smallest value first bin, largest value last bin
        assert_eq!(result.label_of(1).to_string(), "Bin_1");
        assert_eq!(result.label_of(0).to_string(), "Bin_5");
    }

    #[test]
    fn test_too_few_distinct_values_fails() {
        let err = QuantileBinner::new(3)
            .discretize(&[1.0, 1.0, 1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, Error::PreconditionFailed(_)));
        assert!(err.to_string().contains("2 distinct"));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(QuantileBinner::new(2).discretize(&[]).is_err());
        assert!(QuantileBinner::new(0).discretize(&[1.0, 2.0]).is_err());
    }
}
