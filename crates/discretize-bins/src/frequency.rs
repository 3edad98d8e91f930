//! Equal-frequency binning

use crate::traits::Discretizer;
use crate::types::{BinLabel, Discretized};
use discretize_core::{lower_bound, sorted_copy, Error, Result};

/// Equal-frequency binning strategy
///
/// Targets `n_bins` bins with the same number of values in each.
/// Assignment is rank-based: a value's bin is
/// `min(rank / floor(n / n_bins), n_bins - 1)` where `rank` counts the
/// sample values strictly less than it. Equal values therefore always
/// share a bin, and a heavy run of ties can leave neighboring bins
/// short. There is no fixed edge list; the result reports no edges.
///
/// # Examples
///
/// ```
/// use discretize_bins::{Discretizer, EqualFrequencyBinner};
///
/// let sample: Vec<f64> = (1..=10).map(f64::from).collect();
/// let result = EqualFrequencyBinner::new(5).discretize(&sample).unwrap();
///
/// assert_eq!(result.counts(), vec![2, 2, 2, 2, 2]);
/// assert!(result.edges().is_none());
/// ```
pub struct EqualFrequencyBinner {
    n_bins: usize,
}

impl EqualFrequencyBinner {
    /// Create an equal-frequency strategy with the given bin count
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins }
    }
}

impl Discretizer for EqualFrequencyBinner {
    fn discretize(&self, sample: &[f64]) -> Result<Discretized> {
        Error::check_non_empty(sample)?;
        Error::check_bin_count(self.n_bins)?;
        if sample.len() < self.n_bins {
            return Err(Error::bins_exceed_sample(self.n_bins, sample.len()));
        }

        let sorted = sorted_copy(sample);
        let per_bin = sample.len() / self.n_bins;

        let assignments = sample
            .iter()
            .map(|&value| (lower_bound(&sorted, value) / per_bin).min(self.n_bins - 1))
            .collect();

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
