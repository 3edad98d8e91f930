//! Standard-deviation binning

use crate::scan::assign_half_open;
use crate::traits::Discretizer;
use crate::types::{BinLabel, Discretized, OutOfRange};
use discretize_core::{mean, sample_std, Error, Result};

/// Standard-deviation binning strategy
///
/// Lays `2 * n_std + 1` thresholds at `mean + i * std` for `i` from
/// `-n_std` through `n_std`, making `2 * n_std` bins, and scans them
/// low to high with half-open intervals (lower edge inclusive). The
/// standard deviation is the sample (n - 1) estimate, so at least two
/// values are required.
///
/// Values beyond the outermost thresholds match no interval and fall
/// to the [`OutOfRange`] policy. The default `FinalBin` policy sends
/// them all to the last bin, including values below the range.
///
/// # Examples
///
/// ```
/// use discretize_bins::{Discretizer, StdDevBinner};
///
/// // mean 0, sample std exactly 1
/// let sample = vec![-1.0, 0.0, 1.0];
/// let result = StdDevBinner::new(1).discretize(&sample).unwrap();
///
/// assert_eq!(result.edges().unwrap(), &[-1.0, 0.0, 1.0]);
/// // the mean starts the upper bin; the max is past every threshold
/// assert_eq!(result.assignments(), &[0, 1, 1]);
/// ```
pub struct StdDevBinner {
    n_std: usize,
    out_of_range: OutOfRange,
}

impl StdDevBinner {
    /// Create a standard-deviation strategy spanning `n_std` deviations
    /// on each side of the mean
    pub fn new(n_std: usize) -> Self {
        Self {
            n_std,
            out_of_range: OutOfRange::default(),
        }
    }

    /// Sets the policy for values outside the threshold range
    pub fn out_of_range(mut self, policy: OutOfRange) -> Self {
        self.out_of_range = policy;
        self
    }
}

impl Discretizer for StdDevBinner {
    fn discretize(&self, sample: &[f64]) -> Result<Discretized> {
        Error::check_non_empty(sample)?;
        if self.n_std < 1 {
            return Err(Error::InvalidInput(format!(
                "standard deviation multiple must be at least 1, got {}",
                self.n_std
            )));
        }

        let center = mean(sample)?;
        let spread = sample_std(sample)?;

        let n_bins = 2 * self.n_std;
        let mut edges = Vec::with_capacity(n_bins + 1);
        for i in -(self.n_std as i64)..=(self.n_std as i64) {
            edges.push(center + i as f64 * spread);
        }

        let assignments = assign_half_open(sample, &edges, self.out_of_range)?;

        Ok(Discretized::new(
            assignments,
            BinLabel::vocabulary(n_bins),
            Some(edges),
        ))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(2 * self.n_std)
    }
}
