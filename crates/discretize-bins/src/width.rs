//! Equal-width binning

use crate::traits::Discretizer;
use crate::types::{BinLabel, Discretized};
use discretize_core::{min_max, Error, Result};

/// Equal-width binning strategy
///
/// Splits the sample range into `n_bins` intervals of equal width and
/// labels each value with the first interval whose closed bounds
/// contain it. Both interval endpoints count as inside, so a value
/// sitting exactly on an interior boundary goes to the lower of the
/// two adjacent bins.
///
/// The last edge is pinned to the sample maximum, which keeps the
/// intervals covering the whole range even when the computed width
/// rounds short of it.
///
/// # Examples
///
/// ```
/// use discretize_bins::{Discretizer, EqualWidthBinner};
///
/// let sample = vec![0.0, 2.5, 5.0, 7.5, 10.0];
/// let result = EqualWidthBinner::new(2).discretize(&sample).unwrap();
///
/// assert_eq!(result.edges().unwrap(), &[0.0, 5.0, 10.0]);
/// // 5.0 sits on the boundary and stays in the lower bin
/// assert_eq!(result.label_of(2).to_string(), "Bin_1");
/// assert_eq!(result.label_of(4).to_string(), "Bin_2");
/// ```
pub struct EqualWidthBinner {
    n_bins: usize,
}

impl EqualWidthBinner {
    /// Create an equal-width strategy with the given bin count
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins }
    }
}

impl Discretizer for EqualWidthBinner {
    fn discretize(&self, sample: &[f64]) -> Result<Discretized> {
        Error::check_non_empty(sample)?;
        Error::check_bin_count(self.n_bins)?;

        let (min, max) = min_max(sample)?;
        let width = (max - min) / self.n_bins as f64;

        let mut edges = Vec::with_capacity(self.n_bins + 1);
        for i in 0..self.n_bins {
            edges.push(min + i as f64 * width);
        }
        // Ensure last bin includes max
        edges.push(max);

        let mut assignments = Vec::with_capacity(sample.len());
        for &value in sample {
            let mut idx = self.n_bins - 1;
            for i in 0..self.n_bins {
                if edges[i] <= value && value <= edges[i + 1] {
                    idx = i;
                    break;
                }
            }
            assignments.push(idx);
        }

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
