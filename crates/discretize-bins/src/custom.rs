//! Caller-supplied breakpoint binning

use crate::scan::assign_half_open;
use crate::traits::Discretizer;
use crate::types::{BinLabel, Discretized, OutOfRange};
use discretize_core::{Error, Result};

/// Custom binning strategy
///
/// Bins a sample against caller-supplied breakpoints using the same
/// half-open scan and [`OutOfRange`] policy as [`StdDevBinner`]: a
/// value goes to the first interval `[edges[i], edges[i+1])` that
/// contains it, and anything outside the edge span falls to the
/// policy. Edges must be finite, strictly ascending, and at least two.
///
/// [`StdDevBinner`]: crate::StdDevBinner
///
/// # Examples
///
/// ```
/// use discretize_bins::{CustomBinner, Discretizer};
///
/// let binner = CustomBinner::new(vec![0.0, 10.0, 20.0, 30.0]);
/// let result = binner.discretize(&[15.0, 3.0, 29.0]).unwrap();
///
/// assert_eq!(result.label_of(0).to_string(), "Bin_2");
/// assert_eq!(result.n_bins(), 3);
/// ```
pub struct CustomBinner {
    edges: Vec<f64>,
    out_of_range: OutOfRange,
}

impl CustomBinner {
    /// Create a custom strategy over the given breakpoints
    pub fn new(edges: Vec<f64>) -> Self {
        Self {
            edges,
            out_of_range: OutOfRange::default(),
        }
    }

    /// Sets the policy for values outside the edge span
    pub fn out_of_range(mut self, policy: OutOfRange) -> Self {
        self.out_of_range = policy;
        self
    }

    fn check_edges(&self) -> Result<()> {
        if self.edges.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "custom edges need at least 2 boundaries, got {}",
                self.edges.len()
            )));
        }
        Error::check_finite(&self.edges)?;
        if let Some(pos) = self.edges.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::InvalidInput(format!(
                "custom edges must be strictly ascending, got {} before {}",
                self.edges[pos],
                self.edges[pos + 1]
            )));
        }
        Ok(())
    }
}

impl Discretizer for CustomBinner {
    fn discretize(&self, sample: &[f64]) -> Result<Discretized> {
        Error::check_non_empty(sample)?;
        self.check_edges()?;

        let n_bins = self.edges.len() - 1;
        let assignments = assign_half_open(sample, &self.edges, self.out_of_range)?;

        Ok(Discretized::new(
            assignments,
            BinLabel::vocabulary(n_bins),
            Some(self.edges.clone()),
        ))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.edges.len().saturating_sub(1))
    }
}
