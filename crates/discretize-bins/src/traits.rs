//! Core trait for binning strategies

use crate::types::Discretized;
use discretize_core::Result;

/// Trait for strategies that label a numeric sample with bins
///
/// A strategy is a stateless transform: one call takes the sample and
/// returns a [`Discretized`] result or fails, with no partial output.
/// Values are labeled in input order; the input does not need to be
/// sorted. Samples are assumed finite: dropping NaN and infinities is
/// the caller's responsibility, before the call.
pub trait Discretizer {
    /// Label every value in the sample
    fn discretize(&self, sample: &[f64]) -> Result<Discretized>;

    /// Get the target number of bins (if known up front)
    ///
    /// Strategies whose bin count derives from another parameter (for
    /// example a standard-deviation multiple) still report the count
    /// they will produce. Returns `None` only when the count depends
    /// on the data itself.
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
