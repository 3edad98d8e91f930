//! Error types for binning operations
//!
//! Provides the single error type shared by all discretize crates.

use thiserror::Error;

/// Error type for binning operations
///
/// Binning has exactly two failure modes: the caller handed over
/// something unusable up front (`InvalidInput`), or the parameters are
/// individually valid but cannot be satisfied by this particular
/// sample (`PreconditionFailed`). No partial result is ever returned
/// alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Input data or parameter rejected before any computation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parameters incompatible with the supplied sample
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for the checks every strategy performs

impl Error {
    /// Error for an empty sample sequence
    pub fn empty_sample() -> Self {
        Self::InvalidInput("sample sequence is empty".to_string())
    }

    /// Check that the sample contains at least one value
    pub fn check_non_empty(sample: &[f64]) -> Result<()> {
        if sample.is_empty() {
            return Err(Self::empty_sample());
        }
        Ok(())
    }

    /// Check that a bin count is usable (at least one bin)
    pub fn check_bin_count(n_bins: usize) -> Result<()> {
        if n_bins < 1 {
            return Err(Self::InvalidInput(format!(
                "bin count must be at least 1, got {n_bins}"
            )));
        }
        Ok(())
    }

    /// Check that every value in the sample is finite
    pub fn check_finite(sample: &[f64]) -> Result<()> {
        if let Some(pos) = sample.iter().position(|x| !x.is_finite()) {
            return Err(Self::InvalidInput(format!(
                "non-finite value {} at index {pos}",
                sample[pos]
            )));
        }
        Ok(())
    }

    /// Error for a bin or cluster count the sample cannot support
    pub fn bins_exceed_sample(n_bins: usize, n_samples: usize) -> Self {
        Self::PreconditionFailed(format!("cannot form {n_bins} bins from {n_samples} samples"))
    }

    /// Error for a bin count the sample's distinct values cannot support
    pub fn bins_exceed_distinct(n_bins: usize, n_distinct: usize) -> Self {
        Self::PreconditionFailed(format!(
            "cannot form {n_bins} bins from {n_distinct} distinct values"
        ))
    }
}
