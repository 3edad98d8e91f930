//! Sample statistics used by the binning strategies
//!
//! Thin wrappers over `statrs` that add the validation binning needs:
//! empty samples are rejected with an error instead of producing NaN,
//! and the sample standard deviation requires at least two values.

use crate::error::{Error, Result};
use statrs::statistics::Statistics;

/// Arithmetic mean of a sample
///
/// # Examples
///
/// ```
/// use discretize_core::stats::mean;
///
/// let m = mean(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m, 2.5);
/// ```
pub fn mean(sample: &[f64]) -> Result<f64> {
    Error::check_non_empty(sample)?;
    Ok(Statistics::mean(sample))
}

/// Sample standard deviation (n - 1 denominator)
///
/// Requires at least two values; a single observation has no spread.
pub fn sample_std(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "standard deviation requires at least 2 values, got {}",
            sample.len()
        )));
    }
    Ok(Statistics::std_dev(sample))
}

/// Minimum and maximum of a sample as a pair
pub fn min_max(sample: &[f64]) -> Result<(f64, f64)> {
    Error::check_non_empty(sample)?;
    Ok((Statistics::min(sample), Statistics::max(sample)))
}

/// Summary statistics for a sample
///
/// Bundles the quantities the strategies and their diagnostics keep
/// reaching for, computed in one pass over the data.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    count: usize,
    min: f64,
    max: f64,
    mean: f64,
    std_dev: Option<f64>,
}

impl SampleSummary {
    /// Compute summary statistics for a sample
    ///
    /// `std_dev` is `None` for a single-value sample.
    pub fn describe(sample: &[f64]) -> Result<Self> {
        Error::check_non_empty(sample)?;
        let (min, max) = min_max(sample)?;
        Ok(Self {
            count: sample.len(),
            min,
            max,
            mean: mean(sample)?,
            std_dev: sample_std(sample).ok(),
        })
    }

    /// Number of values in the sample
    pub fn count(&self) -> usize {
        self.count
    }

    /// Smallest value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Span of the sample (`max - min`)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation, `None` when count < 2
    pub fn std_dev(&self) -> Option<f64> {
        self.std_dev
    }
}

impl std::fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.std_dev {
            Some(sd) => write!(
                f,
                "n={}, min={:.4}, max={:.4}, mean={:.4}, std={:.4}",
                self.count, self.min, self.max, self.mean, sd
            ),
            None => write!(
                f,
                "n={}, min={:.4}, max={:.4}, mean={:.4}, std=n/a",
                self.count, self.min, self.max, self.mean
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_relative_eq!(mean(&[2.0, 4.0, 6.0]).unwrap(), 4.0);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_sample_std_uses_n_minus_one() {
        // Variance of {2, 4, 4, 4, 5, 5, 7, 9} is 32/7 with n-1
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std(&sample).unwrap();
        assert_relative_eq!(sd, (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_sample_std_needs_two_values() {
        assert!(sample_std(&[5.0]).is_err());
        assert!(sample_std(&[]).is_err());
        assert!(sample_std(&[5.0, 5.0]).is_ok());
    }

    #[test]
    fn test_min_max() {
        let (lo, hi) = min_max(&[3.0, -1.0, 4.0, 1.5]).unwrap();
        assert_eq!(lo, -1.0);
        assert_eq!(hi, 4.0);
    }

    #[test]
    fn test_describe() {
        let summary = SampleSummary::describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.count(), 5);
        assert_eq!(summary.min(), 1.0);
        assert_eq!(summary.max(), 5.0);
        assert_relative_eq!(summary.range(), 4.0);
        assert_relative_eq!(summary.mean(), 3.0);
        assert_relative_eq!(summary.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_describe_single_value() {
        let summary = SampleSummary::describe(&[42.0]).unwrap();
        assert_eq!(summary.count(), 1);
        assert_eq!(summary.min(), 42.0);
        assert_eq!(summary.max(), 42.0);
        assert!(summary.std_dev().is_none());
        assert!(summary.to_string().contains("std=n/a"));
    }
}
