//! Order statistics primitives
//!
//! Sorting and rank lookups shared by the rank-based strategies.
//! Everything here expects finite values; NaN comparisons fall back to
//! `Ordering::Equal`, which keeps the sort total but places no
//! guarantee on where NaNs land. Callers filter non-finite input
//! before reaching this module.

use crate::error::{Error, Result};

/// Return an ascending copy of the sample, leaving the input untouched
pub fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Number of elements in `sorted` strictly less than `value`
///
/// Equivalently the leftmost insertion index that keeps `sorted`
/// ascending.
pub fn lower_bound(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|&x| x < value)
}

/// Number of elements in `sorted` less than or equal to `value`
///
/// Equivalently the rightmost insertion index that keeps `sorted`
/// ascending.
pub fn upper_bound(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|&x| x <= value)
}

/// Count distinct values in ascending data
pub fn distinct_count(sorted: &[f64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Quantile of ascending data by linear interpolation
///
/// `phi` is the quantile level in `[0, 1]`. The quantile sits at
/// fractional rank `phi * (n - 1)` and interpolates linearly between
/// the two surrounding order statistics.
pub fn interpolated_quantile(sorted: &[f64], phi: f64) -> Result<f64> {
    Error::check_non_empty(sorted)?;
    if !(0.0..=1.0).contains(&phi) {
        return Err(Error::InvalidInput(format!(
            "quantile level must be in [0, 1], got {phi}"
        )));
    }
    let pos = phi * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_copy_leaves_input_alone() {
        let sample = [3.0, 1.0, 2.0];
        let sorted = sorted_copy(&sample);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(sample, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_bounds_on_ties() {
        let sorted = [1.0, 2.0, 2.0, 2.0, 5.0];
        assert_eq!(lower_bound(&sorted, 2.0), 1);
        assert_eq!(upper_bound(&sorted, 2.0), 4);
        assert_eq!(lower_bound(&sorted, 0.0), 0);
        assert_eq!(upper_bound(&sorted, 9.0), 5);
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_count(&[]), 0);
        assert_eq!(distinct_count(&[7.0]), 1);
        assert_eq!(distinct_count(&[1.0, 1.0, 1.0]), 1);
        assert_eq!(distinct_count(&[1.0, 1.0, 2.0, 3.0, 3.0]), 3);
    }

    #[test]
    fn test_interpolated_quantile_midpoints() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(interpolated_quantile(&sorted, 0.0).unwrap(), 1.0);
        assert_relative_eq!(interpolated_quantile(&sorted, 1.0).unwrap(), 4.0);
        assert_relative_eq!(interpolated_quantile(&sorted, 0.5).unwrap(), 2.5);
        // rank 0.25 * 3 = 0.75, between 1.0 and 2.0
        assert_relative_eq!(interpolated_quantile(&sorted, 0.25).unwrap(), 1.75);
    }

    #[test]
    fn test_interpolated_quantile_rejects_bad_level() {
        assert!(interpolated_quantile(&[1.0], -0.1).is_err());
        assert!(interpolated_quantile(&[1.0], 1.1).is_err());
        assert!(interpolated_quantile(&[], 0.5).is_err());
    }
}
