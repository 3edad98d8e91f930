//! Core types for binning results

use std::fmt;
use std::str::FromStr;

use discretize_core::{Error, Result};

/// Label for a single bin
///
/// Labels carry a 1-based ordinal and render as `Bin_<k>`. The label
/// set has no meaning beyond ordering: `Bin_k` always names the k-th
/// interval in ascending value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinLabel(usize);

impl BinLabel {
    /// Create a label from a 1-based ordinal (minimum 1)
    pub fn new(ordinal: usize) -> Self {
        Self(ordinal.max(1))
    }

    /// The 1-based ordinal
    pub fn ordinal(&self) -> usize {
        self.0
    }

    /// The 0-based position in a vocabulary
    pub fn index(&self) -> usize {
        self.0 - 1
    }

    /// The full vocabulary `Bin_1 ..= Bin_<n_bins>` in ascending order
    pub fn vocabulary(n_bins: usize) -> Vec<BinLabel> {
        (1..=n_bins).map(BinLabel).collect()
    }
}

impl fmt::Display for BinLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bin_{}", self.0)
    }
}

impl FromStr for BinLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let ordinal = s
            .strip_prefix("Bin_")
            .and_then(|rest| rest.parse::<usize>().ok())
            .filter(|&k| k >= 1)
            .ok_or_else(|| Error::InvalidInput(format!("not a bin label: {s:?}")))?;
        Ok(Self(ordinal))
    }
}

/// What to do with a value no interval covers
///
/// The scan-based strategies (standard-deviation and custom edges) use
/// half-open intervals over a fixed edge set, so values below the first
/// edge or at/above the last edge match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRange {
    /// Send every unmatched value to the final bin, whichever side it
    /// fell off. This reproduces the historical behavior where low
    /// outliers end up in the highest bin.
    #[default]
    FinalBin,
    /// Send values below the first edge to the first bin and values at
    /// or above the last edge to the final bin
    Clip,
    /// Fail with `InvalidInput` on the first unmatched value
    Reject,
}

/// The result of discretizing a sample
///
/// Holds a 0-based bin index per input value (same order as the
/// input), the label vocabulary in ascending bin order, and the bin
/// edges for the strategies that have them.
#[derive(Debug, Clone, PartialEq)]
pub struct Discretized {
    assignments: Vec<usize>,
    labels: Vec<BinLabel>,
    edges: Option<Vec<f64>>,
}

impl Discretized {
    /// Create a new result
    pub fn new(assignments: Vec<usize>, labels: Vec<BinLabel>, edges: Option<Vec<f64>>) -> Self {
        Self {
            assignments,
            labels,
            edges,
        }
    }

    /// 0-based bin index per input value, in input order
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Label vocabulary in ascending bin order
    pub fn labels(&self) -> &[BinLabel] {
        &self.labels
    }

    /// Bin edges in ascending order, when the strategy produces them
    pub fn edges(&self) -> Option<&[f64]> {
        self.edges.as_deref()
    }

    /// Number of bins in the vocabulary
    pub fn n_bins(&self) -> usize {
        self.labels.len()
    }

    /// Number of labeled values
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check if no values were labeled
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Label of the bin the i-th value landed in
    pub fn label_of(&self, i: usize) -> BinLabel {
        self.labels[self.assignments[i]]
    }

    /// Labels per input value, in input order
    pub fn labeled(&self) -> Vec<BinLabel> {
        self.assignments.iter().map(|&a| self.labels[a]).collect()
    }

    /// Number of values per bin, in ascending bin order
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.labels.len()];
        for &a in &self.assignments {
            counts[a] += 1;
        }
        counts
    }
}

impl fmt::Display for Discretized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discretized({} bins, n={})", self.n_bins(), self.len())
    }
}
