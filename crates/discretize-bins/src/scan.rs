//! Half-open interval scan shared by the threshold strategies

use crate::types::OutOfRange;
use discretize_core::{Error, Result};

/// Assign each value the first half-open interval `[edges[i], edges[i+1])`
/// containing it, applying `policy` to values no interval covers
///
/// Expects at least two edges. Ascending order is the caller's problem;
/// the scan itself only requires that intervals be checked low to high.
pub(crate) fn assign_half_open(
    sample: &[f64],
    edges: &[f64],
    policy: OutOfRange,
) -> Result<Vec<usize>> {
    let n_bins = edges.len() - 1;
    let mut assignments = Vec::with_capacity(sample.len());

    for &value in sample {
        let hit = (0..n_bins).find(|&i| edges[i] <= value && value < edges[i + 1]);
        let idx = match hit {
            Some(i) => i,
            None => match policy {
                OutOfRange::FinalBin => n_bins - 1,
                OutOfRange::Clip => {
                    if value < edges[0] {
                        0
                    } else {
                        n_bins - 1
                    }
                }
                OutOfRange::Reject => {
                    return Err(Error::InvalidInput(format!(
                        "value {value} outside binning range [{}, {})",
                        edges[0], edges[n_bins]
                    )))
                }
            },
        };
        assignments.push(idx);
    }

    Ok(assignments)
}
