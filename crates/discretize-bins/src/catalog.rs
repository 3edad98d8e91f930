//! Algorithm metadata catalog and name-based dispatch
//!
//! A static, read-only table describing each scalar-parameter strategy:
//! display name, description, and parameter schema. The schema exists
//! so a host application can generate parameter prompts and bound their
//! values without knowing the strategies; [`apply`] dispatches on the
//! display name and resolves parameters against the same table, so the
//! two cannot drift apart silently.
//!
//! Custom binning is not cataloged. Its parameter is a breakpoint list,
//! not a scalar, so it does not fit the schema.

use crate::deviation::StdDevBinner;
use crate::frequency::EqualFrequencyBinner;
use crate::jenks::JenksBinner;
#[cfg(feature = "kmeans")]
use crate::kmeans::KMeansBinner;
use crate::quantile::QuantileBinner;
use crate::traits::Discretizer;
use crate::types::Discretized;
use crate::width::EqualWidthBinner;
use discretize_core::{Error, Result};
use lazy_static::lazy_static;
use std::fmt;
use tracing::debug;

/// Value type of a strategy parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Integer scalar
    Int,
}

/// Schema for one strategy parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter name, spelled the way the strategy constructor spells it
    pub name: &'static str,
    /// Value type
    pub kind: ParamKind,
    /// Value used when the caller supplies no override
    pub default: i64,
    /// Smallest accepted value (inclusive)
    pub min: i64,
    /// Largest accepted value (inclusive)
    pub max: i64,
    /// Human-readable description for parameter prompts
    pub description: &'static str,
}

impl fmt::Display for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (default {}, range {}..={})",
            self.name, self.default, self.min, self.max
        )
    }
}

/// One catalog entry: a strategy with its parameter schema
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmInfo {
    /// Display name, also the dispatch key for [`apply`]
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Accepted parameters in prompt order
    pub params: Vec<ParamSpec>,
}

impl fmt::Display for AlgorithmInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

fn n_bins_spec(default: i64, max: i64, description: &'static str) -> ParamSpec {
    ParamSpec {
        name: "n_bins",
        kind: ParamKind::Int,
        default,
        min: 2,
        max,
        description,
    }
}

fn build_catalog() -> Vec<AlgorithmInfo> {
    let mut entries = vec![
        AlgorithmInfo {
            name: "Equal Width Binning",
            description: "Split the value range into bins of equal width",
            params: vec![n_bins_spec(10, 50, "Number of bins")],
        },
        AlgorithmInfo {
            name: "Equal Frequency Binning",
            description: "Split the sample into bins holding equally many values",
            params: vec![n_bins_spec(10, 50, "Number of bins")],
        },
    ];
    #[cfg(feature = "kmeans")]
    entries.push(AlgorithmInfo {
        name: "KMeans Binning",
        description: "Cluster values with k-means and bin by cluster",
        params: vec![n_bins_spec(5, 20, "Number of clusters/bins")],
    });
    entries.push(AlgorithmInfo {
        name: "Quantile Binning",
        description: "Place bin edges at interpolated quantiles of the sample",
        params: vec![n_bins_spec(5, 20, "Number of bins")],
    });
    entries.push(AlgorithmInfo {
        name: "Jenks Natural Breaks",
        description: "Minimize within-bin variance over break positions",
        params: vec![n_bins_spec(5, 20, "Number of breaks")],
    });
    entries.push(AlgorithmInfo {
        name: "Standard Deviation Binning",
        description: "Bin by distance from the mean in standard deviations",
        params: vec![ParamSpec {
            name: "n_std",
            kind: ParamKind::Int,
            default: 1,
            min: 1,
            max: 3,
            description: "Number of standard deviations",
        }],
    });
    entries
}

lazy_static! {
    static ref CATALOG: Vec<AlgorithmInfo> = build_catalog();
}

/// All catalog entries in display order
pub fn entries() -> &'static [AlgorithmInfo] {
    &CATALOG
}

/// Look up an entry by display name
pub fn find(name: &str) -> Option<&'static AlgorithmInfo> {
    CATALOG.iter().find(|info| info.name == name)
}

/// Resolve each parameter of `info` to a value, in schema order
///
/// Overrides fall back to catalog defaults. Unknown override names and
/// values outside the schema bounds are rejected before any strategy
/// runs.
fn resolve(info: &AlgorithmInfo, overrides: &[(&str, i64)]) -> Result<Vec<i64>> {
    for (name, _) in overrides {
        if !info.params.iter().any(|spec| spec.name == *name) {
            return Err(Error::InvalidInput(format!(
                "unknown parameter '{}' for {}",
                name, info.name
            )));
        }
    }
    info.params
        .iter()
        .map(|spec| {
            let value = overrides
                .iter()
                .find(|(name, _)| *name == spec.name)
                .map_or(spec.default, |&(_, value)| value);
            if value < spec.min || value > spec.max {
                return Err(Error::InvalidInput(format!(
                    "{} must be between {} and {}, got {}",
                    spec.name, spec.min, spec.max, value
                )));
            }
            Ok(value)
        })
        .collect()
}

/// Run a cataloged strategy by display name
///
/// `overrides` holds `(parameter name, value)` pairs; parameters they
/// leave out use the catalog defaults.
///
/// # Examples
///
/// ```
/// let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let result =
///     discretize_bins::catalog::apply("Equal Width Binning", &sample, &[("n_bins", 3)]).unwrap();
///
/// assert_eq!(result.n_bins(), 3);
/// ```
pub fn apply(name: &str, sample: &[f64], overrides: &[(&str, i64)]) -> Result<Discretized> {
    let info = find(name)
        .ok_or_else(|| Error::InvalidInput(format!("unknown algorithm '{}'", name)))?;
    let params = resolve(info, overrides)?;
    debug!("applying {} with params {:?}", info.name, params);

    match info.name {
        "Equal Width Binning" => EqualWidthBinner::new(params[0] as usize).discretize(sample),
        "Equal Frequency Binning" => {
            EqualFrequencyBinner::new(params[0] as usize).discretize(sample)
        }
        #[cfg(feature = "kmeans")]
        "KMeans Binning" => KMeansBinner::new(params[0] as usize).discretize(sample),
        "Quantile Binning" => QuantileBinner::new(params[0] as usize).discretize(sample),
        "Jenks Natural Breaks" => JenksBinner::new(params[0] as usize).discretize(sample),
        "Standard Deviation Binning" => StdDevBinner::new(params[0] as usize).discretize(sample),
        other => Err(Error::InvalidInput(format!("unknown algorithm '{}'", other))),
    }
}
