//! Binning strategies for discretizing numeric samples
//!
//! This crate turns a numeric sample into ordered bin labels. It offers
//! multiple strategies for placing values into bins, from simple
//! equal-width intervals to variance-minimizing natural breaks, plus a
//! metadata catalog that describes each strategy's parameters and
//! dispatches on display name.
//!
//! # Key Features
//!
//! - **Multiple strategies**: equal-width, equal-frequency, quantile,
//!   Jenks natural breaks, standard-deviation, k-means, custom edges
//! - **Stable labeling**: bins are labeled `Bin_1..Bin_k` in ascending
//!   value order, whatever the strategy
//! - **Generic design**: works with any `&[f64]` slice
//! - **Deterministic**: the k-means strategy is seeded, so repeated
//!   calls agree
//! - **Metadata catalog**: per-strategy parameter schemas for driving
//!   parameter prompts, with bounds enforced on dispatch
//!
//! # Examples
//!
//! ## Equal-width binning
//!
//! ```rust
//! use discretize_bins::{Discretizer, EqualWidthBinner};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let result = EqualWidthBinner::new(5).discretize(&sample).unwrap();
//!
//! println!("{} values in {} bins", result.len(), result.n_bins());
//! for (value, label) in sample.iter().zip(result.labeled()) {
//!     println!("  {:.1} -> {}", value, label);
//! }
//! ```
//!
//! ## Name-based dispatch through the catalog
//!
//! ```rust
//! use discretize_bins::catalog;
//!
//! let sample = vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
//! let result = catalog::apply("Equal Frequency Binning", &sample, &[("n_bins", 3)]).unwrap();
//!
//! assert_eq!(result.counts(), vec![2, 2, 2]);
//! ```
//!
//! ## Out-of-range policies for explicit edges
//!
//! ```rust
//! use discretize_bins::{CustomBinner, Discretizer, OutOfRange};
//!
//! let binner = CustomBinner::new(vec![0.0, 10.0, 20.0]).out_of_range(OutOfRange::Clip);
//! let result = binner.discretize(&[-5.0, 5.0, 15.0, 99.0]).unwrap();
//!
//! assert_eq!(result.assignments(), &[0, 0, 1, 1]);
//! ```

pub mod catalog;
pub mod custom;
pub mod deviation;
pub mod frequency;
pub mod jenks;
#[cfg(feature = "kmeans")]
pub mod kmeans;
pub mod quantile;
mod scan;
pub mod traits;
pub mod types;
pub mod width;

// Re-export main types and traits
pub use catalog::{AlgorithmInfo, ParamKind, ParamSpec};
pub use custom::CustomBinner;
pub use deviation::StdDevBinner;
pub use frequency::EqualFrequencyBinner;
pub use jenks::JenksBinner;
pub use quantile::QuantileBinner;
pub use traits::Discretizer;
pub use types::{BinLabel, Discretized, OutOfRange};
pub use width::EqualWidthBinner;

#[cfg(feature = "kmeans")]
pub use kmeans::KMeansBinner;

// Convenience functions
/// Bin a sample into `n_bins` equal-width intervals
pub fn equal_width_binning(sample: &[f64], n_bins: usize) -> Result<Discretized> {
    EqualWidthBinner::new(n_bins).discretize(sample)
}

/// Bin a sample into `n_bins` bins holding equally many values
pub fn equal_frequency_binning(sample: &[f64], n_bins: usize) -> Result<Discretized> {
    EqualFrequencyBinner::new(n_bins).discretize(sample)
}

/// Bin a sample by seeded k-means clustering
#[cfg(feature = "kmeans")]
pub fn kmeans_binning(sample: &[f64], n_bins: usize) -> Result<Discretized> {
    KMeansBinner::new(n_bins).discretize(sample)
}

/// Bin a sample at interpolated quantile edges
pub fn quantile_binning(sample: &[f64], n_bins: usize) -> Result<Discretized> {
    QuantileBinner::new(n_bins).discretize(sample)
}

/// Bin a sample at variance-minimizing natural breaks
pub fn jenks_natural_breaks(sample: &[f64], n_bins: usize) -> Result<Discretized> {
    JenksBinner::new(n_bins).discretize(sample)
}

/// Bin a sample by distance from the mean in sample standard deviations
pub fn standard_deviation_binning(sample: &[f64], n_std: usize) -> Result<Discretized> {
    StdDevBinner::new(n_std).discretize(sample)
}

/// Bin a sample against caller-supplied ascending edges
pub fn custom_binning(sample: &[f64], edges: Vec<f64>) -> Result<Discretized> {
    CustomBinner::new(edges).discretize(sample)
}

pub use discretize_core::{Error, Result};
