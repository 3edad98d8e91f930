//! Discretization toolkit: label a continuous numeric column with
//! interchangeable binning strategies
//!
//! This facade re-exports the full public surface of the workspace
//! crates: the binning strategies and catalog from `discretize-bins`,
//! the seeded one-dimensional clusterer from `discretize-kmeans`, and
//! the shared error and statistics types from `discretize-core`.
//!
//! # Example
//!
//! ```rust
//! use discretize::{Discretizer, EqualWidthBinner};
//!
//! let scores = vec![55.0, 61.0, 74.0, 88.0, 92.0];
//! let result = EqualWidthBinner::new(4).discretize(&scores).unwrap();
//!
//! assert_eq!(result.n_bins(), 4);
//! assert_eq!(result.label_of(0).to_string(), "Bin_1");
//! ```

pub use discretize_bins::{
    catalog, custom_binning, equal_frequency_binning, equal_width_binning, jenks_natural_breaks,
    kmeans_binning, quantile_binning, standard_deviation_binning, BinLabel, CustomBinner,
    Discretized, Discretizer, EqualFrequencyBinner, EqualWidthBinner, JenksBinner, KMeansBinner,
    OutOfRange, QuantileBinner, StdDevBinner,
};
pub use discretize_core::{Error, Result, SampleSummary};
pub use discretize_kmeans::{KMeans, KMeansFit};
