//! Core error type and sample statistics for the discretize workspace
//!
//! This crate provides the foundation the binning strategies build on:
//! the shared [`Error`]/[`Result`] pair, validated sample statistics,
//! and order statistics primitives (sorting, rank lookups,
//! interpolated quantiles).
//!
//! # Example
//!
//! ```rust
//! use discretize_core::{SampleSummary, interpolated_quantile, sorted_copy};
//!
//! let data = vec![4.0, 1.0, 3.0, 2.0];
//!
//! let summary = SampleSummary::describe(&data).unwrap();
//! assert_eq!(summary.count(), 4);
//! assert_eq!(summary.range(), 3.0);
//!
//! let sorted = sorted_copy(&data);
//! let median = interpolated_quantile(&sorted, 0.5).unwrap();
//! assert_eq!(median, 2.5);
//! ```

pub mod error;
pub mod order;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};

pub use order::{distinct_count, interpolated_quantile, lower_bound, sorted_copy, upper_bound};

pub use stats::{mean, min_max, sample_std, SampleSummary};
