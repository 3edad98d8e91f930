//! Seeded one-dimensional k-means clustering
//!
//! This crate provides the clustering layer behind k-means binning:
//! k-means++ seeding, Lloyd iteration, and best-of-`n_init` restarts,
//! all driven by an explicit seed so that identical input always
//! produces the identical fit.
//!
//! # Example
//!
//! ```rust
//! use discretize_kmeans::KMeans;
//!
//! let sample = vec![1.0, 1.2, 0.8, 10.0, 10.1, 9.9];
//!
//! let fit = KMeans::new(2).seed(42).fit(&sample).unwrap();
//! assert_eq!(fit.assignments().len(), sample.len());
//!
//! // Rank clusters by centroid to get a value-ordered labeling
//! let rank = fit.rank_by_centroid();
//! let low = rank[fit.assignments()[0]];
//! let high = rank[fit.assignments()[3]];
//! assert!(low < high);
//! ```

pub mod lloyd;
pub mod types;

pub use lloyd::KMeans;
pub use types::KMeansFit;

pub use discretize_core::{Error, Result};
