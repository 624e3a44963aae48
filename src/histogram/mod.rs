//! Streaming histogram for multi-dimensional data
//!
//! A [`Histogram`] summarizes a stream of fixed-dimension [`Vector`]
//! observations in at most `max_bins` [`Bin`]s. Each bin is a weighted
//! centroid carrying a per-dimension variance and the bounding box of every
//! observation merged into it.
//!
//! # Queries
//!
//! - [`Histogram::mean`]: exact up to rounding
//! - [`Histogram::variance`]: exact until an observation lands on a merged
//!   representative, biased upward after that
//! - [`Histogram::cdf`]: fraction of observations componentwise below a point
//! - [`Histogram::quantile`] / [`Histogram::quantile_along`]: rank walks over bins
//!
//! # Example
//!
//! ```
//! use flowhist::histogram::{Histogram, Vector};
//!
//! let mut hist = Histogram::new(16, 2);
//!
//! for i in 0..100 {
//!     hist.add([i as f64, (i % 10) as f64]).unwrap();
//! }
//!
//! let mean = hist.mean().unwrap();
//! assert!((mean[0] - 49.5).abs() < 1e-9);
//!
//! let cdf = hist.cdf(&Vector::from([1000.0, 1000.0])).unwrap();
//! assert!((cdf - 1.0).abs() < 1e-9);
//! ```

mod bin;
mod config;
mod sketch;
mod vector;

pub use bin::Bin;
pub use config::{DimensionPolicy, HistogramConfig};
pub use sketch::Histogram;
pub use vector::Vector;
