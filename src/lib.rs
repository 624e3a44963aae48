//! # Flowhist
//!
//! Bounded-memory streaming histograms for multi-dimensional data.
//!
//! Flowhist keeps a fixed budget of weighted bins over a stream of vector
//! observations and answers mean, variance, CDF and quantile queries at any
//! point in the stream without retaining the observations themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowhist::prelude::*;
//!
//! let mut hist = Histogram::new(4, 3);
//! hist.add([8.0, 1.0, 3.0]).unwrap();
//! hist.add([13.0, 23.0, 12.0]).unwrap();
//!
//! println!("Mean: {:?}", hist.mean());
//! println!("Variance: {:?}", hist.variance());
//! ```
//!
//! ## Distributed Computing
//!
//! [`Histogram`] implements the [`Sketch`](traits::Sketch) trait, so histograms
//! built on separate partitions can be merged:
//!
//! ```rust
//! use flowhist::histogram::Histogram;
//! use flowhist::traits::Sketch;
//!
//! let mut worker1 = Histogram::new(32, 2);
//! let mut worker2 = Histogram::new(32, 2);
//!
//! worker1.add([1.0, 2.0]).unwrap();
//! worker2.add([3.0, 4.0]).unwrap();
//!
//! worker1.merge(&worker2).unwrap();
//! assert_eq!(worker1.count(), 2.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support. Without it the crate is
//!   `no_std` and needs `alloc`.
//!
//! ## Logging
//!
//! Diagnostics are emitted through `tracing` under the `flowhist` target.
//! Install a subscriber to see rejected observations and merge steps.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

pub mod histogram;
pub mod traits;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::histogram::{Bin, DimensionPolicy, Histogram, HistogramConfig, Vector};
}

pub use histogram::{Histogram, Vector};
pub use traits::{HistogramError, MergeError};
