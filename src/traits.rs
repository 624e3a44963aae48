//! Core traits and error types
//!
//! Every sketch in the crate implements the base [`Sketch`] trait. Fallible
//! histogram operations report [`HistogramError`]; combining two sketches
//! reports [`MergeError`].

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error during sketch merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Sketches have incompatible configurations
    IncompatibleConfig {
        expected: String,
        found: String,
    },
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::IncompatibleConfig { expected, found } => {
                write!(f, "incompatible config: expected {}, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Error raised by histogram and vector operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistogramError {
    /// A vector did not have the dimensionality the operation requires
    DimensionMismatch { expected: usize, found: usize },
    /// A coordinate index past the end of a vector
    IndexOutOfRange { index: usize, dimension: usize },
    /// An observation or query point had a NaN or infinite coordinate
    NonFinite,
    /// Construction parameters were rejected
    InvalidConfig(String),
}

impl core::fmt::Display for HistogramError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HistogramError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            HistogramError::IndexOutOfRange { index, dimension } => {
                write!(
                    f,
                    "index out of range: index {} for dimension {}",
                    index, dimension
                )
            }
            HistogramError::NonFinite => write!(f, "non-finite coordinate"),
            HistogramError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HistogramError {}

/// Core trait for all streaming sketches
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    ///
    /// Returns an error if sketches are incompatible
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
