//! Construction parameters for [`Histogram`](super::Histogram)

use crate::traits::HistogramError;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// What `add` does with an observation it cannot accept
///
/// An observation is unacceptable when its dimension differs from the
/// histogram's or when one of its coordinates is NaN or infinite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DimensionPolicy {
    /// Return an error to the caller
    #[default]
    Reject,
    /// Drop the observation without counting it and return `Ok(())`
    Ignore,
}

/// Histogram configuration
///
/// # Example
///
/// ```
/// use flowhist::histogram::{DimensionPolicy, Histogram, HistogramConfig};
///
/// let config = HistogramConfig::new(64, 3).with_policy(DimensionPolicy::Ignore);
/// let mut hist = Histogram::with_config(config).unwrap();
///
/// // Wrong dimension: silently dropped
/// hist.add([1.0, 2.0]).unwrap();
/// assert_eq!(hist.count(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistogramConfig {
    /// Upper bound on the number of bins kept after every insertion
    pub max_bins: usize,
    /// Number of coordinates in every observation
    pub dimension: usize,
    /// Handling of observations that cannot be added
    pub on_mismatch: DimensionPolicy,
}

impl HistogramConfig {
    /// Create a configuration that rejects mismatched observations
    pub fn new(max_bins: usize, dimension: usize) -> Self {
        Self {
            max_bins,
            dimension,
            on_mismatch: DimensionPolicy::default(),
        }
    }

    /// Set the policy for observations that cannot be added
    pub fn with_policy(mut self, policy: DimensionPolicy) -> Self {
        self.on_mismatch = policy;
        self
    }

    /// Check that the parameters describe a usable histogram
    pub fn validate(&self) -> Result<(), HistogramError> {
        if self.max_bins == 0 {
            return Err(HistogramError::InvalidConfig(
                "max_bins must be positive".to_string(),
            ));
        }
        if self.dimension == 0 {
            return Err(HistogramError::InvalidConfig(
                "dimension must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
