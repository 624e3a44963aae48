//! Weighted clusters of observations
//!
//! A [`Bin`] stands in for every observation collapsed into it: their
//! weighted mean, their per-dimension population variance, how many there
//! were, and the bounding box they span.

use super::vector::Vector;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A cluster of observations summarized by centroid, variance and bounding box
///
/// Bins are built from a single observation or by merging two bins. The
/// invariant `min[k] <= representative[k] <= max[k]` holds for every
/// dimension `k`.
///
/// # Example
///
/// ```
/// use flowhist::histogram::{Bin, Vector};
///
/// let a = Bin::from_observation(Vector::from([1.0, 10.0]));
/// let b = Bin::from_observation(Vector::from([3.0, 20.0]));
/// let c = a.merge(&b);
///
/// assert_eq!(c.weight(), 2.0);
/// assert_eq!(c.representative(), &Vector::from([2.0, 15.0]));
/// assert_eq!(c.variance(), &Vector::from([1.0, 25.0]));
/// assert_eq!(c.min(), &Vector::from([1.0, 10.0]));
/// assert_eq!(c.max(), &Vector::from([3.0, 20.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    representative: Vector,
    variance: Vector,
    weight: f64,
    min: Vector,
    max: Vector,
}

impl Bin {
    /// Create a weight-1 bin holding exactly one observation
    pub fn from_observation(observation: Vector) -> Self {
        Self {
            variance: Vector::zeros(observation.dimension()),
            weight: 1.0,
            min: observation.clone(),
            max: observation.clone(),
            representative: observation,
        }
    }

    /// Weighted mean of the absorbed observations
    pub fn representative(&self) -> &Vector {
        &self.representative
    }

    /// Per-dimension population variance of the absorbed observations
    pub fn variance(&self) -> &Vector {
        &self.variance
    }

    /// Number of absorbed observations
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Lower corner of the bounding box
    pub fn min(&self) -> &Vector {
        &self.min
    }

    /// Upper corner of the bounding box
    pub fn max(&self) -> &Vector {
        &self.max
    }

    /// Dimension of every vector held by this bin
    pub fn dimension(&self) -> usize {
        self.representative.dimension()
    }

    /// Count one more observation equal to the representative.
    ///
    /// The observation is exactly the representative point, so it lies inside
    /// the bounding box already. Variance is left as is, which overstates it
    /// once this bin holds more than one distinct point.
    pub(crate) fn absorb_duplicate(&mut self) {
        self.weight += 1.0;
    }

    /// Combine two bins into a new one
    ///
    /// The representative is the weighted mean and the variance is the
    /// combined-moments (parallel) variance:
    ///
    /// `var = (wa*(va + ma²) + wb*(vb + mb²)) / (wa + wb) - mean²`
    ///
    /// The subtraction loses precision when coordinates are large relative to
    /// their spread. Variance is clamped at zero and the mean to the merged
    /// bounding box, so rounding never breaks either invariant. Both bins must
    /// share a dimension.
    pub fn merge(&self, other: &Bin) -> Bin {
        let dimension = self.dimension();
        let weight = self.weight + other.weight;

        let mut mean = Vec::with_capacity(dimension);
        let mut variance = Vec::with_capacity(dimension);
        let mut min = Vec::with_capacity(dimension);
        let mut max = Vec::with_capacity(dimension);

        for k in 0..dimension {
            let (ma, mb) = (self.representative[k], other.representative[k]);
            let lo = self.min[k].min(other.min[k]);
            let hi = self.max[k].max(other.max[k]);
            let m = ((self.weight * ma + other.weight * mb) / weight).max(lo).min(hi);

            let second_moment = (self.weight * (self.variance[k] + ma * ma)
                + other.weight * (other.variance[k] + mb * mb))
                / weight;

            mean.push(m);
            variance.push((second_moment - m * m).max(0.0));
            min.push(lo);
            max.push(hi);
        }

        Bin {
            representative: Vector::new(mean),
            variance: Vector::new(variance),
            weight,
            min: Vector::new(min),
            max: Vector::new(max),
        }
    }

    /// Fraction of this bin's mass lying componentwise below `x`.
    ///
    /// Each dimension interpolates linearly across the bounding box and the
    /// per-dimension factors are multiplied, treating dimensions as independent
    /// within the bin.
    pub(crate) fn mass_below(&self, x: &Vector) -> f64 {
        let mut factor = 1.0;
        for k in 0..self.dimension() {
            let (lo, hi, xk) = (self.min[k], self.max[k], x[k]);
            if xk >= hi {
                continue;
            }
            if xk < lo {
                return 0.0;
            }
            factor *= (xk - lo) / (hi - lo);
        }
        factor
    }
}
