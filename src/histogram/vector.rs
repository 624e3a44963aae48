//! Fixed-dimension points in real coordinate space

use crate::math;
use crate::traits::HistogramError;
use core::cmp::Ordering;
use core::ops::Index;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// An immutable point with a fixed number of coordinates
///
/// Equality is exact per coordinate with no tolerance. Ordering is the
/// componentwise partial order: `a <= b` iff every coordinate of `a` is at
/// most the matching coordinate of `b`.
///
/// # Example
///
/// ```
/// use flowhist::histogram::Vector;
///
/// let a = Vector::from([0.0, 0.0]);
/// let b = Vector::from([3.0, 4.0]);
///
/// assert_eq!(a.dimension(), 2);
/// assert_eq!(b.value(1), Ok(4.0));
/// assert_eq!(a.distance(&b), Ok(5.0));
/// assert!(a.less_or_equal(&b));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Create a vector from its coordinates
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Create the origin of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            values: vec![0.0; dimension],
        }
    }

    /// Number of coordinates
    #[inline]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Coordinate `index`, bounds-checked
    pub fn value(&self, index: usize) -> Result<f64, HistogramError> {
        self.values
            .get(index)
            .copied()
            .ok_or(HistogramError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    /// All coordinates as a slice
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the coordinates
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consume the vector, returning its coordinates
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }

    /// Euclidean distance to `other`
    ///
    /// Fails with [`HistogramError::DimensionMismatch`] if the dimensions differ.
    pub fn distance(&self, other: &Vector) -> Result<f64, HistogramError> {
        if self.dimension() != other.dimension() {
            return Err(HistogramError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(self.distance_unchecked(other))
    }

    /// Euclidean distance between two vectors already known to share a dimension.
    #[inline]
    pub(crate) fn distance_unchecked(&self, other: &Vector) -> f64 {
        let sum: f64 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        math::sqrt(sum)
    }

    /// True iff every coordinate of `self` is `<=` the matching one in `other`
    ///
    /// Vectors of different dimension are never ordered, so this returns `false`.
    pub fn less_or_equal(&self, other: &Vector) -> bool {
        self.dimension() == other.dimension()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a <= b)
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        if self.less_or_equal(other) {
            Some(Ordering::Less)
        } else if other.less_or_equal(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl core::fmt::Display for Vector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
