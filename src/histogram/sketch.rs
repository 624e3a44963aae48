//! Bounded-bin streaming histogram over vector observations
//!
//! Every observation becomes a weight-1 [`Bin`] unless it exactly equals an
//! existing representative. Whenever the number of bins exceeds the configured
//! maximum, the two bins with the closest representatives are merged.
//!
//! Merging preserves the first and second moments of the data, so
//! [`Histogram::mean`] is exact up to rounding no matter how few bins are kept.
//! [`Histogram::variance`] is exact as long as no observation lands exactly on
//! a merged representative. Such an observation only bumps that bin's weight,
//! which also re-counts the bin's variance, so the estimate can only grow.
//! [`Histogram::cdf`] and the quantile queries lose accuracy as bins collapse.
//!
//! # Thread Safety
//!
//! `Histogram` has no interior mutability. Queries take `&self` and `add` takes
//! `&mut self`; for shared access across threads wrap it in `Arc<RwLock<_>>`.

use super::bin::Bin;
use super::config::{DimensionPolicy, HistogramConfig};
use super::vector::Vector;
use crate::traits::{HistogramError, MergeError, Sketch};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};

/// Streaming histogram of multi-dimensional observations
///
/// Holds at most `max_bins` bins. Each insertion costs one linear scan for an
/// exact duplicate plus, once the budget is full, an O(bins²) search for the
/// closest pair of bins.
///
/// # Example
///
/// ```
/// use flowhist::histogram::{Histogram, Vector};
///
/// let mut hist = Histogram::new(4, 3);
/// for point in [
///     [8.0, 1.0, 3.0],
///     [13.0, 23.0, 12.0],
///     [17.0, 45.0, 44.0],
///     [16.0, 23.0, 11.0],
///     [15.0, 87.0, 71.0],
/// ] {
///     hist.add(point).unwrap();
/// }
///
/// assert_eq!(hist.count(), 5.0);
/// assert_eq!(hist.num_bins(), 4);
///
/// let mean = hist.mean().unwrap();
/// assert!((mean[0] - 13.8).abs() < 1e-9);
///
/// let cdf = hist.cdf(&Vector::from([100.0, 100.0, 100.0])).unwrap();
/// assert!((cdf - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Histogram {
    config: HistogramConfig,
    /// Bins in insertion order, merged bins appended at the end
    bins: Vec<Bin>,
    /// Observations accepted so far
    total: u64,
}

impl Histogram {
    /// Create a histogram keeping at most `max_bins` bins of `dimension`-sized vectors
    ///
    /// Mismatched observations are rejected with an error. Use
    /// [`Histogram::with_config`] to choose another policy.
    ///
    /// # Panics
    ///
    /// Panics if `max_bins` or `dimension` is zero.
    pub fn new(max_bins: usize, dimension: usize) -> Self {
        assert!(max_bins > 0, "max_bins must be positive, got {}", max_bins);
        assert!(dimension > 0, "dimension must be positive, got {}", dimension);

        Self::build(HistogramConfig::new(max_bins, dimension))
    }

    /// Create a histogram from a validated configuration
    pub fn with_config(config: HistogramConfig) -> Result<Self, HistogramError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: HistogramConfig) -> Self {
        tracing::debug!(
            target: "flowhist",
            max_bins = config.max_bins,
            dimension = config.dimension,
            "histogram_created"
        );

        Self {
            config,
            bins: Vec::new(),
            total: 0,
        }
    }

    /// The configuration this histogram was built with
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    /// Number of coordinates per observation
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Upper bound on the number of bins
    pub fn max_bins(&self) -> usize {
        self.config.max_bins
    }

    /// Current number of bins
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Current bins, in collection order
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Total number of accepted observations
    pub fn count(&self) -> f64 {
        self.total as f64
    }

    /// Add one observation
    ///
    /// An observation exactly equal to an existing bin's representative only
    /// increments that bin's weight. Otherwise it becomes a new bin and the
    /// closest bins are merged until the bin budget holds again.
    ///
    /// Observations of the wrong dimension or with a NaN or infinite coordinate
    /// are handled according to the configured [`DimensionPolicy`].
    pub fn add<V: Into<Vector>>(&mut self, observation: V) -> Result<(), HistogramError> {
        let observation = observation.into();

        if let Err(err) = self.check(&observation) {
            return match self.config.on_mismatch {
                DimensionPolicy::Reject => {
                    tracing::debug!(target: "flowhist", error = %err, "observation_rejected");
                    Err(err)
                }
                DimensionPolicy::Ignore => {
                    tracing::debug!(target: "flowhist", error = %err, "observation_ignored");
                    Ok(())
                }
            };
        }

        self.total += 1;

        if let Some(bin) = self
            .bins
            .iter_mut()
            .find(|bin| bin.representative() == &observation)
        {
            bin.absorb_duplicate();
            return Ok(());
        }

        self.bins.push(Bin::from_observation(observation));
        self.trim();
        Ok(())
    }

    fn check(&self, observation: &Vector) -> Result<(), HistogramError> {
        if observation.dimension() != self.config.dimension {
            return Err(HistogramError::DimensionMismatch {
                expected: self.config.dimension,
                found: observation.dimension(),
            });
        }
        if observation.iter().any(|v| !v.is_finite()) {
            return Err(HistogramError::NonFinite);
        }
        Ok(())
    }

    /// Merge closest pairs until the bin budget holds.
    fn trim(&mut self) {
        while self.bins.len() > self.config.max_bins {
            let (i, j, distance) = self.closest_pair();

            // j > i, so removing j first leaves i in place
            let b = self.bins.remove(j);
            let a = self.bins.remove(i);
            let merged = a.merge(&b);

            tracing::trace!(
                target: "flowhist",
                first = i,
                second = j,
                distance,
                weight = merged.weight(),
                "bins_merged"
            );

            self.bins.push(merged);
        }
    }

    /// Pair of bins with the smallest representative distance.
    ///
    /// Scans `i` ascending then `j > i` ascending and keeps the first minimum.
    /// Requires at least two bins.
    fn closest_pair(&self) -> (usize, usize, f64) {
        let mut best = (0, 1, f64::INFINITY);
        for i in 0..self.bins.len() {
            for j in (i + 1)..self.bins.len() {
                let d = self.bins[i]
                    .representative()
                    .distance_unchecked(self.bins[j].representative());
                if d < best.2 {
                    best = (i, j, d);
                }
            }
        }
        best
    }

    /// Mean of all observations, or `None` before the first one
    pub fn mean(&self) -> Option<Vector> {
        if self.total == 0 {
            return None;
        }

        let n = self.total as f64;
        let mut sum = vec![0.0; self.config.dimension];
        for bin in &self.bins {
            for (k, s) in sum.iter_mut().enumerate() {
                *s += bin.weight() * bin.representative()[k];
            }
        }

        Some(Vector::new(sum.into_iter().map(|s| s / n).collect()))
    }

    /// Per-dimension population variance, or `None` before the first observation
    ///
    /// Combines bin moments as `E[X²] - E[X]²` where
    /// `E[X²] = Σ weight * (variance + representative²) / count`.
    ///
    /// An observation equal to a merged bin's representative adds weight
    /// without shrinking that bin's variance, so the result is then biased
    /// upward.
    pub fn variance(&self) -> Option<Vector> {
        let mean = self.mean()?;

        let n = self.total as f64;
        let mut second = vec![0.0; self.config.dimension];
        for bin in &self.bins {
            for (k, s) in second.iter_mut().enumerate() {
                let m = bin.representative()[k];
                *s += bin.weight() * (bin.variance()[k] + m * m);
            }
        }

        Some(Vector::new(
            second
                .into_iter()
                .zip(mean.iter())
                .map(|(s, m)| (s / n - m * m).max(0.0))
                .collect(),
        ))
    }

    /// Representative of the bin reached after walking `q * count` weight
    ///
    /// The walk follows the current collection order, which is insertion
    /// order spliced by merges, not value order. This only approximates a
    /// quantile when bins happen to be sorted; see [`Histogram::quantile_along`]
    /// for a walk in value order. `q` is clamped to `[0, 1]`. Returns `None`
    /// for an empty histogram or a NaN `q`.
    pub fn quantile(&self, q: f64) -> Option<Vector> {
        if self.total == 0 || q.is_nan() {
            return None;
        }
        self.walk(self.bins.iter(), q)
    }

    /// Quantile along one axis: bins sorted by `representative[axis]`, then walked
    ///
    /// Returns the full representative vector of the bin reached. Quantiles
    /// of multi-dimensional data have no single ordering, so only the `axis`
    /// coordinate of the result is meaningful as a quantile estimate.
    pub fn quantile_along(&self, q: f64, axis: usize) -> Result<Option<Vector>, HistogramError> {
        if axis >= self.config.dimension {
            return Err(HistogramError::IndexOutOfRange {
                index: axis,
                dimension: self.config.dimension,
            });
        }
        if self.total == 0 || q.is_nan() {
            return Ok(None);
        }

        let mut sorted: Vec<&Bin> = self.bins.iter().collect();
        sorted.sort_by(|a, b| a.representative()[axis].total_cmp(&b.representative()[axis]));

        Ok(self.walk(sorted.into_iter(), q))
    }

    fn walk<'a, I>(&self, bins: I, q: f64) -> Option<Vector>
    where
        I: Iterator<Item = &'a Bin>,
    {
        let mut remaining = q.clamp(0.0, 1.0) * self.total as f64;
        for bin in bins {
            remaining -= bin.weight();
            if remaining <= 0.0 {
                return Some(bin.representative().clone());
            }
        }
        None
    }

    /// Estimated fraction of observations componentwise below `x`
    ///
    /// Each bin contributes its weight times the product of per-dimension
    /// factors: `0` below the bin's box, `1` at or above it, and a linear
    /// interpolation across it. Returns `0.0` for an empty histogram.
    ///
    /// Fails with [`HistogramError::NonFinite`] if `x` has a NaN or infinite
    /// coordinate.
    pub fn cdf(&self, x: &Vector) -> Result<f64, HistogramError> {
        if x.dimension() != self.config.dimension {
            return Err(HistogramError::DimensionMismatch {
                expected: self.config.dimension,
                found: x.dimension(),
            });
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(HistogramError::NonFinite);
        }
        if self.total == 0 {
            return Ok(0.0);
        }

        let sum: f64 = self
            .bins
            .iter()
            .map(|bin| bin.weight() * bin.mass_below(x))
            .sum();

        Ok((sum / self.total as f64).min(1.0))
    }
}

impl core::fmt::Display for Histogram {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Total: {}", self.total)?;
        for bin in &self.bins {
            writeln!(
                f,
                "{} {} {}\t{}",
                bin.representative(),
                bin.min(),
                bin.max(),
                bin.weight()
            )?;
        }
        Ok(())
    }
}

impl Sketch for Histogram {
    type Item = Vector;

    fn update(&mut self, item: &Vector) {
        // rejections are already logged by add
        let _ = self.add(item.clone());
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.config.dimension != other.config.dimension {
            return Err(MergeError::IncompatibleConfig {
                expected: format!("dimension={}", self.config.dimension),
                found: format!("dimension={}", other.config.dimension),
            });
        }

        self.bins.extend(other.bins.iter().cloned());
        self.total += other.total;
        self.trim();

        tracing::debug!(
            target: "flowhist",
            merged = other.total,
            total = self.total,
            bins = self.bins.len(),
            "histograms_merged"
        );

        Ok(())
    }

    fn clear(&mut self) {
        self.bins.clear();
        self.total = 0;
    }

    fn size_bytes(&self) -> usize {
        // five vectors per bin, each holding `dimension` coordinates
        core::mem::size_of::<Self>()
            + self.bins.capacity() * core::mem::size_of::<Bin>()
            + self.bins.len() * 5 * self.config.dimension * core::mem::size_of::<f64>()
    }

    fn count(&self) -> u64 {
        self.total
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn sample() -> Vec<[f64; 3]> {
        vec![
            [8.0, 1.0, 3.0],
            [13.0, 23.0, 12.0],
            [17.0, 45.0, 44.0],
            [16.0, 23.0, 11.0],
            [15.0, 87.0, 71.0],
        ]
    }

    fn filled(max_bins: usize) -> Histogram {
        let mut hist = Histogram::new(max_bins, 3);
        for point in sample() {
            hist.add(point).unwrap();
        }
        hist
    }

    fn assert_close(actual: &Vector, expected: &[f64]) {
        assert_eq!(actual.dimension(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOLERANCE, "{} != {:?}", actual, expected);
        }
    }

    // ---- Insertion and trimming ----

    #[test]
    fn test_empty() {
        let hist = Histogram::new(4, 3);
        assert_eq!(hist.count(), 0.0);
        assert!(hist.mean().is_none());
        assert!(hist.variance().is_none());
        assert!(hist.quantile(0.5).is_none());
        assert_eq!(hist.quantile_along(0.5, 0), Ok(None));
        assert_eq!(hist.cdf(&Vector::from([1.0, 1.0, 1.0])), Ok(0.0));
        assert!(Sketch::is_empty(&hist));
    }

    #[test]
    #[should_panic(expected = "max_bins must be positive")]
    fn test_zero_bins_panics() {
        Histogram::new(0, 3);
    }

    #[test]
    fn test_with_config_accepts_huge_budget() {
        let mut hist = Histogram::with_config(HistogramConfig::new(usize::MAX, 1)).unwrap();
        hist.add([1.0]).unwrap();
        hist.add([2.0]).unwrap();

        assert_eq!(hist.max_bins(), usize::MAX);
        assert_eq!(hist.num_bins(), 2);
    }

    #[test]
    fn test_with_config_rejects_zero_dimension() {
        assert!(matches!(
            Histogram::with_config(HistogramConfig::new(4, 0)),
            Err(HistogramError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_trim_merges_closest_pair() {
        let hist = filled(4);

        assert_eq!(hist.count(), 5.0);
        assert_eq!(hist.num_bins(), 4);

        // [13,23,12] and [16,23,11] are closest; their merge goes last
        let bins = hist.bins();
        assert_eq!(bins[0].representative(), &Vector::from([8.0, 1.0, 3.0]));
        assert_eq!(bins[1].representative(), &Vector::from([17.0, 45.0, 44.0]));
        assert_eq!(bins[2].representative(), &Vector::from([15.0, 87.0, 71.0]));

        let merged = &bins[3];
        assert_eq!(merged.weight(), 2.0);
        assert_close(merged.representative(), &[14.5, 23.0, 11.5]);
        assert_close(merged.variance(), &[2.25, 0.0, 0.25]);
        assert_eq!(merged.min(), &Vector::from([13.0, 23.0, 11.0]));
        assert_eq!(merged.max(), &Vector::from([16.0, 23.0, 12.0]));
    }

    #[test]
    fn test_no_trim_under_budget() {
        let hist = filled(10);
        assert_eq!(hist.num_bins(), 5);
        assert!(hist.bins().iter().all(|b| b.weight() == 1.0));
    }

    #[test]
    fn test_single_bin_budget() {
        let hist = filled(1);
        assert_eq!(hist.num_bins(), 1);

        let bin = &hist.bins()[0];
        assert_eq!(bin.weight(), 5.0);
        assert_eq!(bin.min(), &Vector::from([8.0, 1.0, 3.0]));
        assert_eq!(bin.max(), &Vector::from([17.0, 87.0, 71.0]));
    }

    #[test]
    fn test_duplicates_share_a_bin() {
        let mut hist = Histogram::new(1, 2);
        for _ in 0..3 {
            hist.add([5.0, 5.0]).unwrap();
        }

        assert_eq!(hist.num_bins(), 1);
        let bin = &hist.bins()[0];
        assert_eq!(bin.weight(), 3.0);
        assert_eq!(bin.min(), &Vector::from([5.0, 5.0]));
        assert_eq!(bin.max(), &Vector::from([5.0, 5.0]));
        assert_eq!(bin.variance(), &Vector::from([0.0, 0.0]));
    }

    #[test]
    fn test_duplicate_of_merged_centroid() {
        let mut hist = Histogram::new(1, 1);
        hist.add([1.0]).unwrap();
        hist.add([3.0]).unwrap();
        // Exactly the merged representative
        hist.add([2.0]).unwrap();

        assert_eq!(hist.num_bins(), 1);
        assert_eq!(hist.bins()[0].weight(), 3.0);
        assert_eq!(hist.bins()[0].variance(), &Vector::from([1.0]));
        assert_eq!(hist.count(), 3.0);
    }

    #[test]
    fn test_merged_centroid_hit_keeps_bin_variance() {
        let mut hist = Histogram::new(1, 1);
        hist.add([3.0]).unwrap();
        hist.add([5.0]).unwrap();
        hist.add([4.0]).unwrap();

        let bin = &hist.bins()[0];
        assert_eq!(bin.representative(), &Vector::from([4.0]));
        assert_eq!(bin.variance(), &Vector::from([1.0]));
        assert_eq!(bin.weight(), 3.0);

        // Mean stays exact, variance reports 1.0 against an exact 2/3
        assert_close(&hist.mean().unwrap(), &[4.0]);
        assert_close(&hist.variance().unwrap(), &[1.0]);
    }

    // ---- Rejection policies ----

    #[test]
    fn test_reject_dimension_mismatch() {
        let mut hist = Histogram::new(4, 3);
        assert_eq!(
            hist.add([1.0, 2.0]),
            Err(HistogramError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(hist.count(), 0.0);
        assert_eq!(hist.num_bins(), 0);
    }

    #[test]
    fn test_reject_nan() {
        let mut hist = Histogram::new(4, 2);
        assert_eq!(hist.add([1.0, f64::NAN]), Err(HistogramError::NonFinite));
        assert_eq!(hist.count(), 0.0);
    }

    #[test]
    fn test_reject_infinite() {
        let mut hist = Histogram::new(1, 1);
        assert_eq!(hist.add([f64::INFINITY]), Err(HistogramError::NonFinite));
        assert_eq!(hist.add([f64::NEG_INFINITY]), Err(HistogramError::NonFinite));
        assert_eq!(hist.count(), 0.0);
        assert!(hist.mean().is_none());

        hist.add([1.0]).unwrap();
        assert_eq!(hist.mean(), Some(Vector::from([1.0])));
        assert_eq!(hist.cdf(&Vector::from([0.0])), Ok(0.0));
    }

    #[test]
    fn test_ignore_policy_drops_infinite() {
        let config = HistogramConfig::new(1, 1).with_policy(DimensionPolicy::Ignore);
        let mut hist = Histogram::with_config(config).unwrap();

        assert_eq!(hist.add([f64::INFINITY]), Ok(()));
        assert_eq!(hist.add([f64::NEG_INFINITY]), Ok(()));
        assert_eq!(hist.count(), 0.0);
        assert_eq!(hist.num_bins(), 0);
    }

    #[test]
    fn test_ignore_policy() {
        let config = HistogramConfig::new(4, 3).with_policy(DimensionPolicy::Ignore);
        let mut hist = Histogram::with_config(config).unwrap();

        assert_eq!(hist.add([1.0, 2.0]), Ok(()));
        assert_eq!(hist.add([1.0, 2.0, f64::NAN]), Ok(()));
        assert_eq!(hist.count(), 0.0);

        hist.add([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(hist.count(), 1.0);
    }

    // ---- Mean and variance ----

    #[test]
    fn test_mean_and_variance_exact_without_merges() {
        let hist = filled(5);

        assert_close(&hist.mean().unwrap(), &[13.8, 35.8, 28.2]);
        // population variance: Σ(x - mean)² / 5
        assert_close(&hist.variance().unwrap(), &[10.16, 848.96, 654.96]);
    }

    #[test]
    fn test_mean_and_variance_survive_merges() {
        for max_bins in 1..=5 {
            let hist = filled(max_bins);
            let mean = hist.mean().unwrap();
            let variance = hist.variance().unwrap();
            for (actual, expected) in mean.iter().zip([13.8, 35.8, 28.2]) {
                assert!((actual - expected).abs() < 1e-6, "bins={}", max_bins);
            }
            for (actual, expected) in variance.iter().zip([10.16, 848.96, 654.96]) {
                assert!((actual - expected).abs() < 1e-6, "bins={}", max_bins);
            }
        }
    }

    // ---- Quantiles ----

    #[test]
    fn test_quantile_walks_collection_order() {
        let hist = filled(4);

        // Order: [8,..], [17,..], [15,..], merged [14.5,..] (weight 2)
        assert_eq!(hist.quantile(0.0), Some(Vector::from([8.0, 1.0, 3.0])));
        assert_eq!(hist.quantile(0.5), Some(Vector::from([15.0, 87.0, 71.0])));
        assert_close(&hist.quantile(1.0).unwrap(), &[14.5, 23.0, 11.5]);
        assert!(hist.quantile(f64::NAN).is_none());
    }

    #[test]
    fn test_quantile_clamps_rank() {
        let hist = filled(4);
        assert_eq!(hist.quantile(-1.0), hist.quantile(0.0));
        assert_eq!(hist.quantile(7.0), hist.quantile(1.0));
    }

    #[test]
    fn test_quantile_along_sorts_by_axis() {
        let hist = filled(4);

        // Sorted on x: 8 (1), 14.5 (2), 15 (1), 17 (1)
        let median = hist.quantile_along(0.5, 0).unwrap().unwrap();
        assert_close(&median, &[14.5, 23.0, 11.5]);

        // Sorted on z: 3, 11.5 (2), 44, 71
        let top = hist.quantile_along(1.0, 2).unwrap().unwrap();
        assert_eq!(top, Vector::from([15.0, 87.0, 71.0]));

        assert_eq!(
            hist.quantile_along(0.5, 3),
            Err(HistogramError::IndexOutOfRange {
                index: 3,
                dimension: 3
            })
        );
    }

    #[test]
    fn test_quantile_along_one_dimension() {
        let mut hist = Histogram::new(100, 1);
        for i in (1..=100).rev() {
            hist.add([i as f64]).unwrap();
        }

        let median = hist.quantile_along(0.5, 0).unwrap().unwrap();
        assert_eq!(median[0], 50.0);
        let p90 = hist.quantile_along(0.9, 0).unwrap().unwrap();
        assert_eq!(p90[0], 90.0);
    }

    // ---- CDF ----

    #[test]
    fn test_cdf_extremes() {
        let hist = filled(4);

        let high = hist.cdf(&Vector::from([100.0, 100.0, 100.0])).unwrap();
        assert!((high - 1.0).abs() < TOLERANCE);

        let low = hist.cdf(&Vector::from([0.0, 0.0, 0.0])).unwrap();
        assert!(low.abs() < TOLERANCE);
    }

    #[test]
    fn test_cdf_interpolates_inside_bin() {
        let mut hist = Histogram::new(1, 1);
        hist.add([0.0]).unwrap();
        hist.add([10.0]).unwrap();

        assert!((hist.cdf(&Vector::from([2.5])).unwrap() - 0.25).abs() < TOLERANCE);
        assert!((hist.cdf(&Vector::from([5.0])).unwrap() - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_cdf_counts_singletons_at_or_below() {
        let hist = filled(5);

        // Only [8,1,3] is componentwise <= [10,10,10]
        let cdf = hist.cdf(&Vector::from([10.0, 10.0, 10.0])).unwrap();
        assert!((cdf - 0.2).abs() < TOLERANCE);
    }

    #[test]
    fn test_cdf_rejects_bad_input() {
        let hist = filled(4);
        assert_eq!(
            hist.cdf(&Vector::from([1.0])),
            Err(HistogramError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );
        assert_eq!(
            hist.cdf(&Vector::from([1.0, f64::NAN, 1.0])),
            Err(HistogramError::NonFinite)
        );
        assert_eq!(
            hist.cdf(&Vector::from([f64::INFINITY, 1.0, 1.0])),
            Err(HistogramError::NonFinite)
        );
        assert_eq!(
            hist.cdf(&Vector::from([1.0, 1.0, f64::NEG_INFINITY])),
            Err(HistogramError::NonFinite)
        );
    }

    // ---- Sketch trait ----

    #[test]
    fn test_sketch_merge() {
        let mut left = Histogram::new(4, 3);
        let mut right = Histogram::new(4, 3);
        for (i, point) in sample().into_iter().enumerate() {
            if i % 2 == 0 {
                left.add(point).unwrap();
            } else {
                right.add(point).unwrap();
            }
        }

        left.merge(&right).unwrap();

        assert_eq!(Sketch::count(&left), 5);
        assert!(left.num_bins() <= 4);
        assert_close(&left.mean().unwrap(), &[13.8, 35.8, 28.2]);
    }

    #[test]
    fn test_sketch_merge_dimension_mismatch() {
        let mut left = Histogram::new(4, 3);
        let right = Histogram::new(4, 2);

        assert!(matches!(
            left.merge(&right),
            Err(MergeError::IncompatibleConfig { .. })
        ));
    }

    #[test]
    fn test_sketch_update_and_clear() {
        let mut hist = Histogram::new(4, 2);
        hist.update(&Vector::from([1.0, 2.0]));
        hist.update(&Vector::from([1.0]));

        assert_eq!(Sketch::count(&hist), 1);
        assert!(hist.size_bytes() > 0);

        hist.clear();
        assert!(Sketch::is_empty(&hist));
        assert_eq!(hist.num_bins(), 0);
        assert!(hist.mean().is_none());
    }

    #[test]
    fn test_display_dump() {
        let mut hist = Histogram::new(4, 2);
        hist.add([1.0, 2.0]).unwrap();
        hist.add([1.0, 2.0]).unwrap();

        let dump = hist.to_string();
        assert!(dump.starts_with("Total: 2\n"));
        assert!(dump.contains("[1, 2] [1, 2] [1, 2]\t2"));
    }
}
