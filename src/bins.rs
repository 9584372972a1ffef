//! Equal-width histogram binning.

use crate::error::{Error, Result};
use crate::range::Range;

/// Counts for one axis of a dataset partitioned into equal-width bins.
///
/// The domain is the axis's own bounding interval (not the display domain a
/// caller may have configured); a value landing on or beyond the upper
/// domain boundary folds into the last bin, and one below the lower
/// boundary into the first. Ratios are normalized by the total sample size,
/// so the sum of all bin ratios is 1.
#[derive(Debug, Clone)]
pub struct BinnedAxis {
    counts: Vec<u64>,
    max_count: u64,
    total: usize,
    low: f64,
    bin_width: f64,
}

impl BinnedAxis {
    /// Bin `values` over `domain` into `nbins` equal-width bins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty sample or zero bin count,
    /// and [`Error::InvalidRange`] for a degenerate domain.
    pub fn new(values: &[f64], domain: Range, nbins: usize) -> Result<Self> {
        if values.is_empty() || nbins == 0 {
            return Err(Error::EmptyData);
        }
        if domain.distance() == 0.0 {
            return Err(Error::InvalidRange { x: domain.x(), y: domain.y() });
        }

        let low = domain.low();
        let bin_width = domain.distance() / nbins as f64;

        let mut counts = vec![0_u64; nbins];
        let mut max_count = 0_u64;
        for &v in values {
            // Values at or beyond the upper domain boundary fold into the
            // last bin; values below the lower boundary saturate to the
            // first (the float-to-usize cast clamps negatives at zero). The
            // domain may be stale relative to the sample when a dataset was
            // grown after construction without a domain recompute.
            let bin = (((v - low) / bin_width).floor() as usize).min(nbins - 1);
            counts[bin] += 1;
            max_count = max_count.max(counts[bin]);
        }

        Ok(Self { counts, max_count, total: values.len(), low, bin_width })
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether there are no bins. Never true for a constructed value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Raw count for `bin`.
    #[must_use]
    pub fn count(&self, bin: usize) -> u64 {
        self.counts[bin]
    }

    /// Largest single-bin count.
    #[must_use]
    pub const fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Normalized ratio for `bin`: count divided by the total sample size.
    #[must_use]
    pub fn ratio(&self, bin: usize) -> f64 {
        self.counts[bin] as f64 / self.total as f64
    }

    /// Largest bin ratio.
    #[must_use]
    pub fn max_ratio(&self) -> f64 {
        self.max_count as f64 / self.total as f64
    }

    /// The `[low, high)` edges of `bin` in domain coordinates.
    #[must_use]
    pub fn edges(&self, bin: usize) -> (f64, f64) {
        (
            self.low + bin as f64 * self.bin_width,
            self.low + (bin as f64 + 1.0) * self.bin_width,
        )
    }

    /// Width of each bin in domain units.
    #[must_use]
    pub const fn bin_width(&self) -> f64 {
        self.bin_width
    }
}
