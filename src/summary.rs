//! Box-plot quartile and outlier statistics.

use crate::error::{Error, Result};

/// Median of `xs[start..end]`, assuming that slice is sorted ascending.
fn median_of(xs: &[f64], start: usize, end: usize) -> f64 {
    let n = end - start;
    let mid = start + n / 2;
    if n % 2 == 0 {
        xs[mid - 1] + (xs[mid] - xs[mid - 1]) / 2.0
    } else {
        xs[mid]
    }
}

/// Five-number summary for a box plot, plus the derived outlier fences.
///
/// Quartiles use the non-interpolated sub-median convention: the sample is
/// sorted and split at `mid = n / 2`; the lower quartile is the median of
/// `[0, mid)` and the upper quartile is the median of the upper half, which
/// starts at `mid` when `mid` is even and at `mid + 1` when `mid` is odd.
/// The asymmetric split keeps the middle element from being counted twice;
/// the exact tie-break matters to downstream consumers, so do not swap in
/// an interpolated quartile method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPlotSummary {
    median: f64,
    lower_q: f64,
    upper_q: f64,
    min: f64,
    max: f64,
    quartile_range: f64,
}

impl BoxPlotSummary {
    /// Compute the summary from a sample.
    ///
    /// The sample is copied and sorted internally. A single-element sample
    /// is a valid degenerate case: all five statistics equal that element
    /// and the quartile range is zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty sample.
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::EmptyData);
        }

        if sample.len() == 1 {
            let v = sample[0];
            return Ok(Self {
                median: v,
                lower_q: v,
                upper_q: v,
                min: v,
                max: v,
                quartile_range: 0.0,
            });
        }

        let mut xs = sample.to_vec();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = xs.len();
        let mid = n / 2;

        let median = median_of(&xs, 0, n);
        let lower_q = median_of(&xs, 0, mid);
        // For n == 2 the skip-the-middle start would leave an empty upper
        // half; clamp so the upper quartile degrades to the larger value.
        let upper_start = if mid % 2 == 0 { mid } else { (mid + 1).min(n - 1) };
        let upper_q = median_of(&xs, upper_start, n);

        Ok(Self {
            median,
            lower_q,
            upper_q,
            min: xs[0],
            max: xs[n - 1],
            quartile_range: upper_q - lower_q,
        })
    }

    /// Median of the sample.
    #[must_use]
    pub const fn median(&self) -> f64 {
        self.median
    }

    /// Lower quartile.
    #[must_use]
    pub const fn lower_q(&self) -> f64 {
        self.lower_q
    }

    /// Upper quartile.
    #[must_use]
    pub const fn upper_q(&self) -> f64 {
        self.upper_q
    }

    /// Smallest sample value.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample value.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Quartile range (upper minus lower quartile).
    #[must_use]
    pub const fn quartile_range(&self) -> f64 {
        self.quartile_range
    }

    /// Lower whisker fence: `lower_q - 1.5 * quartile_range`.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_q - 1.5 * self.quartile_range
    }

    /// Upper whisker fence: `upper_q + 1.5 * quartile_range`.
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_q + 1.5 * self.quartile_range
    }

    /// Whether `value` falls outside the whisker fences.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_bound() || value > self.upper_bound()
    }
}
