//! Oriented intervals and the affine range-to-range transform.
//!
//! A [`Range`] keeps its endpoints in construction order, so a range may run
//! high-to-low; this is how inverted axes (e.g. screen y growing downward)
//! are expressed. The derived `low`/`high` bounds are used for containment,
//! while [`transform`] works on the raw endpoints and therefore flips
//! direction for free when either range is inverted.

use crate::error::{Error, Result};

/// Relative tolerance used by [`Range::contains`].
///
/// Two values within roughly 100 machine epsilons of each other are treated
/// as equal, so coordinates that land on a boundary after a transform round
/// trip still count as contained.
pub const CONTAINS_TOLERANCE: f64 = 100.0 * f64::EPSILON;

fn mostly_equal(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();
    if diff <= CONTAINS_TOLERANCE {
        return true;
    }
    diff <= CONTAINS_TOLERANCE * a.abs().max(b.abs())
}

/// An interval with orientation.
///
/// Endpoints are stored in the order given; `low`/`high` are derived. The
/// default range is the degenerate zero range, which [`Range::new`] refuses
/// to construct but which serves as the "no data" placeholder (an empty
/// [`Dataset`](crate::dataset::Dataset) carries zero domains).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    x: f64,
    y: f64,
    low: f64,
    high: f64,
}

impl Range {
    /// Create a new range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the endpoints are equal; a
    /// zero-width range cannot be the source of a transform.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        let low = x.min(y);
        let high = x.max(y);
        if low == high {
            return Err(Error::InvalidRange { x, y });
        }
        Ok(Self { x, y, low, high })
    }

    /// Reassign both endpoints in place.
    ///
    /// Unlike [`Range::new`] this performs no validation; callers that reset
    /// a range to equal endpoints get a degenerate range back and must not
    /// rely on construction-time invariants afterwards.
    pub fn reset(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.low = x.min(y);
        self.high = x.max(y);
    }

    /// First endpoint, in construction order.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Second endpoint, in construction order.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Smaller endpoint.
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Larger endpoint.
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Absolute distance between the endpoints.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.y - self.x).abs()
    }

    /// Whether `value` lies within the range, boundaries included.
    ///
    /// Containment is evaluated with a relative floating-point tolerance
    /// ([`CONTAINS_TOLERANCE`]) so boundary values survive transform
    /// rounding.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if mostly_equal(value, self.low) || mostly_equal(value, self.high) {
            return true;
        }
        self.low <= value && value <= self.high
    }

    /// Whether the range runs high-to-low.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.x > self.y
    }
}

/// Affine transform of `value` from one range to another.
///
/// The map uses the raw endpoints rather than the ordered bounds, so an
/// inverted destination range flips the axis: the source's `x` endpoint
/// always maps onto the destination's `x` endpoint.
///
/// # Errors
///
/// Returns [`Error::NotInRange`] if `from` does not contain `value`.
/// Extrapolating an out-of-domain value would produce garbage pixel
/// coordinates; callers are expected to clip first.
pub fn transform(value: f64, from: Range, to: Range) -> Result<f64> {
    if !from.contains(value) {
        return Err(Error::NotInRange { value, x: from.x(), y: from.y() });
    }

    Ok((value - from.x()) * ((to.y() - to.x()) / (from.y() - from.x())) + to.x())
}
