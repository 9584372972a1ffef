//! Tick placement and labeling.
//!
//! [`pretty_ticks`] follows the classic R `pretty()` heuristic: pick a unit
//! that is 1, 2, 5, or 10 times a power of ten, then emit the multiples of
//! that unit covering the range. The endpoints of the returned sequence may
//! extend slightly past the range so the labels land on round numbers.

use crate::range::Range;

const SHRINK_SML: f64 = 0.25;
const ROUNDING_EPS: f64 = 1e-10;
const H: f64 = 0.8;
const H5: f64 = 1.7;

/// Round tick locations covering `range`, aiming for about `ndiv` intervals.
///
/// Always returns at least one location. A degenerate range (zero span)
/// yields a single tick at the range value.
#[must_use]
pub fn pretty_ticks(range: Range, ndiv: usize) -> Vec<f64> {
    let low = range.low();
    let high = range.high();
    let dx = high - low;

    let mut cell;
    let small;
    if dx == 0.0 && high == 0.0 {
        cell = 1.0;
        small = true;
    } else {
        cell = low.abs().max(high.abs());
        let u = (1.0 + if H5 >= 1.5 * H + 0.5 { 1.0 / (1.0 + H) } else { 1.5 / (1.0 + H5) })
            * ndiv.max(1) as f64
            * f64::EPSILON;
        small = dx < cell * u * 3.0;
    }

    if small {
        if cell > 10.0 {
            cell = 9.0 + cell / 10.0;
        }
        cell *= SHRINK_SML;
    } else {
        cell = dx;
        if ndiv > 1 {
            cell /= ndiv as f64;
        }
    }
    cell = cell.clamp(20.0 * f64::MIN_POSITIVE, 0.1 * f64::MAX);

    let base = 10.0_f64.powf(cell.log10().floor());
    let mut unit = base;
    let mut u = 2.0 * base;
    if u - cell < H * (cell - unit) {
        unit = u;
        u = 5.0 * base;
        if u - cell < H5 * (cell - unit) {
            unit = u;
            u = 10.0 * base;
            if u - cell < H * (cell - unit) {
                unit = u;
            }
        }
    }

    let mut ns = (low / unit + ROUNDING_EPS).floor();
    let mut nu = (high / unit - ROUNDING_EPS).ceil();
    while ns * unit > low + ROUNDING_EPS * unit {
        ns -= 1.0;
    }
    while nu * unit < high - ROUNDING_EPS * unit {
        nu += 1.0;
    }

    let mut locations = Vec::new();
    let mut n = ns;
    while n <= nu {
        locations.push(n * unit);
        n += 1.0;
    }
    locations
}

/// Format a tick label for an axis stepped by `stride`.
///
/// Sub-unit strides keep two decimals; anything coarser prints as the
/// floored integer.
#[must_use]
pub fn format_tick(value: f64, stride: f64) -> String {
    if stride < 1.0 {
        format!("{value:.2}")
    } else {
        format!("{}", value.floor() as i64)
    }
}
