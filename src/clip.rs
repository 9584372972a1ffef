//! Liang-Barsky line clipping against an axis-aligned rectangle.
//!
//! Pure geometry: the clipper restricts a segment to a viewport before it is
//! transformed and handed to the backend, and performs no drawing itself.
//!
//! # References
//!
//! Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line
//! Clipping." *ACM Transactions on Graphics*, 3(1), 1-22.

use crate::geometry::{Line, Point};
use crate::range::Range;

/// Clip `line` to the rectangle spanned by `xlim` and `ylim`.
///
/// The segment is parameterized as `start + t * (end - start)` for
/// `t ∈ [0, 1]`; each of the four boundary half-planes contributes an
/// entering or exiting parameter, and the clipped segment runs from the
/// largest entering `t` to the smallest exiting `t`.
///
/// Known limitation: a segment exactly parallel to a boundary axis and
/// lying outside it is returned unchanged instead of being rejected.
/// Callers compensate by checking viewport containment after transform.
#[must_use]
pub fn clip_line(xlim: Range, ylim: Range, line: Line) -> Line {
    let (xmin, xmax) = (xlim.x(), xlim.y());
    let (ymin, ymax) = (ylim.x(), ylim.y());

    let (x1, y1) = (line.start.x, line.start.y);
    let (x2, y2) = (line.end.x, line.end.y);

    let p1 = -(x2 - x1);
    let p2 = -p1;
    let p3 = -(y2 - y1);
    let p4 = -p3;

    let q1 = x1 - xmin;
    let q2 = xmax - x1;
    let q3 = y1 - ymin;
    let q4 = ymax - y1;

    // Parallel to a window boundary and outside it.
    if (p1 == 0.0 && q1 < 0.0) || (p3 == 0.0 && q3 < 0.0) {
        return line;
    }

    // Entering candidates start at t=0, exiting at t=1. The division is
    // guarded by the p != 0 checks above, so an axis-parallel segment never
    // divides by zero.
    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    if p1 != 0.0 {
        let r1 = q1 / p1;
        let r2 = q2 / p2;
        if p1 < 0.0 {
            t_enter = t_enter.max(r1);
            t_exit = t_exit.min(r2);
        } else {
            t_enter = t_enter.max(r2);
            t_exit = t_exit.min(r1);
        }
    }

    if p3 != 0.0 {
        let r3 = q3 / p3;
        let r4 = q4 / p4;
        if p3 < 0.0 {
            t_enter = t_enter.max(r3);
            t_exit = t_exit.min(r4);
        } else {
            t_enter = t_enter.max(r4);
            t_exit = t_exit.min(r3);
        }
    }

    Line::new(
        Point::new(x1 + p2 * t_enter, y1 + p4 * t_enter),
        Point::new(x1 + p2 * t_exit, y1 + p4 * t_exit),
    )
}
