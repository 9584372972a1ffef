//! Ordered point collections with cached domain bounds.

use crate::geometry::Point;
use crate::range::Range;

/// An ordered collection of 2D points with cached per-axis domains.
///
/// The x and y domains are the min/max bounding box of the points, computed
/// in a single pass at construction and then frozen. [`Dataset::push`]
/// deliberately does not refresh them: incremental appends are cheap, and a
/// caller that needs accurate bounds afterwards calls
/// [`Dataset::recompute_domains`] (or rebuilds the dataset). An empty
/// dataset carries degenerate zero domains.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<Point>,
    xdomain: Range,
    ydomain: Range,
}

impl Dataset {
    /// Create a dataset, scanning all points once to compute the domains.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        let mut ds = Self { points, xdomain: Range::default(), ydomain: Range::default() };
        ds.recompute_domains();
        ds
    }

    /// Recompute both domain ranges from the current points.
    ///
    /// A single pass over the points; an empty dataset resets the domains to
    /// the degenerate zero range.
    pub fn recompute_domains(&mut self) {
        let Some(first) = self.points.first() else {
            self.xdomain = Range::default();
            self.ydomain = Range::default();
            return;
        };

        let (mut xmin, mut xmax) = (first.x, first.x);
        let (mut ymin, mut ymax) = (first.y, first.y);
        for p in &self.points {
            xmin = xmin.min(p.x);
            xmax = xmax.max(p.x);
            ymin = ymin.min(p.y);
            ymax = ymax.max(p.y);
        }
        self.xdomain.reset(xmin, xmax);
        self.ydomain.reset(ymin, ymax);
    }

    /// Append a point WITHOUT refreshing the cached domains.
    ///
    /// The domains stay frozen at their last computed value; see the type
    /// docs for the rebuild contract.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Flattened x values, in point order.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Flattened y values, in point order.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Cached x domain (bounding interval of x values at last computation).
    #[must_use]
    pub const fn xdomain(&self) -> Range {
        self.xdomain
    }

    /// Cached y domain (bounding interval of y values at last computation).
    #[must_use]
    pub const fn ydomain(&self) -> Range {
        self.ydomain
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Point> for Dataset {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Point::new(1.0, -4.0),
            Point::new(-2.0, 9.0),
            Point::new(7.0, 3.0),
        ])
    }

    #[test]
    fn test_domains_computed_at_construction() {
        let ds = sample();
        assert_relative_eq!(ds.xdomain().low(), -2.0);
        assert_relative_eq!(ds.xdomain().high(), 7.0);
        assert_relative_eq!(ds.ydomain().low(), -4.0);
        assert_relative_eq!(ds.ydomain().high(), 9.0);
    }

    #[test]
    fn test_empty_dataset_zero_domains() {
        let ds = Dataset::new(Vec::new());
        assert!(ds.is_empty());
        assert_relative_eq!(ds.xdomain().distance(), 0.0);
        assert_relative_eq!(ds.ydomain().distance(), 0.0);
    }

    #[test]
    fn test_push_does_not_refresh_domains() {
        let mut ds = sample();
        ds.push(Point::new(100.0, 100.0));
        assert_eq!(ds.len(), 4);
        // Domains stay frozen at construction-time bounds.
        assert_relative_eq!(ds.xdomain().high(), 7.0);
        assert_relative_eq!(ds.ydomain().high(), 9.0);

        ds.recompute_domains();
        assert_relative_eq!(ds.xdomain().high(), 100.0);
        assert_relative_eq!(ds.ydomain().high(), 100.0);
    }

    #[test]
    fn test_flattened_axes() {
        let ds = sample();
        assert_eq!(ds.xs(), vec![1.0, -2.0, 7.0]);
        assert_eq!(ds.ys(), vec![-4.0, 9.0, 3.0]);
    }

    #[test]
    fn test_from_iterator() {
        let ds: Dataset = (0..5).map(|i| Point::new(f64::from(i), 0.5)).collect();
        assert_eq!(ds.len(), 5);
        assert_relative_eq!(ds.xdomain().high(), 4.0);
    }
}
