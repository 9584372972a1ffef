//! Box-and-whisker plot façade.

use crate::backend::Surface;
use crate::config::{Orientation, PlotConfig};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::plots::frame::Viewport;
use crate::range::transform;
use crate::summary::BoxPlotSummary;

/// Stroke width of the box rectangle.
const BOX_WIDTH: f64 = 2.0;

/// Stroke width of the median line and whiskers.
const WHISKER_WIDTH: f64 = 1.0;

/// Radius multiplier for outlier markers.
const OUTLIER_RADIUS_SCALE: f64 = 1.5;

/// Draws a five-number summary of one data axis: quartile box, median
/// line, whiskers to the 1.5x quartile-range fences, and circled outliers.
///
/// Accepts only [`Orientation::Vertical`] and [`Orientation::Horizontal`];
/// the box is centered on the other axis and sized to a twentieth of it.
#[derive(Debug, Clone)]
pub struct BoxPlot {
    view: Viewport,
    config: PlotConfig,
}

impl BoxPlot {
    /// Create a box plot whose viewport is derived from `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the configured margins
    /// consume the whole surface.
    pub fn new<S: Surface>(surface: &S, config: PlotConfig) -> Result<Self> {
        let view = Viewport::from_surface(surface, &config.margin)?;
        Ok(Self { view, config })
    }

    /// Create a box plot over an explicit viewport.
    #[must_use]
    pub const fn with_viewport(view: Viewport, config: PlotConfig) -> Self {
        Self { view, config }
    }

    /// The plot's configuration.
    #[must_use]
    pub const fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// The plot's pixel viewport.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.view
    }

    /// Draw the frame: box outline, gridlines, tick labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when either data domain is unset.
    pub fn frame<S: Surface>(&self, surface: &mut S) -> Result<()> {
        self.view.draw_frame(surface, &self.config)
    }

    /// Summarize one axis of `data` and draw the box plot.
    ///
    /// Dispatches on the configured orientation; returns the configuration
    /// that was in effect (box plots never adjust domains).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrientation`] for any orientation other
    /// than `Vertical` or `Horizontal`, [`Error::EmptyData`] for an empty
    /// dataset, and [`Error::NotInRange`] when a whisker fence or outlier
    /// falls outside the configured domain for the summarized axis.
    pub fn plot<S: Surface>(&self, surface: &mut S, data: &Dataset) -> Result<PlotConfig> {
        match self.config.orientation {
            Orientation::Vertical => self.vertical(surface, data)?,
            Orientation::Horizontal => self.horizontal(surface, data)?,
            other => {
                return Err(Error::InvalidOrientation {
                    plot: "BoxPlot",
                    orientation: other.as_str(),
                })
            }
        }
        Ok(self.config.clone())
    }

    /// Box spanning the y axis, centered on the x axis.
    ///
    /// The quartile box is placed against the dataset's own y bounds; the
    /// whiskers and outliers go through the configured y domain, which must
    /// therefore cover the fences.
    fn vertical<S: Surface>(&self, surface: &mut S, data: &Dataset) -> Result<()> {
        let ys = data.ys();
        let summary = BoxPlotSummary::from_sample(&ys)?;

        let center = self.view.x().low() + self.view.x().distance() / 2.0;
        let half_width = self.view.x().distance() / 20.0;
        let x1 = center - half_width;
        let x2 = center + half_width;

        let m = transform(summary.median(), data.ydomain(), self.view.y())?;
        let uq = transform(summary.upper_q(), data.ydomain(), self.view.y())?;
        let lq = transform(summary.lower_q(), data.ydomain(), self.view.y())?;

        surface.draw_rect(
            Point::new(x1, lq),
            Point::new(x2, uq),
            self.config.color,
            BOX_WIDTH,
        );
        surface.draw_line(
            Point::new(x1, m),
            Point::new(x2, m),
            self.config.color,
            WHISKER_WIDTH,
        );

        let lower = transform(summary.lower_bound(), self.config.ydomain, self.view.y())?;
        surface.draw_line(
            Point::new(center, lower),
            Point::new(center, lq),
            self.config.color,
            WHISKER_WIDTH,
        );
        let upper = transform(summary.upper_bound(), self.config.ydomain, self.view.y())?;
        surface.draw_line(
            Point::new(center, uq),
            Point::new(center, upper),
            self.config.color,
            WHISKER_WIDTH,
        );

        for &v in &ys {
            if summary.is_outlier(v) {
                let y = transform(v, self.config.ydomain, self.view.y())?;
                surface.draw_circle(
                    Point::new(center, y),
                    OUTLIER_RADIUS_SCALE * self.config.point_radius,
                    self.config.color,
                    self.config.line_width,
                );
            }
        }
        Ok(())
    }

    /// Box spanning the x axis, centered on the y axis.
    ///
    /// All x positions go through the configured x domain.
    fn horizontal<S: Surface>(&self, surface: &mut S, data: &Dataset) -> Result<()> {
        let xs = data.xs();
        let summary = BoxPlotSummary::from_sample(&xs)?;

        let center = self.view.y().low() + self.view.y().distance() / 2.0;
        let half_height = self.view.y().distance() / 20.0;
        let y1 = center - half_height;
        let y2 = center + half_height;

        let m = transform(summary.median(), self.config.xdomain, self.view.x())?;
        let uq = transform(summary.upper_q(), self.config.xdomain, self.view.x())?;
        let lq = transform(summary.lower_q(), self.config.xdomain, self.view.x())?;

        surface.draw_rect(
            Point::new(lq, y1),
            Point::new(uq, y2),
            self.config.color,
            BOX_WIDTH,
        );
        surface.draw_line(
            Point::new(m, y1),
            Point::new(m, y2),
            self.config.color,
            WHISKER_WIDTH,
        );

        let lower = transform(summary.lower_bound(), self.config.xdomain, self.view.x())?;
        surface.draw_line(
            Point::new(lower, center),
            Point::new(lq, center),
            self.config.color,
            WHISKER_WIDTH,
        );
        let upper = transform(summary.upper_bound(), self.config.xdomain, self.view.x())?;
        surface.draw_line(
            Point::new(uq, center),
            Point::new(upper, center),
            self.config.color,
            WHISKER_WIDTH,
        );

        for &v in &xs {
            if summary.is_outlier(v) {
                let x = transform(v, self.config.xdomain, self.view.x())?;
                surface.draw_circle(
                    Point::new(x, center),
                    OUTLIER_RADIUS_SCALE * self.config.point_radius,
                    self.config.color,
                    self.config.line_width,
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Command, RecordingSurface};
    use crate::config::Margin;
    use approx::assert_relative_eq;

    fn flat_surface() -> RecordingSurface {
        RecordingSurface::new(100.0, 100.0, 10.0)
    }

    fn flat_config(orientation: Orientation) -> PlotConfig {
        let mut config = PlotConfig::default();
        config.margin = Margin { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 };
        config.orientation = orientation;
        config
    }

    fn vertical_sample() -> Dataset {
        (1..=10).map(|i| Point::new(0.0, f64::from(i))).collect()
    }

    #[test]
    fn test_vertical_box_geometry() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Vertical);
        config.xlim(0.0, 10.0);
        // fences for [1..10] are -5.25 and 16.75
        config.ylim(-10.0, 20.0);

        let plot = BoxPlot::new(&surface, config).unwrap();
        plot.plot(&mut surface, &vertical_sample()).unwrap();

        // quartile box: centered at x=50, half-width 5, against the data's
        // own y bounds [1,10] on the flipped pixel range
        match &surface.commands()[0] {
            Command::Rect { p1, p2, width, .. } => {
                assert_relative_eq!(p1.x, 45.0);
                assert_relative_eq!(p2.x, 55.0);
                assert_relative_eq!(p1.y, (3.0 - 1.0) * (-100.0 / 9.0) + 100.0);
                assert_relative_eq!(p2.y, (8.5 - 1.0) * (-100.0 / 9.0) + 100.0);
                assert_relative_eq!(*width, 2.0);
            }
            other => panic!("expected Rect, got {other:?}"),
        }

        // median line at the pixel midpoint of [1,10]
        match &surface.commands()[1] {
            Command::Line { from, to, width, .. } => {
                assert_relative_eq!(from.y, 50.0);
                assert_relative_eq!(to.y, 50.0);
                assert_relative_eq!(*width, 1.0);
            }
            other => panic!("expected Line, got {other:?}"),
        }

        // median + two whiskers, no outliers within the fences
        assert_eq!(surface.count_matching(|c| matches!(c, Command::Line { .. })), 3);
        assert_eq!(surface.count_matching(|c| matches!(c, Command::Circle { .. })), 0);
    }

    #[test]
    fn test_vertical_outliers_get_markers() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Vertical);
        config.xlim(0.0, 10.0);
        config.ylim(-10.0, 110.0);

        let data: Dataset =
            [1.0, 2.0, 3.0, 4.0, 100.0].iter().map(|&y| Point::new(0.0, y)).collect();
        let plot = BoxPlot::new(&surface, config).unwrap();
        plot.plot(&mut surface, &data).unwrap();

        // 100 is far outside the fences [-2.25, 7.75]
        let circles: Vec<f64> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 1);
        assert_relative_eq!(circles[0], 3.0); // 1.5 x default point radius
    }

    #[test]
    fn test_horizontal_box_geometry() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Horizontal);
        config.xlim(-10.0, 20.0);
        config.ylim(0.0, 10.0);

        let data: Dataset = (1..=10).map(|i| Point::new(f64::from(i), 0.0)).collect();
        let plot = BoxPlot::new(&surface, config).unwrap();
        plot.plot(&mut surface, &data).unwrap();

        match &surface.commands()[0] {
            Command::Rect { p1, p2, .. } => {
                // centered on the y axis, half-height 5
                assert_relative_eq!(p1.y, 45.0);
                assert_relative_eq!(p2.y, 55.0);
                // quartiles through the configured x domain [-10,20]
                assert_relative_eq!(p1.x, (3.0 + 10.0) * (100.0 / 30.0));
                assert_relative_eq!(p2.x, (8.5 + 10.0) * (100.0 / 30.0));
            }
            other => panic!("expected Rect, got {other:?}"),
        }
    }

    #[test]
    fn test_side_orientations_rejected() {
        let surface = flat_surface();
        let mut config = flat_config(Orientation::Bottom);
        config.xlim(0.0, 10.0);
        config.ylim(0.0, 10.0);

        let mut target = flat_surface();
        let plot = BoxPlot::new(&surface, config).unwrap();
        let err = plot.plot(&mut target, &vertical_sample()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOrientation { plot: "BoxPlot", orientation: "Bottom" }
        );
    }

    #[test]
    fn test_empty_dataset_fails() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Vertical);
        config.xlim(0.0, 10.0);
        config.ylim(0.0, 10.0);

        let plot = BoxPlot::new(&surface, config).unwrap();
        assert!(matches!(
            plot.plot(&mut surface, &Dataset::new(Vec::new())),
            Err(Error::EmptyData)
        ));
    }
}
