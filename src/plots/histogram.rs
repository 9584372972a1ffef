//! Histogram façade.
//!
//! Bars attach to one of the four frame sides. The binned axis always
//! covers the dataset's own bounds; the cross axis is normalized as a side
//! effect of plotting, fixed to `[0, 1.10 x max bin ratio]` (endpoint order
//! flipped for the top and right sides so bars grow inward). The caller
//! reads the adjusted domain back from the returned configuration.

use crate::backend::Surface;
use crate::bins::BinnedAxis;
use crate::color::Rgba;
use crate::config::{Orientation, PlotConfig};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::plots::frame::Viewport;
use crate::range::{transform, Range};

/// Bar outline stroke.
const BAR_OUTLINE: Rgba = Rgba::BLACK;

/// Factor padding the normalized cross-axis domain past the tallest bar.
const DOMAIN_PADDING: f64 = 1.10;

/// Which axis a histogram side bins and which it normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Draws the per-bin frequency of one data axis as bars against a frame
/// side.
///
/// Accepts only the four side orientations (`Bottom`, `Top`, `Left`,
/// `Right`).
#[derive(Debug, Clone)]
pub struct HistogramPlot {
    view: Viewport,
    config: PlotConfig,
}

impl HistogramPlot {
    /// Create a histogram whose viewport is derived from `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the configured margins
    /// consume the whole surface.
    pub fn new<S: Surface>(surface: &S, config: PlotConfig) -> Result<Self> {
        let view = Viewport::from_surface(surface, &config.margin)?;
        Ok(Self { view, config })
    }

    /// Create a histogram over an explicit viewport.
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

    /// Draw the frame with the plot's own configuration.
    ///
    /// The cross-axis domain is only fixed while plotting, so a frame drawn
    /// before [`Self::plot`] needs both domains set by the caller; after
    /// plotting, prefer [`Self::frame_with`] and the returned effective
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when either data domain is unset.
    pub fn frame<S: Surface>(&self, surface: &mut S) -> Result<()> {
        self.view.draw_frame(surface, &self.config)
    }

    /// Draw the frame with an explicit (typically effective) configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when either domain in `config` is
    /// unset.
    pub fn frame_with<S: Surface>(&self, surface: &mut S, config: &PlotConfig) -> Result<()> {
        self.view.draw_frame(surface, config)
    }

    /// Bin one data axis and draw the bars.
    ///
    /// Returns the effective configuration: the input configuration with
    /// the cross-axis domain replaced by the normalized ratio domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrientation`] for `Vertical`/`Horizontal`,
    /// [`Error::EmptyData`] for an empty dataset or zero bin count, and
    /// [`Error::InvalidRange`] when the binned axis has no spread.
    pub fn plot<S: Surface>(&self, surface: &mut S, data: &Dataset) -> Result<PlotConfig> {
        match self.config.orientation {
            Orientation::Bottom => self.sides(surface, data, Axis::X, false),
            Orientation::Top => self.sides(surface, data, Axis::X, true),
            Orientation::Left => self.sides(surface, data, Axis::Y, false),
            Orientation::Right => self.sides(surface, data, Axis::Y, true),
            other => Err(Error::InvalidOrientation {
                plot: "HistogramPlot",
                orientation: other.as_str(),
            }),
        }
    }

    /// Shared four-side implementation.
    ///
    /// `axis` picks which data axis gets binned; `flipped` inverts the
    /// normalized domain so bars grow from the far side of the frame.
    fn sides<S: Surface>(
        &self,
        surface: &mut S,
        data: &Dataset,
        axis: Axis,
        flipped: bool,
    ) -> Result<PlotConfig> {
        let (values, bin_domain, display_domain) = match axis {
            Axis::X => (data.xs(), data.xdomain(), self.config.xdomain),
            Axis::Y => (data.ys(), data.ydomain(), self.config.ydomain),
        };
        let bins = BinnedAxis::new(&values, bin_domain, self.config.bins)?;

        let padded = DOMAIN_PADDING * bins.max_ratio();
        let mut ratio_domain = Range::default();
        if flipped {
            ratio_domain.reset(padded, 0.0);
        } else {
            ratio_domain.reset(0.0, padded);
        }

        let mut effective = self.config.clone();
        match axis {
            Axis::X => effective.ydomain = ratio_domain,
            Axis::Y => effective.xdomain = ratio_domain,
        }

        let (bin_view, ratio_view) = match axis {
            Axis::X => (self.view.x(), self.view.y()),
            Axis::Y => (self.view.y(), self.view.x()),
        };

        for n in 0..bins.len() {
            let (a, b) = bins.edges(n);
            // Skip bars that stick out of the caller's display limits.
            if !(display_domain.contains(a) && display_domain.contains(b)) {
                continue;
            }
            let e1 = transform(a, display_domain, bin_view)?;
            let e2 = transform(b, display_domain, bin_view)?;
            let base = transform(0.0, ratio_domain, ratio_view)?;
            let top = transform(bins.ratio(n), ratio_domain, ratio_view)?;

            let (p1, p2) = match axis {
                Axis::X => (Point::new(e1, base), Point::new(e2, top)),
                Axis::Y => (Point::new(top, e1), Point::new(base, e2)),
            };
            surface.draw_filled_rect(p1, p2, self.config.selection_fill);
            surface.draw_rect(p1, p2, BAR_OUTLINE, 1.0);
        }

        Ok(effective)
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

    fn flat_config(orientation: Orientation, bins: usize) -> PlotConfig {
        let mut config = PlotConfig::default();
        config.margin = Margin { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 };
        config.orientation = orientation;
        config.bins = bins;
        config
    }

    fn x_sample() -> Dataset {
        // bins over [0,9] in thirds: 3, 3, then 4 after the edge fold
        (0..10).map(|i| Point::new(f64::from(i), 0.0)).collect()
    }

    #[test]
    fn test_bottom_bars_and_normalized_domain() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Bottom, 3);
        config.xlim(0.0, 9.0);

        let plot = HistogramPlot::new(&surface, config).unwrap();
        let effective = plot.plot(&mut surface, &x_sample()).unwrap();

        assert_relative_eq!(effective.ydomain.x(), 0.0);
        assert_relative_eq!(effective.ydomain.y(), 1.10 * 0.4);
        assert!(!effective.ydomain.is_inverted());

        assert_eq!(surface.count_matching(|c| matches!(c, Command::FilledRect { .. })), 3);
        assert_eq!(surface.count_matching(|c| matches!(c, Command::Rect { .. })), 3);

        // bars rise from the bottom pixel row of the flipped y range
        let bases: Vec<f64> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::FilledRect { p1, .. } => Some(p1.y),
                _ => None,
            })
            .collect();
        for base in bases {
            assert_relative_eq!(base, 100.0);
        }
    }

    #[test]
    fn test_top_flips_the_ratio_domain() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Top, 3);
        config.xlim(0.0, 9.0);

        let plot = HistogramPlot::new(&surface, config).unwrap();
        let effective = plot.plot(&mut surface, &x_sample()).unwrap();

        assert_relative_eq!(effective.ydomain.x(), 1.10 * 0.4);
        assert_relative_eq!(effective.ydomain.y(), 0.0);
        assert!(effective.ydomain.is_inverted());

        // base ratio 0 now maps to the top pixel row
        match &surface.commands()[0] {
            Command::FilledRect { p1, .. } => assert_relative_eq!(p1.y, 0.0),
            other => panic!("expected FilledRect, got {other:?}"),
        }
    }

    #[test]
    fn test_left_bins_the_y_axis() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Left, 3);
        config.ylim(0.0, 9.0);

        let data: Dataset = (0..10).map(|i| Point::new(0.0, f64::from(i))).collect();
        let plot = HistogramPlot::new(&surface, config).unwrap();
        let effective = plot.plot(&mut surface, &data).unwrap();

        assert_relative_eq!(effective.xdomain.x(), 0.0);
        assert_relative_eq!(effective.xdomain.y(), 1.10 * 0.4);
        assert_eq!(surface.count_matching(|c| matches!(c, Command::FilledRect { .. })), 3);

        // bars grow rightward from the left pixel column
        let bases: Vec<f64> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::FilledRect { p2, .. } => Some(p2.x),
                _ => None,
            })
            .collect();
        for base in bases {
            assert_relative_eq!(base, 0.0);
        }
    }

    #[test]
    fn test_bars_outside_display_limits_are_skipped() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Bottom, 3);
        // display only the first two thirds of the data's own bounds
        config.xlim(0.0, 6.0);

        let plot = HistogramPlot::new(&surface, config).unwrap();
        plot.plot(&mut surface, &x_sample()).unwrap();
        assert_eq!(surface.count_matching(|c| matches!(c, Command::FilledRect { .. })), 2);
    }

    #[test]
    fn test_values_pushed_past_frozen_domain_fold_into_edge_bin() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Bottom, 2);
        config.xlim(0.0, 10.0);

        // The frozen x domain stays [0, 10] after the push.
        let mut data = Dataset::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        data.push(Point::new(25.0, 0.0));

        let plot = HistogramPlot::new(&surface, config).unwrap();
        let effective = plot.plot(&mut surface, &data).unwrap();

        // The stray value lands in the last bin: 1 vs 2 of 3 samples.
        assert_relative_eq!(effective.ydomain.y(), 1.10 * (2.0 / 3.0));
        assert_eq!(surface.count_matching(|c| matches!(c, Command::FilledRect { .. })), 2);
    }

    #[test]
    fn test_axis_orientations_rejected() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Vertical, 3);
        config.xlim(0.0, 9.0);

        let plot = HistogramPlot::new(&surface, config).unwrap();
        let err = plot.plot(&mut surface, &x_sample()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOrientation { plot: "HistogramPlot", orientation: "Vertical" }
        );
    }

    #[test]
    fn test_empty_dataset_fails() {
        let mut surface = flat_surface();
        let mut config = flat_config(Orientation::Bottom, 3);
        config.xlim(0.0, 9.0);

        let plot = HistogramPlot::new(&surface, config).unwrap();
        assert!(matches!(
            plot.plot(&mut surface, &Dataset::new(Vec::new())),
            Err(Error::EmptyData)
        ));
    }
}
