//! Viewport layout and shared frame drawing.
//!
//! Every plot façade owns a [`Viewport`]: the pixel-space x/y ranges the
//! data domains map onto. The viewport is derived once from the surface
//! dimensions and the configured margins and reused for every draw call.
//! The frame elements all plot types share (box outline, gridlines, tick
//! labels, clipped line overlays, free text) live here.

use crate::backend::{Surface, TextAlign};
use crate::clip::clip_line;
use crate::color::Rgba;
use crate::config::{Margin, PlotConfig};
use crate::error::{Error, Result};
use crate::geometry::{Line, Point};
use crate::range::{transform, Range};
use crate::ticks::format_tick;

/// Gridline color.
const GRID_COLOR: Rgba = Rgba::new(192, 192, 192, 30);

/// Tick-label and annotation color.
const LABEL_COLOR: Rgba = Rgba::WHITE;

/// Pixel-space drawing area of a plot.
///
/// The y range runs from the bottom pixel row down to the top one
/// (descending), so ascending data domains render with larger values
/// higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x: Range,
    y: Range,
}

impl Viewport {
    /// Build a viewport from explicit pixel ranges.
    #[must_use]
    pub const fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Derive the viewport from a surface's dimensions and `margin`.
    ///
    /// Margins are given in font-height units and converted through the
    /// surface's line height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the margins consume the
    /// whole surface on either axis.
    pub fn from_surface<S: Surface + ?Sized>(surface: &S, margin: &Margin) -> Result<Self> {
        let width = surface.width();
        let height = surface.height();
        let font = surface.font_line_height();

        let x_low = margin.left * font;
        let x_high = width - margin.right * font;
        let y_low = margin.bottom * font;
        let y_high = height - margin.top * font;

        // Range::new would happily build an inverted (mirrored) viewport
        // from margins that overlap, so reject anything that does not leave
        // positive drawing area on both axes.
        if x_low >= x_high || y_low >= y_high {
            return Err(Error::InvalidDimensions { width, height });
        }

        let dims = Error::InvalidDimensions { width, height };
        let x = Range::new(x_low, x_high).map_err(|_| dims.clone())?;
        let y = Range::new(y_high, y_low).map_err(|_| dims)?;

        Ok(Self { x, y })
    }

    /// Pixel range of the x axis.
    #[must_use]
    pub const fn x(&self) -> Range {
        self.x
    }

    /// Pixel range of the y axis.
    #[must_use]
    pub const fn y(&self) -> Range {
        self.y
    }

    /// Whether a pixel-space point lies within the viewport.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    /// Draw the rectangular outline of the viewport.
    pub fn draw_box<S: Surface>(&self, surface: &mut S, config: &PlotConfig) {
        surface.draw_rect(
            Point::new(self.x.low(), self.y.low()),
            Point::new(self.x.high(), self.y.high()),
            config.color,
            config.line_width,
        );
    }

    /// Draw vertical gridlines, one per x tick interval.
    pub fn draw_x_grid<S: Surface>(&self, surface: &mut S, config: &PlotConfig) {
        let stride = self.x.distance() / f64::from(config.x_ticks);
        let mut x = self.x.low() + stride;
        while x < self.x.high() {
            surface.draw_line(
                Point::new(x, self.y.low()),
                Point::new(x, self.y.high()),
                GRID_COLOR,
                1.0,
            );
            x += stride;
        }
    }

    /// Draw horizontal gridlines, one per y tick interval.
    pub fn draw_y_grid<S: Surface>(&self, surface: &mut S, config: &PlotConfig) {
        let stride = self.y.distance() / f64::from(config.y_ticks);
        let mut y = self.y.low() + stride;
        while y < self.y.high() {
            surface.draw_line(
                Point::new(self.x.low(), y),
                Point::new(self.x.high(), y),
                GRID_COLOR,
                1.0,
            );
            y += stride;
        }
    }

    /// Draw both gridline sets.
    pub fn draw_grid<S: Surface>(&self, surface: &mut S, config: &PlotConfig) {
        self.draw_x_grid(surface, config);
        self.draw_y_grid(surface, config);
    }

    /// Draw x-axis tick labels below the frame.
    ///
    /// Labels step through the data domain (not the pixel range) so they
    /// read in data units; endpoints are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for an unset (degenerate) domain.
    pub fn draw_x_ticks<S: Surface>(&self, surface: &mut S, config: &PlotConfig) -> Result<()> {
        let xdomain = config.xdomain;
        let ydomain = config.ydomain;
        let stride = xdomain.distance() / f64::from(config.x_ticks);
        if stride == 0.0 {
            return Err(Error::InvalidRange { x: xdomain.x(), y: xdomain.y() });
        }

        let off = surface.font_line_height();
        let anchor_y = transform(ydomain.low(), ydomain, self.y)? + off;

        let mut x = xdomain.low() + stride;
        while x < xdomain.high() {
            let label = format_tick(x, stride);
            let anchor_x = transform(x, xdomain, self.x)?;
            surface.draw_text(
                LABEL_COLOR,
                Point::new(anchor_x, anchor_y),
                TextAlign::Center,
                &label,
            );
            x += stride;
        }
        Ok(())
    }

    /// Draw y-axis tick labels left of the frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for an unset (degenerate) domain.
    pub fn draw_y_ticks<S: Surface>(&self, surface: &mut S, config: &PlotConfig) -> Result<()> {
        let xdomain = config.xdomain;
        let ydomain = config.ydomain;
        let stride = ydomain.distance() / f64::from(config.y_ticks);
        if stride == 0.0 {
            return Err(Error::InvalidRange { x: ydomain.x(), y: ydomain.y() });
        }

        let xoff = surface.font_line_height();
        let yoff = surface.font_line_height() * 0.5;
        let anchor_x = transform(xdomain.low(), xdomain, self.x)? - xoff;

        let mut y = ydomain.low() + stride;
        while y < ydomain.high() {
            let label = format_tick(y, stride);
            let anchor_y = transform(y, ydomain, self.y)? - yoff;
            surface.draw_text(
                LABEL_COLOR,
                Point::new(anchor_x, anchor_y),
                TextAlign::Right,
                &label,
            );
            y += stride;
        }
        Ok(())
    }

    /// Clip `lines` to the data domains, transform them into pixel space,
    /// and draw them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`] when a clipped endpoint still falls
    /// outside the domain (a segment parallel to and outside a boundary is
    /// returned unclipped by [`clip_line`]).
    pub fn draw_lines<S: Surface>(
        &self,
        surface: &mut S,
        config: &PlotConfig,
        lines: &[Line],
    ) -> Result<()> {
        for line in lines {
            let clipped = clip_line(config.xdomain, config.ydomain, *line);
            let from = Point::new(
                transform(clipped.start.x, config.xdomain, self.x)?,
                transform(clipped.start.y, config.ydomain, self.y)?,
            );
            let to = Point::new(
                transform(clipped.end.x, config.xdomain, self.x)?,
                transform(clipped.end.y, config.ydomain, self.y)?,
            );
            surface.draw_line(from, to, config.color, config.line_width);
        }
        Ok(())
    }

    /// Draw `text` anchored at a data-domain position, using the
    /// configured alignment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`] if `at` lies outside the domains.
    pub fn draw_text_at<S: Surface>(
        &self,
        surface: &mut S,
        config: &PlotConfig,
        at: Point,
        text: &str,
    ) -> Result<()> {
        let position = Point::new(
            transform(at.x, config.xdomain, self.x)?,
            transform(at.y, config.ydomain, self.y)?,
        );
        surface.draw_text(LABEL_COLOR, position, config.align, text);
        Ok(())
    }

    /// Draw the standard frame: box, gridlines, and tick labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when either data domain is unset.
    pub fn draw_frame<S: Surface>(&self, surface: &mut S, config: &PlotConfig) -> Result<()> {
        self.draw_box(surface, config);
        self.draw_grid(surface, config);
        self.draw_x_ticks(surface, config)?;
        self.draw_y_ticks(surface, config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Command, RecordingSurface};
    use approx::assert_relative_eq;

    fn zero_margin() -> Margin {
        Margin { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 }
    }

    fn unit_config() -> PlotConfig {
        let mut config = PlotConfig::default();
        config.xlim(0.0, 10.0);
        config.ylim(0.0, 10.0);
        config
    }

    #[test]
    fn test_viewport_layout_from_margins() {
        let surface = RecordingSurface::new(640.0, 480.0, 10.0);
        let margin = Margin::default();
        let view = Viewport::from_surface(&surface, &margin).unwrap();

        // left 5, right 2, top 7, bottom 3 font-heights at 10px each
        assert_relative_eq!(view.x().low(), 50.0);
        assert_relative_eq!(view.x().high(), 620.0);
        assert_relative_eq!(view.y().x(), 410.0);
        assert_relative_eq!(view.y().y(), 30.0);
        assert!(view.y().is_inverted());
    }

    #[test]
    fn test_oversized_margins_fail() {
        let surface = RecordingSurface::new(50.0, 50.0, 10.0);
        let margin = Margin::default();
        assert!(matches!(
            Viewport::from_surface(&surface, &margin),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_margins_overlapping_one_axis_never_mirror_the_viewport() {
        // Plenty of height, but the side margins cross past each other.
        let surface = RecordingSurface::new(60.0, 480.0, 10.0);
        let margin = Margin { top: 1.0, bottom: 1.0, left: 5.0, right: 2.0 };
        let err = Viewport::from_surface(&surface, &margin).unwrap_err();
        assert_eq!(err, Error::InvalidDimensions { width: 60.0, height: 480.0 });

        // Exact consumption is rejected too, not just overlap.
        let exact = RecordingSurface::new(70.0, 480.0, 10.0);
        assert!(Viewport::from_surface(&exact, &margin).is_err());
    }

    #[test]
    fn test_box_outline_spans_viewport() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 10.0);
        let view = Viewport::from_surface(&surface, &zero_margin()).unwrap();
        view.draw_box(&mut surface, &unit_config());

        assert_eq!(surface.commands().len(), 1);
        match &surface.commands()[0] {
            Command::Rect { p1, p2, .. } => {
                assert_relative_eq!(p1.x, 0.0);
                assert_relative_eq!(p2.x, 100.0);
                assert_relative_eq!(p1.y, 0.0);
                assert_relative_eq!(p2.y, 100.0);
            }
            other => panic!("expected Rect, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_line_counts() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 10.0);
        let view = Viewport::from_surface(&surface, &zero_margin()).unwrap();
        let config = unit_config();
        view.draw_grid(&mut surface, &config);

        // interior lines only: ticks - 1 per axis
        let lines = surface.count_matching(|c| matches!(c, Command::Line { .. }));
        assert_eq!(lines, (config.x_ticks - 1 + config.y_ticks - 1) as usize);
    }

    #[test]
    fn test_x_tick_labels_are_integers_for_coarse_stride() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 10.0);
        let view = Viewport::from_surface(&surface, &zero_margin()).unwrap();
        let mut config = unit_config();
        config.x_ticks = 5;
        view.draw_x_ticks(&mut surface, &config).unwrap();

        let labels: Vec<String> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["2", "4", "6", "8"]);
    }

    #[test]
    fn test_fine_stride_labels_use_decimals() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 10.0);
        let view = Viewport::from_surface(&surface, &zero_margin()).unwrap();
        let mut config = PlotConfig::default();
        config.xlim(0.0, 1.0);
        config.ylim(0.0, 1.0);
        config.x_ticks = 4;
        view.draw_x_ticks(&mut surface, &config).unwrap();

        let labels: Vec<String> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["0.25", "0.50", "0.75"]);
    }

    #[test]
    fn test_unset_domain_fails_ticks() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 10.0);
        let view = Viewport::from_surface(&surface, &zero_margin()).unwrap();
        let config = PlotConfig::default();
        assert!(matches!(
            view.draw_x_ticks(&mut surface, &config),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_text_anchored_in_data_space() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 10.0);
        let view = Viewport::from_surface(&surface, &zero_margin()).unwrap();
        let config = unit_config();
        view.draw_text_at(&mut surface, &config, Point::new(5.0, 10.0), "peak").unwrap();

        match &surface.commands()[0] {
            Command::Text { position, align, text, .. } => {
                assert_relative_eq!(position.x, 50.0);
                assert_relative_eq!(position.y, 0.0);
                assert_eq!(*align, TextAlign::Center);
                assert_eq!(text, "peak");
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn test_lines_are_clipped_before_transform() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 10.0);
        let view = Viewport::from_surface(&surface, &zero_margin()).unwrap();
        let config = unit_config();

        let lines = [Line::from_coords(-5.0, 5.0, 15.0, 5.0)];
        view.draw_lines(&mut surface, &config, &lines).unwrap();

        match &surface.commands()[0] {
            Command::Line { from, to, .. } => {
                assert_relative_eq!(from.x, 0.0);
                assert_relative_eq!(to.x, 100.0);
                // y = 5 maps to the middle of the flipped pixel range
                assert_relative_eq!(from.y, 50.0);
                assert_relative_eq!(to.y, 50.0);
            }
            other => panic!("expected Line, got {other:?}"),
        }
    }
}
