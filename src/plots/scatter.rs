//! Scatter plot façade.

use crate::backend::Surface;
use crate::config::PlotConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::Point;
use crate::plots::frame::Viewport;
use crate::range::transform;

/// Width of the selection-rectangle outline in pixels.
const SELECTION_OUTLINE_WIDTH: f64 = 3.0;

/// Radius multiplier for highlighted (selected) points.
const SELECTION_RADIUS_SCALE: f64 = 2.0;

/// Draws each dataset point as a circle (or a single pixel for sub-unit
/// point scale) at its transformed viewport position.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    view: Viewport,
    config: PlotConfig,
}

impl ScatterPlot {
    /// Create a scatter plot whose viewport is derived from `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// when the configured margins consume the whole surface.
    pub fn new<S: Surface>(surface: &S, config: PlotConfig) -> Result<Self> {
        let view = Viewport::from_surface(surface, &config.margin)?;
        Ok(Self { view, config })
    }

    /// Create a scatter plot over an explicit viewport.
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
    /// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) when
    /// either data domain is unset.
    pub fn frame<S: Surface>(&self, surface: &mut S) -> Result<()> {
        self.view.draw_frame(surface, &self.config)
    }

    /// Draw every dataset point.
    ///
    /// Points whose transformed position falls outside the viewport are
    /// dropped, not clipped. A point scale below `1.0` degrades the marker
    /// to a single pixel.
    ///
    /// Returns the configuration that was in effect; scatter plots never
    /// adjust domains, so it equals [`Self::config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`](crate::Error::NotInRange) for a point
    /// outside the configured data domains.
    pub fn plot<S: Surface>(&self, surface: &mut S, data: &Dataset) -> Result<PlotConfig> {
        for p in data {
            let x = transform(p.x, self.config.xdomain, self.view.x())?;
            let y = transform(p.y, self.config.ydomain, self.view.y())?;
            if !self.view.contains(Point::new(x, y)) {
                continue;
            }
            if self.config.point_scale < 1.0 {
                surface.draw_pixel(Point::new(x, y), self.config.color);
            } else {
                surface.draw_circle(
                    Point::new(x, y),
                    self.config.point_scale * self.config.point_radius,
                    self.config.color,
                    self.config.line_width,
                );
            }
        }
        Ok(self.config.clone())
    }

    /// Draw data-domain line overlays, clipped to the domains.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`](crate::Error::NotInRange) when a
    /// clipped endpoint still falls outside the domains.
    pub fn lines<S: Surface>(
        &self,
        surface: &mut S,
        lines: &[crate::geometry::Line],
    ) -> Result<()> {
        self.view.draw_lines(surface, &self.config, lines)
    }

    /// Dataset points whose transformed positions fall inside the
    /// pixel-space rectangle spanned by `p1` and `p2` (any corner order).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`](crate::Error::NotInRange) for a point
    /// outside the configured data domains.
    pub fn select_rect(&self, data: &Dataset, p1: Point, p2: Point) -> Result<Vec<Point>> {
        let minx = p1.x.min(p2.x);
        let maxx = p1.x.max(p2.x);
        let miny = p1.y.min(p2.y);
        let maxy = p1.y.max(p2.y);

        let mut hits = Vec::new();
        for p in data {
            let x = transform(p.x, self.config.xdomain, self.view.x())?;
            let y = transform(p.y, self.config.ydomain, self.view.y())?;
            if x >= minx && x <= maxx && y >= miny && y <= maxy {
                hits.push(*p);
            }
        }
        Ok(hits)
    }

    /// Draw the selection overlay: a filled rectangle with a heavy outline
    /// in the selection fill color, plus highlight markers on the points it
    /// captures.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`](crate::Error::NotInRange) for a point
    /// outside the configured data domains.
    pub fn draw_selection<S: Surface>(
        &self,
        surface: &mut S,
        data: &Dataset,
        p1: Point,
        p2: Point,
    ) -> Result<()> {
        surface.draw_filled_rect(p1, p2, self.config.selection_fill);
        surface.draw_rect(p1, p2, self.config.selection_fill, SELECTION_OUTLINE_WIDTH);

        for hit in self.select_rect(data, p1, p2)? {
            let x = transform(hit.x, self.config.xdomain, self.view.x())?;
            let y = transform(hit.y, self.config.ydomain, self.view.y())?;
            surface.draw_filled_circle(
                Point::new(x, y),
                SELECTION_RADIUS_SCALE * self.config.point_scale,
                self.config.color,
            );
        }
        Ok(())
    }
}
