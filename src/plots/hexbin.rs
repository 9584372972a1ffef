//! Hex-bin density plot façade.

use crate::backend::Surface;
use crate::color::Rgba;
use crate::config::PlotConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::hexbin::{HexGrid, DEFAULT_TARGET_BINS};
use crate::plots::frame::Viewport;

/// Gradient endpoint for the sparsest cells.
const COOL: Rgba = Rgba::new(0, 0, 255, 8);

/// Gradient endpoint for the densest cell.
const HOT: Rgba = Rgba::new(0, 0, 255, 255);

/// Aggregates the dataset into a hexagonal grid and draws each non-empty
/// cell as a filled fan shaded by relative density, with an outline in the
/// configured stroke color.
#[derive(Debug, Clone)]
pub struct HexBinPlot {
    view: Viewport,
    config: PlotConfig,
    target_bins: usize,
}

impl HexBinPlot {
    /// Create a hex-bin plot whose viewport is derived from `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// when the configured margins consume the whole surface.
    pub fn new<S: Surface>(surface: &S, config: PlotConfig) -> Result<Self> {
        let view = Viewport::from_surface(surface, &config.margin)?;
        Ok(Self { view, config, target_bins: DEFAULT_TARGET_BINS })
    }

    /// Create a hex-bin plot over an explicit viewport.
    #[must_use]
    pub const fn with_viewport(view: Viewport, config: PlotConfig) -> Self {
        Self { view, config, target_bins: DEFAULT_TARGET_BINS }
    }

    /// Override the number of hexagons along the vertical axis.
    #[must_use]
    pub const fn with_target_bins(mut self, target_bins: usize) -> Self {
        self.target_bins = target_bins;
        self
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

    /// Aggregate `data` and draw the shaded cells.
    ///
    /// The grid is rebuilt from scratch on every call. Returns the
    /// configuration that was in effect (hex-bin plots never adjust
    /// domains).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`](crate::Error::NotInRange) for a point
    /// outside the configured data domains, and
    /// [`Error::EmptyData`](crate::Error::EmptyData) for a zero target bin
    /// count.
    pub fn plot<S: Surface>(&self, surface: &mut S, data: &Dataset) -> Result<PlotConfig> {
        let grid = HexGrid::build(
            data,
            self.config.xdomain,
            self.config.ydomain,
            self.view.x(),
            self.view.y(),
            self.target_bins,
        )?;

        for cell in grid.cells() {
            let shade = COOL.lerp(HOT, cell.weight);
            let colors = [shade; 7];
            surface.draw_filled_polygon(&cell.vertices, &colors);
            for edge in cell.vertices.windows(2) {
                surface.draw_line(edge[0], edge[1], self.config.color, 1.0);
            }
        }
        Ok(self.config.clone())
    }
}
