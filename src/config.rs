//! Plot configuration values and defaults.
//!
//! [`PlotConfig`] replaces hidden global defaults with an explicit value:
//! construct one (or start from [`PlotConfig::default`]), adjust it, and
//! pass it into a plot. Façades that normalize a domain while plotting
//! return the effective configuration instead of mutating shared state.

use crate::backend::TextAlign;
use crate::color::Rgba;
use crate::range::Range;

/// Outer margins in font-height units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
    /// Right margin.
    pub right: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self { top: 7.0, bottom: 3.0, left: 5.0, right: 2.0 }
    }
}

/// Which side or axis a plot attaches to.
///
/// One closed set shared by all plot types: histograms accept the four
/// sides, box plots the two axis orientations. Handing a façade an
/// orientation outside its accepted subset is an
/// [`Error::InvalidOrientation`](crate::Error::InvalidOrientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Bars rise from the bottom edge.
    Bottom,
    /// Bars hang from the top edge.
    Top,
    /// Bars extend from the left edge.
    Left,
    /// Bars extend from the right edge.
    Right,
    /// Box spans the x axis.
    Horizontal,
    /// Box spans the y axis.
    Vertical,
}

impl Orientation {
    /// Stable name for error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "Bottom",
            Self::Top => "Top",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        }
    }
}

/// Configuration consumed by the plot façades.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Default point/line stroke color.
    pub color: Rgba,
    /// Default fill color.
    pub fill: Rgba,
    /// Fill color for selections and histogram bars.
    pub selection_fill: Rgba,
    /// Line width in pixels.
    pub line_width: f64,
    /// Expansion factor for points and text.
    pub point_scale: f64,
    /// Base point radius in pixels.
    pub point_radius: f64,
    /// Number of tick marks on the x axis.
    pub x_ticks: u32,
    /// Number of tick marks on the y axis.
    pub y_ticks: u32,
    /// Text alignment for labels.
    pub align: TextAlign,
    /// Number of histogram bins.
    pub bins: usize,
    /// Which side/axis an oriented plot attaches to.
    pub orientation: Orientation,
    /// X domain of the dataset values.
    pub xdomain: Range,
    /// Y domain of the dataset values.
    pub ydomain: Range,
    /// Outer margins in font-height units.
    pub margin: Margin,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            color: Rgba::new(50, 50, 255, 255),
            fill: Rgba::new(50, 50, 255, 50),
            selection_fill: Rgba::new(50, 220, 50, 50),
            line_width: 1.0,
            point_scale: 1.0,
            point_radius: 2.0,
            x_ticks: 7,
            y_ticks: 5,
            align: TextAlign::Center,
            bins: 20,
            orientation: Orientation::Bottom,
            xdomain: Range::default(),
            ydomain: Range::default(),
            margin: Margin::default(),
        }
    }
}

impl PlotConfig {
    /// Set the x data domain.
    pub fn xlim(&mut self, low: f64, high: f64) {
        self.xdomain.reset(low, high);
    }

    /// Set the y data domain.
    pub fn ylim(&mut self, low: f64, high: f64) {
        self.ydomain.reset(low, high);
    }
}
