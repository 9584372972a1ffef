//! # Quadplot
//!
//! Backend-agnostic 2D plotting geometry core.
//!
//! Quadplot takes in-memory numeric datasets (x/y point pairs) and turns them
//! into pixel-space drawing commands for scatter plots, box plots, histograms,
//! and hex-bin density plots. It owns the coordinate-transform algebra,
//! Liang-Barsky line clipping, quartile statistics, histogram binning, and
//! hexagonal tessellation; actual rasterization is delegated to a caller
//! supplied [`backend::Surface`].
//!
//! ## Quick Start
//!
//! ```rust
//! use quadplot::prelude::*;
//!
//! let data = Dataset::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(5.0, 5.0),
//!     Point::new(10.0, 10.0),
//! ]);
//!
//! let mut config = PlotConfig::default();
//! config.xlim(0.0, 10.0);
//! config.ylim(0.0, 10.0);
//!
//! // Any Surface implementation works; RecordingSurface captures commands.
//! let mut surface = RecordingSurface::new(640.0, 480.0, 10.0);
//! let plot = ScatterPlot::new(&surface, config)?;
//! plot.frame(&mut surface)?;
//! plot.plot(&mut surface, &data)?;
//! # Ok::<(), quadplot::Error>(())
//! ```
//!
//! ## Design
//!
//! - Pure geometry: every computation is a synchronous function of its
//!   inputs, with no hidden state and no drawing side effects outside the
//!   [`backend::Surface`] calls the plot façades make.
//! - Explicit configuration: [`config::PlotConfig`] is a plain value passed
//!   into each plot; there are no process-wide defaults.
//! - Strict domain policy: transforming a value outside its source range is
//!   an error, never a silent extrapolation.
//!
//! ## References
//!
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for
//!   Line Clipping." *ACM Transactions on Graphics*, 3(1), 1-22.
//! - Carr, D. B. et al. (1987). "Scatterplot Matrix Techniques for Large N."
//!   *JASA*, 82(398), 424-436. (hexagonal binning)

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Oriented intervals and the affine range-to-range transform.
pub mod range;

/// Geometric primitives (points and line segments).
pub mod geometry;

/// Liang-Barsky line clipping against an axis-aligned rectangle.
pub mod clip;

/// Ordered point collections with cached domain bounds.
pub mod dataset;

/// Box-plot quartile and outlier statistics.
pub mod summary;

/// Equal-width histogram binning.
pub mod bins;

/// Hexagonal tessellation and per-cell aggregation.
pub mod hexbin;

/// R-style "pretty" axis tick placement.
pub mod ticks;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Color types and interpolation.
pub mod color;

/// The rendering-backend contract and a recording implementation.
pub mod backend;

/// Plot configuration values and defaults.
pub mod config;

/// High-level plot façades (scatter, box, histogram, hexbin).
pub mod plots;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for quadplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use quadplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::{Command, RecordingSurface, Surface, TextAlign};
    pub use crate::bins::BinnedAxis;
    pub use crate::clip::clip_line;
    pub use crate::color::Rgba;
    pub use crate::config::{Margin, Orientation, PlotConfig};
    pub use crate::dataset::Dataset;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Point};
    pub use crate::hexbin::HexGrid;
    pub use crate::plots::{BoxPlot, HexBinPlot, HistogramPlot, ScatterPlot, Viewport};
    pub use crate::range::{transform, Range};
    pub use crate::summary::BoxPlotSummary;
}
