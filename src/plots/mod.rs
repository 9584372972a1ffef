//! High-level plot façades.
//!
//! Each façade pairs a [`Viewport`] (derived from the target surface and
//! the configured margins) with a [`PlotConfig`](crate::config::PlotConfig)
//! and exposes `frame` for the shared box/grid/tick chrome and `plot` for
//! the data itself. `plot` recomputes all derived geometry (quartiles,
//! bins, hex grid) from the dataset on every call and returns the effective
//! configuration it drew with; façades that normalize a domain while
//! plotting report it there rather than mutating shared state.

pub mod frame;

mod boxplot;
mod hexbin;
mod histogram;
mod scatter;

pub use boxplot::BoxPlot;
pub use frame::Viewport;
pub use hexbin::HexBinPlot;
pub use histogram::HistogramPlot;
pub use scatter::ScatterPlot;
