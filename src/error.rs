//! Error types for quadplot operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quadplot operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Degenerate range with equal endpoints.
    #[error("invalid range: x={x} y={y}")]
    InvalidRange {
        /// First endpoint.
        x: f64,
        /// Second endpoint.
        y: f64,
    },

    /// Value transformed against a source range that does not contain it.
    #[error("value {value} not in range [{x},{y}]")]
    NotInRange {
        /// The out-of-range value.
        value: f64,
        /// First endpoint of the source range.
        x: f64,
        /// Second endpoint of the source range.
        y: f64,
    },

    /// Orientation not supported by the plot it was handed to.
    #[error("{plot} does not support orientation {orientation}")]
    InvalidOrientation {
        /// The plot type that rejected the orientation.
        plot: &'static str,
        /// Name of the rejected orientation.
        orientation: &'static str,
    },

    /// Empty data provided where non-empty is required.
    #[error("empty data provided")]
    EmptyData,

    /// Surface too small for the configured margins.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Surface width in pixels.
        width: f64,
        /// Surface height in pixels.
        height: f64,
    },
}
