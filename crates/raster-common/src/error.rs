//! Error types for grid construction.

use thiserror::Error;

/// Errors raised while building a target-grid descriptor.
#[derive(Debug, Error)]
pub enum GridError {
    /// The bounding box is degenerate.
    #[error("degenerate bounding box: north={north}, south={south}, east={east}, west={west}")]
    DegenerateBbox {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },

    /// A coordinate mesh does not match the declared grid dimensions.
    #[error("{mesh} mesh shape {actual:?} does not match declared dimensions {expected:?}")]
    MeshShape {
        mesh: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// The grid would have zero rows or columns.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDims { rows: usize, cols: usize },

    /// The requested ground resolution is not positive.
    #[error("resolution must be positive, got {0}")]
    InvalidResolution(f64),
}
