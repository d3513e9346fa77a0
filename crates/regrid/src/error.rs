//! Error types for the regridding engine.

use raster_common::BoundingBox;
use thiserror::Error;

/// Errors that can occur during regridding.
///
/// All variants are unrecoverable for the current call: the inputs are
/// deterministic, so a retry would reproduce the identical error. There is no
/// partial-success mode.
#[derive(Debug, Error)]
pub enum RegridError {
    /// No source pixels fall inside the target bounding box.
    #[error("no source pixels inside target bounds (north={north}, south={south}, east={east}, west={west})")]
    EmptySelection {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },

    /// A declared shape disagrees with the data it describes.
    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: String,
        actual: String,
    },

    /// Scattered interpolation has no defined result for this point set.
    #[error("interpolation degenerate for band '{band}': {reason}")]
    DegenerateInterpolation { band: String, reason: String },
}

impl RegridError {
    /// Create an EmptySelection error for a bounding box.
    pub fn empty_selection(bbox: &BoundingBox) -> Self {
        Self::EmptySelection {
            north: bbox.north,
            south: bbox.south,
            east: bbox.east,
            west: bbox.west,
        }
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(
        what: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            what,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a DegenerateInterpolation error.
    pub fn degenerate(band: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DegenerateInterpolation {
            band: band.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for regridding operations.
pub type Result<T> = std::result::Result<T, RegridError>;
