//! Common types shared across the raster-regrid crates.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod raster;

pub use bbox::BoundingBox;
pub use error::GridError;
pub use grid::TargetGrid;
pub use raster::{Raster, MASK_BAND};
