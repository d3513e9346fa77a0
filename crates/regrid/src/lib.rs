//! Scattered-to-Grid Regridding Engine
//!
//! This crate converts a raster sampled on an irregular geographic pixel grid
//! onto a caller-supplied regular target grid. Per-pixel values come from
//! scattered-data interpolation, and the trailing band of the output doubles
//! as a combined validity/quality mask.
//!
//! # Pipeline
//!
//! ```text
//! regrid(source, grid, method)
//!      │
//!      ├─► validate declared shapes (ShapeMismatch)
//!      │
//!      ├─► select source pixels strictly inside grid.bbox (EmptySelection)
//!      │
//!      ├─► per band:
//!      │         ├─► interpolate scattered points onto the target meshes
//!      │         │   (the "mask" band always uses nearest-neighbor)
//!      │         ├─► replace sub-sentinel values (< -1) with NaN
//!      │         └─► AND the quality grid with "value >= 0"
//!      │
//!      └─► merge quality into the trailing band,
//!          assemble the labeled output raster
//! ```
//!
//! # Example
//!
//! ```
//! use regrid::{regrid, ResampleMethod};
//!
//! let source = regrid::testdata::unit_square_source(
//!     [10.0, 20.0, 30.0, 40.0],
//!     [1.0, 1.0, 1.0, 1.0],
//! );
//! let grid = regrid::testdata::unit_square_grid();
//!
//! let output = regrid(&source, &grid, ResampleMethod::Nearest).unwrap();
//! assert_eq!(output.data.shape(), &[2, 2, 1, 2, 1]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod quality;
pub mod subset;
pub mod testdata;
pub mod types;

// Re-export commonly used items at crate root
pub use config::RegridConfig;
pub use engine::regrid;
pub use error::{RegridError, Result};
pub use interpolate::interpolate_scattered;
pub use quality::QualityMask;
pub use subset::select_within;
pub use types::ResampleMethod;
