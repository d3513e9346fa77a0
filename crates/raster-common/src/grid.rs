//! Target-grid descriptor and mesh construction.

use geodesy::meters_to_degrees;
use ndarray::Array2;

use crate::bbox::BoundingBox;
use crate::error::GridError;

/// Descriptor of a destination regular grid.
///
/// Holds the bounding box, the output dimensions, and two coordinate meshes
/// giving the latitude and longitude of every target pixel. Mesh shapes equal
/// the declared dimensions; the box is non-degenerate.
#[derive(Debug, Clone)]
pub struct TargetGrid {
    /// Geographic extent of the grid.
    pub bbox: BoundingBox,
    /// Number of output rows.
    pub rows: usize,
    /// Number of output columns.
    pub cols: usize,
    /// Latitude of every target pixel, shaped (rows, cols).
    pub lat_mesh: Array2<f64>,
    /// Longitude of every target pixel, shaped (rows, cols).
    pub lon_mesh: Array2<f64>,
}

impl TargetGrid {
    /// Create a grid from explicit meshes.
    pub fn new(
        bbox: BoundingBox,
        rows: usize,
        cols: usize,
        lat_mesh: Array2<f64>,
        lon_mesh: Array2<f64>,
    ) -> Result<Self, GridError> {
        if !bbox.is_valid() {
            return Err(GridError::DegenerateBbox {
                north: bbox.north,
                south: bbox.south,
                east: bbox.east,
                west: bbox.west,
            });
        }
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDims { rows, cols });
        }
        if lat_mesh.dim() != (rows, cols) {
            return Err(GridError::MeshShape {
                mesh: "latitude",
                expected: (rows, cols),
                actual: lat_mesh.dim(),
            });
        }
        if lon_mesh.dim() != (rows, cols) {
            return Err(GridError::MeshShape {
                mesh: "longitude",
                expected: (rows, cols),
                actual: lon_mesh.dim(),
            });
        }

        Ok(Self {
            bbox,
            rows,
            cols,
            lat_mesh,
            lon_mesh,
        })
    }

    /// Build a grid with evenly spaced pixels over the box.
    ///
    /// Rows run north to south and columns west to east, inclusive of the
    /// box corners.
    pub fn from_bbox(bbox: BoundingBox, rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDims { rows, cols });
        }

        let lat_step = if rows > 1 {
            bbox.height() / (rows - 1) as f64
        } else {
            0.0
        };
        let lon_step = if cols > 1 {
            bbox.width() / (cols - 1) as f64
        } else {
            0.0
        };

        let lat_mesh =
            Array2::from_shape_fn((rows, cols), |(r, _)| bbox.north - r as f64 * lat_step);
        let lon_mesh =
            Array2::from_shape_fn((rows, cols), |(_, c)| bbox.west + c as f64 * lon_step);

        Self::new(bbox, rows, cols, lat_mesh, lon_mesh)
    }

    /// Size a grid from a ground resolution in meters.
    ///
    /// The resolution is converted to decimal degrees at the center latitude
    /// of the box, and the dimensions are rounded up so the grid covers the
    /// full extent.
    pub fn from_resolution_meters(bbox: BoundingBox, meters: f64) -> Result<Self, GridError> {
        if !bbox.is_valid() {
            return Err(GridError::DegenerateBbox {
                north: bbox.north,
                south: bbox.south,
                east: bbox.east,
                west: bbox.west,
            });
        }
        if !(meters > 0.0) {
            return Err(GridError::InvalidResolution(meters));
        }

        let (dlat, dlon) = meters_to_degrees(bbox.center(), meters);
        let rows = (bbox.height() / dlat).ceil().max(1.0) as usize;
        let cols = (bbox.width() / dlon).ceil().max(1.0) as usize;

        Self::from_bbox(bbox, rows, cols)
    }

    /// Output dimensions as (rows, cols).
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
