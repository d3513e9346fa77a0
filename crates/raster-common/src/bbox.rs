//! Geographic bounding box.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Create a new bounding box from edge coordinates.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Check that the box is non-degenerate (north > south, east > west).
    pub fn is_valid(&self) -> bool {
        self.north > self.south && self.east > self.west
    }

    /// Get the width in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Get the height in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Get the center point as (latitude, longitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Strict containment test: points exactly on a box edge are excluded.
    ///
    /// Both comparisons use `>`/`<` so a pixel sitting on a shared tile
    /// boundary belongs to neither side.
    pub fn contains_strict(&self, lon: f64, lat: f64) -> bool {
        lon > self.west && lon < self.east && lat > self.south && lat < self.north
    }
}
