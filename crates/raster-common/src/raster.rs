//! Labeled multi-band raster.

use chrono::{DateTime, Utc};
use ndarray::{Array2, Array5};
use serde_json::{Map, Value};

/// Conventional label of the validity/quality band.
pub const MASK_BAND: &str = "mask";

/// A labeled five-axis raster indexed by (y, x, z, band, time).
///
/// Carries per-pixel longitude/latitude coordinate arrays aligned to the
/// (y, x) axes, ordered band and time labels, and a free-form attribute map.
/// The same type describes both a natively sampled source raster and a
/// regridded output; for the output the coordinate arrays are the target
/// grid's meshes. The trailing band conventionally holds the validity mask.
#[derive(Debug, Clone)]
pub struct Raster {
    /// Data values in (y, x, z, band, time) order.
    pub data: Array5<f32>,
    /// Per-pixel longitude in decimal degrees, shaped (y, x).
    pub lon: Array2<f64>,
    /// Per-pixel latitude in decimal degrees, shaped (y, x).
    pub lat: Array2<f64>,
    /// Ordered band labels, one per band-axis entry.
    pub bands: Vec<String>,
    /// Time-axis labels, one per time-axis entry.
    pub times: Vec<DateTime<Utc>>,
    /// Attribute metadata, preserved verbatim by the regridding engine.
    pub attrs: Map<String, Value>,
    /// Dataset name, if any.
    pub name: Option<String>,
}

impl Raster {
    /// Number of rows (y axis).
    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of columns (x axis).
    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    /// Number of vertical levels (z axis).
    pub fn depth(&self) -> usize {
        self.data.shape()[2]
    }

    /// Number of bands.
    pub fn num_bands(&self) -> usize {
        self.data.shape()[3]
    }

    /// Number of time slices.
    pub fn num_times(&self) -> usize {
        self.data.shape()[4]
    }

    /// Index of the band with the given label.
    pub fn band_index(&self, label: &str) -> Option<usize> {
        self.bands.iter().position(|b| b == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ndarray::Array5;

    #[test]
    fn test_axis_accessors() {
        let raster = Raster {
            data: Array5::zeros((3, 4, 1, 2, 1)),
            lon: Array2::zeros((3, 4)),
            lat: Array2::zeros((3, 4)),
            bands: vec!["value".to_string(), MASK_BAND.to_string()],
            times: vec![Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()],
            attrs: Map::new(),
            name: None,
        };

        assert_eq!(raster.height(), 3);
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.depth(), 1);
        assert_eq!(raster.num_bands(), 2);
        assert_eq!(raster.num_times(), 1);
        assert_eq!(raster.band_index("value"), Some(0));
        assert_eq!(raster.band_index(MASK_BAND), Some(1));
        assert_eq!(raster.band_index("missing"), None);
    }
}
