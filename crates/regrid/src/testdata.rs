//! Test fixture builders.
//!
//! Small rasters and grids with known layouts, shared by unit and pipeline
//! tests.

use chrono::{TimeZone, Utc};
use ndarray::{Array2, Array5};
use raster_common::{BoundingBox, Raster, TargetGrid, MASK_BAND};

/// Build a raster from explicit band planes (single z level and time slice).
///
/// All planes must share the shape of the coordinate arrays.
pub fn raster_from_bands(
    lat: Array2<f64>,
    lon: Array2<f64>,
    bands: &[(&str, Array2<f32>)],
) -> Raster {
    let (rows, cols) = lat.dim();
    let mut data = Array5::from_elem((rows, cols, 1, bands.len(), 1), f32::NAN);
    for (bi, (_, plane)) in bands.iter().enumerate() {
        for ((y, x), &v) in plane.indexed_iter() {
            data[[y, x, 0, bi, 0]] = v;
        }
    }

    let mut attrs = serde_json::Map::new();
    attrs.insert("sensor".to_string(), serde_json::json!("test"));
    attrs.insert("units".to_string(), serde_json::json!("unitless"));

    Raster {
        data,
        lon,
        lat,
        bands: bands.iter().map(|(label, _)| label.to_string()).collect(),
        times: vec![Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()],
        attrs,
        name: Some("test-raster".to_string()),
    }
}

/// 2x2 source raster with pixels at (lat, lon) = (0,0), (0,1), (1,0), (1,1),
/// a "value" band and a trailing mask band.
///
/// `values` and `mask` are given row-major: [(0,0), (0,1), (1,0), (1,1)].
pub fn unit_square_source(values: [f32; 4], mask: [f32; 4]) -> Raster {
    let lat = Array2::from_shape_fn((2, 2), |(y, _)| y as f64);
    let lon = Array2::from_shape_fn((2, 2), |(_, x)| x as f64);

    let value_plane = Array2::from_shape_vec((2, 2), values.to_vec()).expect("shape");
    let mask_plane = Array2::from_shape_vec((2, 2), mask.to_vec()).expect("shape");

    raster_from_bands(lat, lon, &[("value", value_plane), (MASK_BAND, mask_plane)])
}

/// 2x2 target grid whose mesh points coincide with the pixels of
/// [`unit_square_source`], inside a box that strictly contains them.
pub fn unit_square_grid() -> TargetGrid {
    let bbox = BoundingBox::new(1.5, -0.5, 1.5, -0.5);
    let lat_mesh = Array2::from_shape_fn((2, 2), |(r, _)| r as f64);
    let lon_mesh = Array2::from_shape_fn((2, 2), |(_, c)| c as f64);
    TargetGrid::new(bbox, 2, 2, lat_mesh, lon_mesh).expect("valid grid")
}
