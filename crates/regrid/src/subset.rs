//! Spatial subsetting of source pixels.

use ndarray::Array2;
use raster_common::BoundingBox;

/// Indices of the source pixels strictly inside the bounding box.
///
/// A pixel qualifies when its longitude is strictly between west and east AND
/// its latitude is strictly between south and north; pixels exactly on an
/// edge are excluded. Returns (y, x) pairs in row-major order. An empty
/// result is not an error here; callers decide whether zero coverage is
/// fatal.
pub fn select_within(
    lon: &Array2<f64>,
    lat: &Array2<f64>,
    bbox: &BoundingBox,
) -> Vec<(usize, usize)> {
    let (rows, cols) = lon.dim();
    let mut selected = Vec::new();

    for y in 0..rows {
        for x in 0..cols {
            if bbox.contains_strict(lon[[y, x]], lat[[y, x]]) {
                selected.push((y, x));
            }
        }
    }

    selected
}
