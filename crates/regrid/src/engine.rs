//! The regridding pipeline.
//!
//! Subsets the source pixels to the target bounding box, interpolates every
//! band onto the target meshes, aggregates the per-band validity signal, and
//! assembles the labeled output raster.

use ndarray::{s, Array2, Array5};
use raster_common::{Raster, TargetGrid, MASK_BAND};

use crate::error::{RegridError, Result};
use crate::interpolate::interpolate_scattered;
use crate::quality::QualityMask;
use crate::subset::select_within;
use crate::types::ResampleMethod;

/// Values strictly below this are sensor fill codes, not physical readings;
/// they are replaced with NaN after interpolation.
const FILL_THRESHOLD: f32 = -1.0;

/// Regrid a raster onto a regular target grid.
///
/// Selects the source pixels strictly inside `grid`'s bounding box,
/// interpolates each band's values onto the target meshes with `method`
/// (the band labeled `"mask"` always uses nearest-neighbor), replaces
/// sub-sentinel values with NaN, and folds a per-pixel validity AND across
/// all bands into the trailing band of the output.
///
/// Exactly one z-plane and one time slice (the first of each) are populated
/// per invocation; handling further epochs is the caller's responsibility.
/// Band and time labels and the attribute map are carried over unchanged.
///
/// # Errors
/// * [`RegridError::ShapeMismatch`] - a coordinate array or mesh disagrees
///   with the shape it annotates; checked before any interpolation work.
/// * [`RegridError::EmptySelection`] - no source pixels inside the box.
/// * [`RegridError::DegenerateInterpolation`] - a band's point set cannot
///   support the method; aborts the whole call.
pub fn regrid(source: &Raster, grid: &TargetGrid, method: ResampleMethod) -> Result<Raster> {
    validate_shapes(source, grid)?;

    let selected = select_within(&source.lon, &source.lat, &grid.bbox);
    if selected.is_empty() {
        return Err(RegridError::empty_selection(&grid.bbox));
    }
    tracing::debug!(
        selected = selected.len(),
        rows = grid.rows,
        cols = grid.cols,
        "selected source pixels for regridding"
    );

    let lons: Vec<f64> = selected.iter().map(|&(y, x)| source.lon[[y, x]]).collect();
    let lats: Vec<f64> = selected.iter().map(|&(y, x)| source.lat[[y, x]]).collect();

    let mut out = Array5::from_elem(
        (
            grid.rows,
            grid.cols,
            source.depth(),
            source.num_bands(),
            source.num_times(),
        ),
        f32::NAN,
    );
    let mut quality = QualityMask::new(grid.rows, grid.cols);

    for (bi, label) in source.bands.iter().enumerate() {
        // Mask semantics must never be blurred by smooth interpolation.
        let band_method = if label == MASK_BAND {
            ResampleMethod::Nearest
        } else {
            method
        };

        let values: Vec<f32> = selected
            .iter()
            .map(|&(y, x)| source.data[[y, x, 0, bi, 0]])
            .collect();

        let plane = interpolate_scattered(
            &lons,
            &lats,
            &values,
            &grid.lon_mesh,
            &grid.lat_mesh,
            band_method,
            label,
        )?;

        // Fill codes are replaced before the plane reaches the output and
        // quality grids.
        let masked = replace_fill(&plane);
        quality.accumulate(&masked);
        out.slice_mut(s![.., .., 0, bi, 0]).assign(&masked);

        tracing::debug!(band = %label, method = %band_method, "regridded band");
    }

    // The trailing band doubles as the combined validity/quality mask.
    let last = source.num_bands() - 1;
    let mask_plane = out.slice(s![.., .., 0, last, 0]).to_owned();
    let merged = quality.merge_into(&mask_plane);
    out.slice_mut(s![.., .., 0, last, 0]).assign(&merged);

    Ok(assemble_output(source, grid, out))
}

/// Replace sub-sentinel values with NaN, leaving everything else untouched.
fn replace_fill(plane: &Array2<f32>) -> Array2<f32> {
    plane.mapv(|v| if v < FILL_THRESHOLD { f32::NAN } else { v })
}

/// Check the declared-shape invariants before any interpolation work.
fn validate_shapes(source: &Raster, grid: &TargetGrid) -> Result<()> {
    let planes = (source.height(), source.width());
    if source.lon.dim() != planes {
        return Err(RegridError::shape_mismatch(
            "source longitude array",
            format!("{:?}", planes),
            format!("{:?}", source.lon.dim()),
        ));
    }
    if source.lat.dim() != planes {
        return Err(RegridError::shape_mismatch(
            "source latitude array",
            format!("{:?}", planes),
            format!("{:?}", source.lat.dim()),
        ));
    }
    if source.bands.len() != source.num_bands() {
        return Err(RegridError::shape_mismatch(
            "band labels",
            source.num_bands().to_string(),
            source.bands.len().to_string(),
        ));
    }
    if source.bands.is_empty() {
        return Err(RegridError::shape_mismatch(
            "band axis",
            "at least 1 band".to_string(),
            "0".to_string(),
        ));
    }
    if source.times.len() != source.num_times() {
        return Err(RegridError::shape_mismatch(
            "time labels",
            source.num_times().to_string(),
            source.times.len().to_string(),
        ));
    }
    if grid.lat_mesh.dim() != grid.dims() {
        return Err(RegridError::shape_mismatch(
            "target latitude mesh",
            format!("{:?}", grid.dims()),
            format!("{:?}", grid.lat_mesh.dim()),
        ));
    }
    if grid.lon_mesh.dim() != grid.dims() {
        return Err(RegridError::shape_mismatch(
            "target longitude mesh",
            format!("{:?}", grid.dims()),
            format!("{:?}", grid.lon_mesh.dim()),
        ));
    }

    Ok(())
}

/// Assemble the labeled output on the target grid's coordinates.
fn assemble_output(source: &Raster, grid: &TargetGrid, data: Array5<f32>) -> Raster {
    Raster {
        data,
        lon: grid.lon_mesh.clone(),
        lat: grid.lat_mesh.clone(),
        bands: source.bands.clone(),
        times: source.times.clone(),
        attrs: source.attrs.clone(),
        name: source.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;
    use raster_common::BoundingBox;

    #[test]
    fn test_replace_fill_threshold_is_exclusive() {
        let plane = Array2::from_shape_vec((1, 4), vec![-5.0, -1.0, -0.5, 3.0]).unwrap();
        let masked = replace_fill(&plane);

        assert!(masked[[0, 0]].is_nan(), "-5 is below the fill threshold");
        assert_eq!(masked[[0, 1]], -1.0, "-1 itself is kept");
        assert_eq!(masked[[0, 2]], -0.5);
        assert_eq!(masked[[0, 3]], 3.0);
    }

    #[test]
    fn test_mismatched_coordinate_array_rejected() {
        let mut source = testdata::unit_square_source([1.0, 2.0, 3.0, 4.0], [1.0, 1.0, 1.0, 1.0]);
        source.lon = Array2::zeros((3, 3));

        let grid = testdata::unit_square_grid();
        let err = regrid(&source, &grid, ResampleMethod::Nearest).unwrap_err();
        assert!(matches!(err, RegridError::ShapeMismatch { what, .. } if what == "source longitude array"));
    }

    #[test]
    fn test_mismatched_band_labels_rejected() {
        let mut source = testdata::unit_square_source([1.0, 2.0, 3.0, 4.0], [1.0, 1.0, 1.0, 1.0]);
        source.bands.push("extra".to_string());

        let grid = testdata::unit_square_grid();
        let err = regrid(&source, &grid, ResampleMethod::Nearest).unwrap_err();
        assert!(matches!(err, RegridError::ShapeMismatch { what, .. } if what == "band labels"));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let source = testdata::unit_square_source([1.0, 2.0, 3.0, 4.0], [1.0, 1.0, 1.0, 1.0]);
        // A box far away from the source extent.
        let bbox = BoundingBox::new(60.0, 50.0, 60.0, 50.0);
        let grid = TargetGrid::from_bbox(bbox, 2, 2).unwrap();

        let err = regrid(&source, &grid, ResampleMethod::Nearest).unwrap_err();
        assert!(matches!(err, RegridError::EmptySelection { .. }));
    }
}
