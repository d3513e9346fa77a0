//! Scattered-data interpolation onto a regular target mesh.

pub mod delaunay;

use ndarray::Array2;

use crate::error::{RegridError, Result};
use crate::types::ResampleMethod;

/// Interpolate scattered point values onto the target coordinate meshes.
///
/// `lons`, `lats` and `values` describe the selected source points; the
/// meshes give the (lon, lat) of every target cell. Cells the method cannot
/// cover (outside the convex hull for linear) come out as NaN.
///
/// Fails with [`RegridError::DegenerateInterpolation`] when the point set
/// cannot support the method: zero points for any method, fewer than three or
/// all-collinear points for linear.
pub fn interpolate_scattered(
    lons: &[f64],
    lats: &[f64],
    values: &[f32],
    lon_mesh: &Array2<f64>,
    lat_mesh: &Array2<f64>,
    method: ResampleMethod,
    band: &str,
) -> Result<Array2<f32>> {
    if values.is_empty() {
        return Err(RegridError::degenerate(
            band,
            "no source points to interpolate from",
        ));
    }

    match method {
        ResampleMethod::Nearest => Ok(nearest(lons, lats, values, lon_mesh, lat_mesh)),
        ResampleMethod::Linear => linear(lons, lats, values, lon_mesh, lat_mesh, band),
    }
}

/// Nearest-neighbor: every target cell takes the value of the closest source
/// point in (lon, lat) space.
fn nearest(
    lons: &[f64],
    lats: &[f64],
    values: &[f32],
    lon_mesh: &Array2<f64>,
    lat_mesh: &Array2<f64>,
) -> Array2<f32> {
    let (rows, cols) = lon_mesh.dim();
    let mut out = Array2::from_elem((rows, cols), f32::NAN);

    for r in 0..rows {
        for c in 0..cols {
            let tx = lon_mesh[[r, c]];
            let ty = lat_mesh[[r, c]];

            let mut best = f64::INFINITY;
            let mut best_value = f32::NAN;
            for i in 0..values.len() {
                let dx = lons[i] - tx;
                let dy = lats[i] - ty;
                let d2 = dx * dx + dy * dy;
                if d2 < best {
                    best = d2;
                    best_value = values[i];
                }
            }

            out[[r, c]] = best_value;
        }
    }

    out
}

/// Linear: barycentric interpolation over the Delaunay triangulation of the
/// source points. Cells outside the convex hull stay NaN.
fn linear(
    lons: &[f64],
    lats: &[f64],
    values: &[f32],
    lon_mesh: &Array2<f64>,
    lat_mesh: &Array2<f64>,
    band: &str,
) -> Result<Array2<f32>> {
    let points: Vec<(f64, f64)> = lons.iter().zip(lats).map(|(&x, &y)| (x, y)).collect();
    let triangulation =
        delaunay::triangulate(&points).map_err(|reason| RegridError::degenerate(band, reason))?;

    let (rows, cols) = lon_mesh.dim();
    let mut out = Array2::from_elem((rows, cols), f32::NAN);

    for r in 0..rows {
        for c in 0..cols {
            if let Some((verts, weights)) = triangulation.locate(lon_mesh[[r, c]], lat_mesh[[r, c]])
            {
                let value = weights[0] * values[verts[0]] as f64
                    + weights[1] * values[verts[1]] as f64
                    + weights[2] * values[verts[2]] as f64;
                out[[r, c]] = value as f32;
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_from(coords: &[(f64, f64)], rows: usize, cols: usize) -> (Array2<f64>, Array2<f64>) {
        let lon = Array2::from_shape_vec((rows, cols), coords.iter().map(|p| p.0).collect())
            .expect("shape");
        let lat = Array2::from_shape_vec((rows, cols), coords.iter().map(|p| p.1).collect())
            .expect("shape");
        (lon, lat)
    }

    #[test]
    fn test_nearest_picks_closest_point() {
        let lons = [0.0, 10.0];
        let lats = [0.0, 10.0];
        let values = [1.0, 2.0];
        let (lon_mesh, lat_mesh) = mesh_from(&[(1.0, 1.0), (9.0, 9.0)], 1, 2);

        let out = interpolate_scattered(
            &lons,
            &lats,
            &values,
            &lon_mesh,
            &lat_mesh,
            ResampleMethod::Nearest,
            "value",
        )
        .unwrap();

        assert_eq!(out[[0, 0]], 1.0);
        assert_eq!(out[[0, 1]], 2.0);
    }

    #[test]
    fn test_linear_recovers_planar_field() {
        // Values follow the plane v = 2*lon + 3*lat; linear interpolation
        // inside the hull must reproduce it.
        let lons = [0.0, 4.0, 0.0, 4.0];
        let lats = [0.0, 0.0, 4.0, 4.0];
        let values: Vec<f32> = lons
            .iter()
            .zip(&lats)
            .map(|(&x, &y)| (2.0 * x + 3.0 * y) as f32)
            .collect();
        let (lon_mesh, lat_mesh) = mesh_from(&[(1.0, 1.0), (2.5, 3.0)], 1, 2);

        let out = interpolate_scattered(
            &lons,
            &lats,
            &values,
            &lon_mesh,
            &lat_mesh,
            ResampleMethod::Linear,
            "value",
        )
        .unwrap();

        assert!((out[[0, 0]] - 5.0).abs() < 1e-4, "got {}", out[[0, 0]]);
        assert!((out[[0, 1]] - 14.0).abs() < 1e-4, "got {}", out[[0, 1]]);
    }

    #[test]
    fn test_linear_outside_hull_is_nan() {
        let lons = [0.0, 1.0, 0.0];
        let lats = [0.0, 0.0, 1.0];
        let values = [1.0, 2.0, 3.0];
        let (lon_mesh, lat_mesh) = mesh_from(&[(10.0, 10.0)], 1, 1);

        let out = interpolate_scattered(
            &lons,
            &lats,
            &values,
            &lon_mesh,
            &lat_mesh,
            ResampleMethod::Linear,
            "value",
        )
        .unwrap();

        assert!(out[[0, 0]].is_nan());
    }

    #[test]
    fn test_empty_point_set_is_degenerate() {
        let (lon_mesh, lat_mesh) = mesh_from(&[(0.0, 0.0)], 1, 1);

        let err = interpolate_scattered(
            &[],
            &[],
            &[],
            &lon_mesh,
            &lat_mesh,
            ResampleMethod::Nearest,
            "value",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            crate::error::RegridError::DegenerateInterpolation { .. }
        ));
    }

    #[test]
    fn test_linear_collinear_points_degenerate() {
        let lons = [0.0, 1.0, 2.0];
        let lats = [0.0, 0.0, 0.0];
        let values = [1.0, 2.0, 3.0];
        let (lon_mesh, lat_mesh) = mesh_from(&[(1.0, 0.0)], 1, 1);

        let err = interpolate_scattered(
            &lons,
            &lats,
            &values,
            &lon_mesh,
            &lat_mesh,
            ResampleMethod::Linear,
            "value",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            crate::error::RegridError::DegenerateInterpolation { .. }
        ));
    }
}
