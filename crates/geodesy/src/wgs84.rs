//! WGS84 scale factors for converting between meters and decimal degrees.
//!
//! The east-west factor is derived from the reduced latitude
//! `atan(b/a * tan(lat))` on the WGS84 ellipsoid. The north-south factor is a
//! four-term cosine series approximation of the meridional arc length per
//! degree of latitude.

use std::f64::consts::PI;

/// WGS84 semi-major axis in meters.
pub const SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS84 semi-minor to semi-major axis ratio (b/a).
pub const AXIS_RATIO: f64 = 0.996_647_19;

/// Meters of ground distance per decimal degree at a given latitude.
///
/// Returns (latitude_factor, longitude_factor). The longitude factor
/// collapses toward zero at the poles, where the conversion loses physical
/// meaning; any finite latitude in (-90, 90) is usable.
fn scale_factors(lat_deg: f64) -> (f64, f64) {
    let lat = lat_deg.to_radians();

    // Reduced latitude on the ellipsoid.
    let reduced = (AXIS_RATIO * lat.tan()).atan();

    let lon_factor = (PI / 180.0) * SEMI_MAJOR_AXIS_M * reduced.cos();
    let lat_factor = 111_132.92 - 559.82 * (2.0 * lat).cos() + 1.175 * (4.0 * lat).cos()
        - 0.0023 * (6.0 * lat).cos();

    (lat_factor, lon_factor)
}

/// Convert a ground resolution in meters to decimal degrees.
///
/// `point` is a (latitude, longitude) pair in decimal degrees; only the
/// latitude enters the conversion. Returns (delta_lat, delta_lon), the same
/// ground resolution expressed in decimal degrees at that latitude.
pub fn meters_to_degrees(point: (f64, f64), scale_m: f64) -> (f64, f64) {
    let (lat_factor, lon_factor) = scale_factors(point.0);
    (scale_m / lat_factor, scale_m / lon_factor)
}

/// Convert a resolution in decimal degrees to meters.
///
/// `point` is a (latitude, longitude) pair in decimal degrees. Returns
/// (delta_lat_m, delta_lon_m). Exact inverse of [`meters_to_degrees`] for the
/// same latitude and scale, up to floating-point rounding.
pub fn degrees_to_meters(point: (f64, f64), scale_dd: f64) -> (f64, f64) {
    let (lat_factor, lon_factor) = scale_factors(point.0);
    (scale_dd * lat_factor, scale_dd * lon_factor)
}
