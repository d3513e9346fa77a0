//! Ellipsoidal-earth unit conversions.
//!
//! Converts between linear ground distance (meters) and angular resolution
//! (decimal degrees) at a given latitude. Implemented from scratch without
//! external dependencies; callers use these to size a regular output grid in
//! degrees given a target resolution in meters, or vice versa.

pub mod wgs84;

pub use wgs84::{degrees_to_meters, meters_to_degrees};
