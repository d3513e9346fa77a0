//! Core types for the regridding engine.

use serde::{Deserialize, Serialize};

/// Scattered-data interpolation method for regridding.
///
/// The band labeled `"mask"` is always regridded with nearest-neighbor
/// regardless of the method chosen here, so validity values are never blurred
/// by smooth interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleMethod {
    /// Value of the nearest source point (preserves exact values).
    #[default]
    Nearest,
    /// Triangulation-based linear interpolation; cells outside the convex
    /// hull of the source points come out as missing.
    Linear,
}

impl ResampleMethod {
    /// Parse from string (case-insensitive). Unknown values fall back to
    /// nearest-neighbor.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "linear" => Self::Linear,
            _ => Self::Nearest,
        }
    }
}

impl std::fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Linear => write!(f, "linear"),
        }
    }
}
