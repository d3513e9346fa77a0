//! Configuration for the regridding engine.

use serde::{Deserialize, Serialize};

use crate::types::ResampleMethod;

/// Configuration for the regridding engine.
///
/// [`crate::regrid`] takes the method explicitly; this carries a deployment's
/// default for callers that resolve it from the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegridConfig {
    /// Interpolation method for ordinary (non-mask) bands.
    pub resample: ResampleMethod,
}

impl RegridConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("REGRID_RESAMPLE_METHOD") {
            config.resample = ResampleMethod::from_str(&val);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegridConfig::default();
        assert_eq!(config.resample, ResampleMethod::Nearest);
    }
}
