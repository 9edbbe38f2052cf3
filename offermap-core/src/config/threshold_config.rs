//! Priority-band threshold configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ACCEPTABLE_MAX_RATIO, DEFAULT_CONSIDERABLE_BELOW_RATIO};
use crate::errors::ConfigError;

/// Configuration for the band-threshold policy.
///
/// Ratios are relative to the reference price point: an offer with
/// `value / reference <= acceptable_max_ratio` is Acceptable, one with
/// `value / reference < considerable_below_ratio` is Considerable, and
/// everything above is Expensive.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Inclusive upper ratio for the Acceptable band. Default: 1.05.
    pub acceptable_max_ratio: Option<f64>,
    /// Exclusive upper ratio for the Considerable band. Default: 1.10.
    pub considerable_below_ratio: Option<f64>,
}

impl ThresholdConfig {
    /// Returns the effective Acceptable boundary, defaulting to 1.05.
    pub fn effective_acceptable_max(&self) -> f64 {
        self.acceptable_max_ratio
            .unwrap_or(DEFAULT_ACCEPTABLE_MAX_RATIO)
    }

    /// Returns the effective Considerable boundary, defaulting to 1.10.
    pub fn effective_considerable_below(&self) -> f64 {
        self.considerable_below_ratio
            .unwrap_or(DEFAULT_CONSIDERABLE_BELOW_RATIO)
    }

    /// Validate boundary ordering and positivity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let acceptable = self.effective_acceptable_max();
        let considerable = self.effective_considerable_below();

        if !acceptable.is_finite() || acceptable <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "acceptable_max_ratio".into(),
                message: format!("must be a positive number, got {acceptable}"),
            });
        }
        if !considerable.is_finite() || considerable <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "considerable_below_ratio".into(),
                message: format!("must be a positive number, got {considerable}"),
            });
        }
        if acceptable >= considerable {
            return Err(ConfigError::ValidationFailed {
                field: "considerable_below_ratio".into(),
                message: format!(
                    "must be greater than acceptable_max_ratio ({acceptable} >= {considerable})"
                ),
            });
        }
        Ok(())
    }
}
