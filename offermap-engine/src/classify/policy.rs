//! Threshold policy trait and the shipped ratio policy.

use offermap_core::config::ThresholdConfig;
use offermap_core::constants::{DEFAULT_ACCEPTABLE_MAX_RATIO, DEFAULT_CONSIDERABLE_BELOW_RATIO};
use offermap_core::errors::ConfigError;
use offermap_core::types::Band;

/// Band-threshold policy.
///
/// Implementations must be total and exhaustive over all finite non-negative
/// values: every (value, reference) pair with a positive finite reference
/// maps to exactly one band. Input validation happens in the classifier, not
/// here.
pub trait ThresholdPolicy: Send + Sync {
    fn classify(&self, value: f64, reference: f64) -> Band;
}

/// Piecewise ratio policy: buckets by `value / reference`.
///
/// `ratio <= acceptable_max` is Acceptable, `ratio < considerable_below` is
/// Considerable, everything at or above `considerable_below` is Expensive.
#[derive(Debug, Clone)]
pub struct RatioThresholdPolicy {
    acceptable_max: f64,
    considerable_below: f64,
}

impl RatioThresholdPolicy {
    pub fn new(acceptable_max: f64, considerable_below: f64) -> Self {
        Self {
            acceptable_max,
            considerable_below,
        }
    }

    /// Build from validated configuration.
    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.effective_acceptable_max(),
            config.effective_considerable_below(),
        ))
    }
}

impl Default for RatioThresholdPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACCEPTABLE_MAX_RATIO,
            DEFAULT_CONSIDERABLE_BELOW_RATIO,
        )
    }
}

impl ThresholdPolicy for RatioThresholdPolicy {
    fn classify(&self, value: f64, reference: f64) -> Band {
        let ratio = value / reference;
        if ratio <= self.acceptable_max {
            Band::Acceptable
        } else if ratio < self.considerable_below {
            Band::Considerable
        } else {
            Band::Expensive
        }
    }
}
