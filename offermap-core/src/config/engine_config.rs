//! Top-level engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::threshold_config::ThresholdConfig;
use crate::errors::ConfigError;

/// Adaptive-search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdaptiveConfig {
    /// Use the pricing collaborator's midpoint as the reference price.
    /// Default: false (the caller supplies the reference price per search).
    pub enabled: Option<bool>,
}

impl AdaptiveConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }
}

/// Configuration for the whole engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: ThresholdConfig,
    pub adaptive: AdaptiveConfig,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: EngineConfig =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all subsections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()
    }
}
