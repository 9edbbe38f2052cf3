//! Engine configuration, loaded from TOML.

pub mod engine_config;
pub mod threshold_config;

pub use engine_config::{AdaptiveConfig, EngineConfig};
pub use threshold_config::ThresholdConfig;
