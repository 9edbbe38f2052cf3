//! Top-level engine error composing all error families.

use super::classify_error::ClassifyError;
use super::config_error::ConfigError;
use super::error_code::OffermapErrorCode;
use super::load_error::LoadError;
use super::tree_error::TreeError;

/// Top-level error for orchestration-level operations.
///
/// Orchestration catches classification errors itself (degraded counts),
/// so in practice only integrity, config, and load failures surface here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl OffermapErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Classify(e) => e.error_code(),
            Self::Tree(e) => e.error_code(),
        }
    }
}
