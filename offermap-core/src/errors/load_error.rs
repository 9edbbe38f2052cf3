//! Input-loading errors.

use std::path::PathBuf;

use super::error_code::{self, OffermapErrorCode};

/// Errors that can occur while loading region or offer input.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {context}: {message}")]
    InvalidJson { context: String, message: String },

    #[error("Missing field `{field}` in {context}")]
    MissingField { context: String, field: String },
}

impl OffermapErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        error_code::LOAD_ERROR
    }
}
