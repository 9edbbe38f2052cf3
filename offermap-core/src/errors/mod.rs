//! Error taxonomy for the Offermap engine.
//!
//! One file per error family; every family implements [`OffermapErrorCode`]
//! so the render boundary receives structured codes instead of bare strings.
//! [`EngineError`] is the top-level composition used by orchestration.

pub mod classify_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod load_error;
pub mod tree_error;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::OffermapErrorCode;
pub use load_error::LoadError;
pub use tree_error::TreeError;
