//! offermap-core: shared kernel for the Offermap navigation engine.
//!
//! This crate provides everything the engine and its host share:
//! - Types: arena index types, priority bands, summaries, the offer model
//! - Errors: the full error taxonomy with render-boundary error codes
//! - Config: TOML-backed threshold and search configuration
//! - Events: synchronous handler/dispatcher for the presentation layer
//! - Tracing: subscriber setup with env-filter support
//! - Constants: shared defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::{AdaptiveConfig, EngineConfig, ThresholdConfig};
pub use errors::{
    ClassifyError, ConfigError, EngineError, LoadError, OffermapErrorCode, TreeError,
};
pub use events::{EventDispatcher, MapEventHandler};
pub use types::{Band, Offer, OfferIdx, OfferProperties, PrioritySummary, RegionIdx};
