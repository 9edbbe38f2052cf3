//! Tracing setup for the Offermap engine.

pub mod setup;

pub use setup::init_tracing;
