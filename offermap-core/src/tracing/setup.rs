//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Offermap tracing/logging system.
///
/// Reads the `OFFERMAP_LOG` environment variable for per-subsystem log
/// levels. Format: `OFFERMAP_LOG=tree=debug,navigate=info`
///
/// Falls back to `offermap=info` if `OFFERMAP_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("OFFERMAP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("offermap=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();

        tracing::debug!("offermap tracing initialized");
    });
}
