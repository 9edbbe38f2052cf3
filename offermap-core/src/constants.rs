//! Shared constants for the Offermap navigation engine.

/// Offermap version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default inclusive upper ratio (value / reference) for the Acceptable band.
pub const DEFAULT_ACCEPTABLE_MAX_RATIO: f64 = 1.05;

/// Default exclusive upper ratio (value / reference) for the Considerable band.
pub const DEFAULT_CONSIDERABLE_BELOW_RATIO: f64 = 1.10;

/// Number of priority bands.
pub const BAND_COUNT: usize = 3;

/// Initial capacity reserved for the navigation stack.
pub const STACK_INITIAL_CAPACITY: usize = 8;
