//! OffermapErrorCode trait for render-boundary conversion.

/// Trait for converting engine errors to structured code strings.
/// Every error enum implements this so the presentation layer can switch on
/// a stable code instead of parsing display text.
pub trait OffermapErrorCode {
    /// Returns the error code string (e.g., "ORPHAN_OFFER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn ui_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the render boundary.
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CLASSIFY_ERROR: &str = "CLASSIFY_ERROR";
pub const TREE_ERROR: &str = "TREE_ERROR";
pub const ORPHAN_OFFER: &str = "ORPHAN_OFFER";
pub const NOT_COMPUTED: &str = "NOT_COMPUTED";
pub const ENGINE_ERROR: &str = "ENGINE_ERROR";
