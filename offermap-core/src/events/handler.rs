//! MapEventHandler trait with no-op defaults.

use super::types::*;

/// Trait for handling engine events.
///
/// All methods have no-op default implementations, so handlers only need to
/// override the events they care about. The engine dispatches synchronously
/// from the same thread that ran the operation.
pub trait MapEventHandler {
    // ---- Rebuild Lifecycle ----
    fn on_rebuild_started(&self, _event: &RebuildStartedEvent) {}
    fn on_rebuild_complete(&self, _event: &RebuildCompleteEvent) {}

    // ---- Navigation ----
    fn on_slice_changed(&self, _event: &SliceChangedEvent) {}
    fn on_zoom_changed(&self, _event: &ZoomChangedEvent) {}

    // ---- Selection ----
    fn on_selection_changed(&self, _event: &SelectionChangedEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
