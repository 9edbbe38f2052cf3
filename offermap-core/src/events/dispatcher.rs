//! Synchronous event dispatcher.

use super::handler::MapEventHandler;
use super::types::*;

/// Fans events out to registered handlers, in registration order.
///
/// Dispatch is synchronous and runs on the caller's thread; with no handlers
/// registered every emit is a no-op over an empty slice.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Box<dyn MapEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers cannot be removed; a new search builds
    /// a fresh session (and dispatcher) anyway.
    pub fn register(&mut self, handler: Box<dyn MapEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit_rebuild_started(&self, event: &RebuildStartedEvent) {
        for h in &self.handlers {
            h.on_rebuild_started(event);
        }
    }

    pub fn emit_rebuild_complete(&self, event: &RebuildCompleteEvent) {
        for h in &self.handlers {
            h.on_rebuild_complete(event);
        }
    }

    pub fn emit_slice_changed(&self, event: &SliceChangedEvent) {
        for h in &self.handlers {
            h.on_slice_changed(event);
        }
    }

    pub fn emit_zoom_changed(&self, event: &ZoomChangedEvent) {
        for h in &self.handlers {
            h.on_zoom_changed(event);
        }
    }

    pub fn emit_selection_changed(&self, event: &SelectionChangedEvent) {
        for h in &self.handlers {
            h.on_selection_changed(event);
        }
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        for h in &self.handlers {
            h.on_error(event);
        }
    }
}
