//! Event payload types for the presentation layer.

use serde::{Deserialize, Serialize};

/// A rebuild (new search) has started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildStartedEvent {
    pub region_count: usize,
    pub offer_count: usize,
    pub reference_price: f64,
}

/// A rebuild finished and the root slice is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildCompleteEvent {
    pub classified: usize,
    pub excluded: usize,
    pub duration_ms: u64,
}

/// The visible slice changed (zoom, drill-down, roll-up, rebuild).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceChangedEvent {
    pub node_count: usize,
    pub edge_count: usize,
}

/// The zoom framing changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomChangedEvent {
    /// Navigation-stack depth after the operation.
    pub depth: usize,
    /// External id of the region now acting as the visible root, if any.
    pub root_id: Option<String>,
}

/// The selection changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionChangedEvent {
    /// External id of the selected node, `None` after deselect.
    pub selected: Option<String>,
}

/// An error surfaced to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub code: String,
    pub message: String,
}
