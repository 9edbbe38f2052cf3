//! Region-tree node and input-record types.

use serde::{Deserialize, Serialize};

use offermap_core::types::collections::SmallVec4;
use offermap_core::types::{PrioritySummary, RegionIdx};

/// One region (target) node in the arena.
///
/// `summary` is the cached band-count histogram for the whole subtree,
/// `None` until the first aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionNode {
    /// Stable external id, unique across rebuilds.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Fixed tree depth; roots are level 0.
    pub level: u32,
    pub parent: Option<RegionIdx>,
    /// Ordered child indices.
    pub children: SmallVec4<RegionIdx>,
    pub(crate) summary: Option<PrioritySummary>,
}

impl RegionNode {
    /// A region with zero children is a leaf target.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Nested region record as loaded from the outside:
/// `{id, name, children: [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<RegionRecord>,
}

/// Flat region record: `{id, name, parent}`. Hierarchy is rebuilt from the
/// parent references.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatRegionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}
