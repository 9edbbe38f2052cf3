//! Visible-graph output types - the sole data the rendering layer consumes.

use serde::{Deserialize, Serialize};

use offermap_core::types::{Band, OfferProperties, PrioritySummary};

/// A node in the currently-visible slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GraphNode {
    /// A region, shown either as the anchor of the slice or as a collapsed
    /// summary bubble on the frontier.
    Region {
        id: String,
        name: String,
        level: u32,
        collapsed: bool,
        priority_groups: PrioritySummary,
    },
    /// An offer under a frontier leaf region, with its raw properties.
    Offer {
        id: String,
        name: String,
        desc: String,
        properties: OfferProperties,
        band: Option<Band>,
    },
}

impl GraphNode {
    pub fn id(&self) -> &str {
        match self {
            Self::Region { id, .. } => id,
            Self::Offer { id, .. } => id,
        }
    }

    pub fn is_region(&self) -> bool {
        matches!(self, Self::Region { .. })
    }
}

/// A link between two visible nodes. Region-to-offer edges carry the
/// offer's band for presentation styling; region-to-region edges carry
/// none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub priority: Option<Band>,
}

/// The currently-visible slice of the region tree plus attached offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl VisibleGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id() == id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Ids of the visible region nodes, in display order.
    pub fn region_ids(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.is_region())
            .map(|n| n.id())
            .collect()
    }
}
