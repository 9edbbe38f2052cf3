//! Visible-slice assembly.
//!
//! Derives the node/edge sets from the navigation state: the anchor region,
//! the frontier implied by the expansion set, offers under frontier leaves,
//! and links from every visible node to its nearest visible ancestor.

use offermap_core::types::{FxHashSet, Offer, RegionIdx};

use crate::classify::PriorityClassifier;
use crate::tree::{OfferAssignment, RegionTree};

use super::types::{GraphEdge, GraphNode, VisibleGraph};

/// Assemble the visible graph for the given framing.
///
/// `anchor` is the region acting as the visible root (`None` at top level,
/// where the tree roots themselves form the frontier). A region in
/// `expanded` is replaced by its children; everything else on the frontier
/// is a collapsed summary node.
pub fn assemble(
    tree: &RegionTree,
    offers: &[Offer],
    assignment: &OfferAssignment,
    classifier: &PriorityClassifier,
    reference: f64,
    anchor: Option<RegionIdx>,
    expanded: &FxHashSet<RegionIdx>,
) -> VisibleGraph {
    let mut frontier = Vec::new();
    match anchor {
        Some(root) => {
            for &child in tree.node(root).children.iter() {
                collect_frontier(tree, child, expanded, &mut frontier);
            }
        }
        None => {
            for &root in tree.roots() {
                collect_frontier(tree, root, expanded, &mut frontier);
            }
        }
    }

    let mut visible: FxHashSet<RegionIdx> = frontier.iter().copied().collect();
    if let Some(root) = anchor {
        visible.insert(root);
    }

    let mut graph = VisibleGraph::default();

    if let Some(root) = anchor {
        graph.nodes.push(region_node(tree, root, false));
    }
    for &idx in &frontier {
        graph.nodes.push(region_node(tree, idx, true));
    }

    // Region-to-region links: nearest visible ancestor.
    for &idx in &frontier {
        let mut cursor = tree.node(idx).parent;
        while let Some(parent) = cursor {
            if visible.contains(&parent) {
                graph.edges.push(GraphEdge {
                    source: tree.node(parent).id.clone(),
                    target: tree.node(idx).id.clone(),
                    priority: None,
                });
                break;
            }
            cursor = tree.node(parent).parent;
        }
    }

    // Offers surface under frontier leaves.
    for &idx in &frontier {
        if !tree.node(idx).is_leaf() {
            continue;
        }
        for &offer_idx in assignment.offers_at(idx) {
            let offer = &offers[offer_idx.index()];
            let band = classifier.classify_offer(offer, reference).ok();
            graph.nodes.push(GraphNode::Offer {
                id: offer.id.clone(),
                name: offer.name.clone(),
                desc: offer.desc.clone(),
                properties: offer.properties.clone(),
                band,
            });
            graph.edges.push(GraphEdge {
                source: tree.node(idx).id.clone(),
                target: offer.id.clone(),
                priority: band,
            });
        }
    }

    graph
}

/// Expanded regions dissolve into their children; everything else stops
/// the walk and lands on the frontier.
fn collect_frontier(
    tree: &RegionTree,
    idx: RegionIdx,
    expanded: &FxHashSet<RegionIdx>,
    out: &mut Vec<RegionIdx>,
) {
    let node = tree.node(idx);
    if expanded.contains(&idx) && !node.is_leaf() {
        for &child in node.children.iter() {
            collect_frontier(tree, child, expanded, out);
        }
    } else {
        out.push(idx);
    }
}

fn region_node(tree: &RegionTree, idx: RegionIdx, collapsed: bool) -> GraphNode {
    let node = tree.node(idx);
    GraphNode::Region {
        id: node.id.clone(),
        name: node.name.clone(),
        level: node.level,
        collapsed,
        priority_groups: tree.summary_at(idx),
    }
}
