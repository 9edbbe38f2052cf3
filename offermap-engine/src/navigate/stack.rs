//! Navigation stack - plain LIFO of visible-graph snapshots.

use serde::{Deserialize, Serialize};

use offermap_core::constants::STACK_INITIAL_CAPACITY;
use offermap_core::types::{FxHashSet, RegionIdx};

use crate::graph::VisibleGraph;

/// One previously-visible framing: the node/edge sets plus the root and
/// expansion state needed to resume navigating from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// The region that anchored the slice (`None` at top level).
    pub anchor: Option<RegionIdx>,
    /// External id of the anchor, for breadcrumb rendering.
    pub anchor_id: Option<String>,
    /// Expansion state at capture time.
    pub expanded: FxHashSet<RegionIdx>,
    /// The captured node/edge sets.
    pub graph: VisibleGraph,
}

/// LIFO of snapshots. Push on zoom-in, pop on zoom-out, nothing else:
/// no merging, no reordering. Depth equals the number of zoom-ins not yet
/// undone; empty means the session is at the root framing.
#[derive(Debug, Default)]
pub struct NavigationStack {
    entries: Vec<GraphSnapshot>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(STACK_INITIAL_CAPACITY),
        }
    }

    pub fn push(&mut self, snapshot: GraphSnapshot) {
        self.entries.push(snapshot);
    }

    /// Remove up to `n` most-recent snapshots, most-recent first.
    ///
    /// Clamps at the bottom: asking for more than the depth drains the
    /// stack. Zooming out past the top is a normal user action, not an
    /// error.
    pub fn pop(&mut self, n: usize) -> Vec<GraphSnapshot> {
        let take = n.min(self.entries.len());
        let mut removed = Vec::with_capacity(take);
        for _ in 0..take {
            if let Some(snapshot) = self.entries.pop() {
                removed.push(snapshot);
            }
        }
        removed
    }

    pub fn top(&self) -> Option<&GraphSnapshot> {
        self.entries.last()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Bottom-to-top view, for breadcrumb rendering.
    pub fn entries(&self) -> &[GraphSnapshot] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(tag: u32) -> GraphSnapshot {
        GraphSnapshot {
            anchor: Some(RegionIdx::new(tag)),
            anchor_id: Some(format!("r{tag}")),
            expanded: FxHashSet::default(),
            graph: VisibleGraph::default(),
        }
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = NavigationStack::new();
        stack.push(snapshot(1));
        stack.push(snapshot(2));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().unwrap().anchor, Some(RegionIdx::new(2)));

        let removed = stack.pop(1);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].anchor, Some(RegionIdx::new(2)));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_pop_clamps_to_depth() {
        let mut stack = NavigationStack::new();
        stack.push(snapshot(1));
        stack.push(snapshot(2));

        let removed = stack.pop(10);
        assert_eq!(removed.len(), 2);
        // Most-recent first; the deepest entry comes out last.
        assert_eq!(removed[1].anchor, Some(RegionIdx::new(1)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut stack = NavigationStack::new();
        assert!(stack.pop(3).is_empty());
        assert!(stack.top().is_none());
    }
}
