//! Region tree - arena of region nodes with indexed lookup by id.
//!
//! Replaces repeated recursive searches over a loosely-typed nested
//! structure with an owned arena: every region lives at a stable index,
//! ids resolve through one hash lookup, and parent/child links are typed
//! indices.

mod aggregate;
mod types;

pub use aggregate::{AggregationReport, ExcludedOffer, OfferAssignment};
pub use types::{FlatRegionRecord, RegionNode, RegionRecord};

use offermap_core::types::collections::SmallVec4;
use offermap_core::types::{FxHashMap, PrioritySummary, RegionIdx};
use offermap_core::errors::TreeError;

/// The full region (target) tree for one data load.
///
/// Structure is immutable for the lifetime of a session; only the cached
/// priority summaries change, and only through
/// [`RegionTree::recompute_summaries`].
#[derive(Debug, Clone)]
pub struct RegionTree {
    nodes: Vec<RegionNode>,
    roots: SmallVec4<RegionIdx>,
    index: FxHashMap<String, RegionIdx>,
    computed: bool,
}

impl RegionTree {
    /// Build from the external nested `{id, name, children}` structure.
    pub fn from_nested(records: &[RegionRecord]) -> Result<Self, TreeError> {
        if records.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let mut tree = Self {
            nodes: Vec::new(),
            roots: SmallVec4::new(),
            index: FxHashMap::default(),
            computed: false,
        };

        for record in records {
            let root = tree.insert_nested(record, None, 0)?;
            tree.roots.push(root);
        }
        Ok(tree)
    }

    fn insert_nested(
        &mut self,
        record: &RegionRecord,
        parent: Option<RegionIdx>,
        level: u32,
    ) -> Result<RegionIdx, TreeError> {
        let idx = self.insert_node(&record.id, &record.name, parent, level)?;
        for child in &record.children {
            let child_idx = self.insert_nested(child, Some(idx), level + 1)?;
            self.nodes[idx.index()].children.push(child_idx);
        }
        Ok(idx)
    }

    /// Build from flat `{id, name, parent}` records.
    ///
    /// Records with an unknown or absent parent become roots. Parent chains
    /// that loop back on themselves are broken by promoting the first
    /// re-visited region to a root.
    pub fn from_flat(records: &[FlatRegionRecord]) -> Result<Self, TreeError> {
        if records.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let mut tree = Self {
            nodes: Vec::new(),
            roots: SmallVec4::new(),
            index: FxHashMap::default(),
            computed: false,
        };

        // Insert all nodes first; parents resolve once every id is known.
        for record in records {
            tree.insert_node(&record.id, &record.name, None, 0)?;
        }
        for (pos, record) in records.iter().enumerate() {
            let parent = record
                .parent
                .as_deref()
                .and_then(|pid| tree.index.get(pid).copied())
                // Self-parenting collapses to a root immediately.
                .filter(|p| p.index() != pos);
            tree.nodes[pos].parent = parent;
        }

        tree.break_cycles();

        // Children lists and roots, in input order.
        for pos in 0..tree.nodes.len() {
            let idx = RegionIdx::new(pos as u32);
            let parent = tree.nodes[pos].parent;
            match parent {
                Some(parent) => tree.nodes[parent.index()].children.push(idx),
                None => tree.roots.push(idx),
            }
        }

        tree.assign_levels();
        Ok(tree)
    }

    fn insert_node(
        &mut self,
        id: &str,
        name: &str,
        parent: Option<RegionIdx>,
        level: u32,
    ) -> Result<RegionIdx, TreeError> {
        if self.index.contains_key(id) {
            return Err(TreeError::DuplicateRegion {
                region_id: id.to_string(),
            });
        }
        let idx = RegionIdx::new(self.nodes.len() as u32);
        self.nodes.push(RegionNode {
            id: id.to_string(),
            name: name.to_string(),
            level,
            parent,
            children: SmallVec4::new(),
            summary: None,
        });
        self.index.insert(id.to_string(), idx);
        Ok(idx)
    }

    /// Sever parent links that form cycles. Walks every parent chain once;
    /// a node re-encountered on the chain currently being walked is the
    /// cycle entry and gets promoted to a root.
    fn break_cycles(&mut self) {
        const UNSEEN: u8 = 0;
        const WALKING: u8 = 1;
        const DONE: u8 = 2;
        let mut state = vec![UNSEEN; self.nodes.len()];

        for start in 0..self.nodes.len() {
            if state[start] != UNSEEN {
                continue;
            }
            let mut chain = Vec::new();
            let mut cursor = Some(start);
            while let Some(pos) = cursor {
                match state[pos] {
                    WALKING => {
                        tracing::warn!(
                            region = %self.nodes[pos].id,
                            "breaking parent cycle by promoting region to root"
                        );
                        self.nodes[pos].parent = None;
                        break;
                    }
                    DONE => break,
                    _ => {
                        state[pos] = WALKING;
                        chain.push(pos);
                        cursor = self.nodes[pos].parent.map(|p| p.index());
                    }
                }
            }
            for pos in chain {
                state[pos] = DONE;
            }
        }
    }

    /// Assign levels top-down from the roots.
    fn assign_levels(&mut self) {
        let mut queue: Vec<(RegionIdx, u32)> =
            self.roots.iter().map(|&r| (r, 0)).collect();
        while let Some((idx, level)) = queue.pop() {
            self.nodes[idx.index()].level = level;
            for &child in self.nodes[idx.index()].children.iter() {
                queue.push((child, level + 1));
            }
        }
    }

    // ---- Lookup ----

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[RegionIdx] {
        &self.roots
    }

    /// Resolve an external id to its arena index.
    pub fn lookup(&self, id: &str) -> Option<RegionIdx> {
        self.index.get(id).copied()
    }

    pub fn node(&self, idx: RegionIdx) -> &RegionNode {
        &self.nodes[idx.index()]
    }

    /// Whether `idx` sits in the subtree rooted at `ancestor` (inclusive).
    pub fn is_in_subtree(&self, idx: RegionIdx, ancestor: RegionIdx) -> bool {
        let mut cursor = Some(idx);
        while let Some(pos) = cursor {
            if pos == ancestor {
                return true;
            }
            cursor = self.nodes[pos.index()].parent;
        }
        false
    }

    /// All indices in the subtree rooted at `idx`, including `idx`.
    pub fn subtree(&self, idx: RegionIdx) -> Vec<RegionIdx> {
        let mut out = Vec::new();
        let mut stack = vec![idx];
        while let Some(pos) = stack.pop() {
            out.push(pos);
            stack.extend(self.nodes[pos.index()].children.iter().copied());
        }
        out
    }

    // ---- Summaries ----

    /// Whether an aggregation pass has run.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Cached summary for a region, by external id.
    ///
    /// Reflects the most recent [`RegionTree::recompute_summaries`] call;
    /// reading before any pass is a sequencing error.
    pub fn summary_of(&self, id: &str) -> Result<PrioritySummary, TreeError> {
        if !self.computed {
            return Err(TreeError::NotComputed);
        }
        let idx = self.lookup(id).ok_or_else(|| TreeError::UnknownRegion {
            region_id: id.to_string(),
        })?;
        Ok(self.nodes[idx.index()]
            .summary
            .unwrap_or(PrioritySummary::ZERO))
    }

    /// Cached summary by arena index, for slice assembly.
    pub(crate) fn summary_at(&self, idx: RegionIdx) -> PrioritySummary {
        self.nodes[idx.index()].summary.unwrap_or(PrioritySummary::ZERO)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [RegionNode] {
        &mut self.nodes
    }

    pub(crate) fn set_computed(&mut self) {
        self.computed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(id: &str, name: &str, children: Vec<RegionRecord>) -> RegionRecord {
        RegionRecord {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    #[test]
    fn test_from_nested_levels_and_lookup() {
        let records = vec![nested(
            "city",
            "City",
            vec![
                nested("north", "North", vec![]),
                nested("south", "South", vec![nested("docks", "Docks", vec![])]),
            ],
        )];
        let tree = RegionTree::from_nested(&records).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots().len(), 1);

        let docks = tree.lookup("docks").unwrap();
        assert_eq!(tree.node(docks).level, 2);
        assert!(tree.node(docks).is_leaf());

        let south = tree.lookup("south").unwrap();
        assert!(tree.is_in_subtree(docks, south));
        assert!(!tree.is_in_subtree(south, docks));
    }

    #[test]
    fn test_from_nested_duplicate_id() {
        let records = vec![nested(
            "a",
            "A",
            vec![nested("a", "A again", vec![])],
        )];
        let err = RegionTree::from_nested(&records).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateRegion { .. }));
    }

    #[test]
    fn test_from_nested_empty_input() {
        assert!(matches!(
            RegionTree::from_nested(&[]),
            Err(TreeError::EmptyTree)
        ));
    }

    fn flat(id: &str, parent: Option<&str>) -> FlatRegionRecord {
        FlatRegionRecord {
            id: id.into(),
            name: id.to_uppercase(),
            parent: parent.map(Into::into),
        }
    }

    #[test]
    fn test_from_flat_builds_hierarchy() {
        let records = vec![
            flat("1", None),
            flat("2", Some("1")),
            flat("3", Some("1")),
            flat("4", Some("2")),
            flat("5", Some("2")),
        ];
        let tree = RegionTree::from_flat(&records).unwrap();
        assert_eq!(tree.roots().len(), 1);

        let one = tree.lookup("1").unwrap();
        assert_eq!(tree.node(one).children.len(), 2);
        let four = tree.lookup("4").unwrap();
        assert_eq!(tree.node(four).level, 2);
    }

    #[test]
    fn test_from_flat_unknown_parent_becomes_root() {
        let records = vec![flat("a", Some("ghost")), flat("b", Some("a"))];
        let tree = RegionTree::from_flat(&records).unwrap();
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.node(tree.lookup("a").unwrap()).level, 0);
    }

    #[test]
    fn test_from_flat_breaks_cycles() {
        // a -> b -> c -> a
        let records = vec![flat("a", Some("c")), flat("b", Some("a")), flat("c", Some("b"))];
        let tree = RegionTree::from_flat(&records).unwrap();
        // Exactly one member of the cycle was promoted to a root and the
        // rest hang off it.
        assert_eq!(tree.roots().len(), 1);
        let total_children: usize = ["a", "b", "c"]
            .iter()
            .map(|id| tree.node(tree.lookup(id).unwrap()).children.len())
            .sum();
        assert_eq!(total_children, 2);
    }

    #[test]
    fn test_from_flat_self_parent_becomes_root() {
        let records = vec![flat("loop", Some("loop"))];
        let tree = RegionTree::from_flat(&records).unwrap();
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_summary_before_compute_fails() {
        let tree =
            RegionTree::from_nested(&[nested("r", "R", vec![])]).unwrap();
        assert!(matches!(tree.summary_of("r"), Err(TreeError::NotComputed)));
    }
}
