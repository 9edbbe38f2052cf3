//! The navigation session - owned state machine behind the map UI.
//!
//! One session per search. The session owns the region tree, the offer
//! list, the classifier, the navigation stack, and the assembled visible
//! graph; the presentation layer only goes through the operations here.
//! Every operation runs to completion before returning, so the caller can
//! re-render from the returned state immediately.

use std::time::Instant;

use offermap_core::errors::{EngineError, OffermapErrorCode, TreeError};
use offermap_core::events::types::{
    ErrorEvent, RebuildCompleteEvent, RebuildStartedEvent, SelectionChangedEvent,
    SliceChangedEvent, ZoomChangedEvent,
};
use offermap_core::events::{EventDispatcher, MapEventHandler};
use offermap_core::types::{FxHashSet, Offer, PrioritySummary, RegionIdx};

use crate::classify::PriorityClassifier;
use crate::graph::{assemble, VisibleGraph};
use crate::pricing::{apply_estimates, PriceEstimator};
use crate::tree::{AggregationReport, OfferAssignment, RegionTree};

use super::stack::{GraphSnapshot, NavigationStack};

/// Why a navigation operation was refused.
///
/// These are routinely triggered by UI races (a double-click landing after
/// a rebuild), so they are reported, never thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The id resolves to no region or offer.
    UnknownNode,
    /// The node exists but is not in the current visible slice.
    NotVisible,
    /// Drill-down on a leaf or on the anchor.
    NotExpandable,
    /// Roll-up on a region that is not expanded.
    NotExpanded,
    /// Zoom-in precondition failed.
    NotZoomable,
    /// Zoom-out with an empty stack.
    AtRoot,
}

/// Outcome of a navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Applied,
    Rejected(RejectReason),
}

impl NavOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Owned navigation session: current framing, expansion state, stack,
/// selection, and the assembled slice.
pub struct NavigationSession {
    tree: RegionTree,
    offers: Vec<Offer>,
    classifier: PriorityClassifier,
    events: EventDispatcher,
    assignment: OfferAssignment,
    reference: Option<f64>,
    anchor: Option<RegionIdx>,
    expanded: FxHashSet<RegionIdx>,
    visible: VisibleGraph,
    stack: NavigationStack,
    selected: Option<String>,
}

impl NavigationSession {
    /// Create a session over one data load. Navigation is inert until the
    /// first [`NavigationSession::rebuild`].
    pub fn new(tree: RegionTree, offers: Vec<Offer>, classifier: PriorityClassifier) -> Self {
        Self {
            tree,
            offers,
            classifier,
            events: EventDispatcher::new(),
            assignment: OfferAssignment::default(),
            reference: None,
            anchor: None,
            expanded: FxHashSet::default(),
            visible: VisibleGraph::default(),
            stack: NavigationStack::new(),
            selected: None,
        }
    }

    /// Register a presentation-layer event handler.
    pub fn register_handler(&mut self, handler: Box<dyn MapEventHandler>) {
        self.events.register(handler);
    }

    // ---- Rebuild (new search) ----

    /// Run a new search against `reference_price`: re-resolve offer
    /// targets, recompute every summary, reset navigation, and assemble
    /// the root slice.
    ///
    /// Data-integrity failures (orphan offers) refuse the whole build;
    /// classification failures degrade it and are reported.
    pub fn rebuild(&mut self, reference_price: f64) -> Result<AggregationReport, EngineError> {
        let start = Instant::now();
        self.events.emit_rebuild_started(&RebuildStartedEvent {
            region_count: self.tree.len(),
            offer_count: self.offers.len(),
            reference_price,
        });
        tracing::info!(
            regions = self.tree.len(),
            offers = self.offers.len(),
            reference_price,
            "rebuilding offer map"
        );

        let assignment = OfferAssignment::resolve(&self.tree, &self.offers)
            .map_err(|e| self.surface(EngineError::Tree(e)))?;
        let report = self
            .tree
            .recompute_summaries(&self.offers, &assignment, &self.classifier, reference_price)
            .map_err(|e| self.surface(e))?;

        self.assignment = assignment;
        self.reference = Some(reference_price);
        self.stack.clear();
        self.expanded.clear();
        self.selected = None;
        self.anchor = self.default_anchor();
        self.reassemble();

        self.events.emit_rebuild_complete(&RebuildCompleteEvent {
            classified: report.classified,
            excluded: report.excluded_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        });
        self.emit_zoom_changed();
        self.emit_slice_changed();
        Ok(report)
    }

    /// Rebuild with the pricing collaborator driving both offer values and
    /// the reference price (adaptive search).
    pub fn rebuild_adaptive(
        &mut self,
        estimator: &dyn PriceEstimator,
    ) -> Result<AggregationReport, EngineError> {
        apply_estimates(&mut self.offers, estimator);
        self.rebuild(estimator.mid_point())
    }

    // ---- Zoom (stack-based reframing) ----

    /// Whether zooming in on `id` would be applied.
    pub fn can_zoom_in(&self, id: &str) -> bool {
        match self.tree.lookup(id) {
            Some(idx) => {
                Some(idx) != self.anchor
                    && !self.tree.node(idx).is_leaf()
                    && self.visible.contains(id)
            }
            None => false,
        }
    }

    /// Whether there is anything to zoom back out to.
    pub fn can_zoom_out(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Reframe the slice on `id`: push the current framing and show the
    /// region plus its immediate children, collapsed.
    pub fn zoom_in(&mut self, id: &str) -> NavOutcome {
        let Some(idx) = self.tree.lookup(id) else {
            return NavOutcome::Rejected(RejectReason::UnknownNode);
        };
        if !self.can_zoom_in(id) {
            tracing::debug!(region = id, "zoom-in rejected");
            return NavOutcome::Rejected(RejectReason::NotZoomable);
        }

        self.stack.push(GraphSnapshot {
            anchor: self.anchor,
            anchor_id: self.anchor_id(),
            expanded: self.expanded.clone(),
            graph: self.visible.clone(),
        });
        self.anchor = Some(idx);
        self.expanded.clear();
        self.reassemble();
        self.refresh_selection();
        self.emit_zoom_changed();
        self.emit_slice_changed();
        NavOutcome::Applied
    }

    /// Undo up to `steps` zoom-ins, restoring the exact node/edge sets
    /// captured before the oldest zoom being undone. Clamps past the top
    /// of the stack instead of failing.
    pub fn zoom_out(&mut self, steps: usize) -> NavOutcome {
        if steps == 0 || self.stack.is_empty() {
            return NavOutcome::Rejected(RejectReason::AtRoot);
        }
        let mut popped = self.stack.pop(steps);
        let Some(target) = popped.pop() else {
            return NavOutcome::Rejected(RejectReason::AtRoot);
        };

        self.anchor = target.anchor;
        self.expanded = target.expanded;
        self.visible = target.graph;
        self.refresh_selection();
        self.emit_zoom_changed();
        self.emit_slice_changed();
        NavOutcome::Applied
    }

    // ---- Drill-down / roll-up (same-slice, stack-independent) ----

    /// Replace a collapsed frontier region with its direct children (and,
    /// for leaf children, their offers). Does not touch the stack.
    pub fn drilldown(&mut self, id: &str) -> NavOutcome {
        let Some(idx) = self.tree.lookup(id) else {
            return NavOutcome::Rejected(RejectReason::UnknownNode);
        };
        if !self.visible.contains(id) {
            return NavOutcome::Rejected(RejectReason::NotVisible);
        }
        if Some(idx) == self.anchor || self.tree.node(idx).is_leaf() {
            tracing::debug!(region = id, "drill-down rejected");
            return NavOutcome::Rejected(RejectReason::NotExpandable);
        }

        self.expanded.insert(idx);
        self.reassemble();
        self.refresh_selection();
        self.emit_slice_changed();
        NavOutcome::Applied
    }

    /// Collapse an expanded region back into its summarized form, folding
    /// away everything visible beneath it.
    pub fn rollup(&mut self, id: &str) -> NavOutcome {
        let Some(idx) = self.tree.lookup(id) else {
            return NavOutcome::Rejected(RejectReason::UnknownNode);
        };
        if !self.expanded.contains(&idx) {
            return NavOutcome::Rejected(RejectReason::NotExpanded);
        }

        for descendant in self.tree.subtree(idx) {
            self.expanded.remove(&descendant);
        }
        self.reassemble();
        self.refresh_selection();
        self.emit_slice_changed();
        NavOutcome::Applied
    }

    // ---- Selection ----

    /// Select a visible node for the action menu. Selecting a new node
    /// implicitly deselects the previous one.
    pub fn select(&mut self, id: &str) -> NavOutcome {
        if !self.visible.contains(id) {
            return NavOutcome::Rejected(RejectReason::NotVisible);
        }
        if self.selected.as_deref() != Some(id) {
            self.selected = Some(id.to_string());
            self.events.emit_selection_changed(&SelectionChangedEvent {
                selected: self.selected.clone(),
            });
        }
        NavOutcome::Applied
    }

    pub fn deselect(&mut self) {
        if self.selected.take().is_some() {
            self.events
                .emit_selection_changed(&SelectionChangedEvent { selected: None });
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // ---- State access ----

    /// The slice the presentation layer draws.
    pub fn visible(&self) -> &VisibleGraph {
        &self.visible
    }

    /// The navigation stack, bottom-to-top, for breadcrumb rendering.
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Reset navigation to the root framing, keeping computed summaries.
    pub fn init_stack(&mut self) {
        self.stack.clear();
        self.expanded.clear();
        self.selected = None;
        self.anchor = self.default_anchor();
        self.reassemble();
        self.emit_zoom_changed();
        self.emit_slice_changed();
    }

    /// Cached summary for a region, by external id.
    pub fn summary_of(&self, id: &str) -> Result<PrioritySummary, TreeError> {
        self.tree.summary_of(id)
    }

    pub fn reference_price(&self) -> Option<f64> {
        self.reference
    }

    pub fn tree(&self) -> &RegionTree {
        &self.tree
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    // ---- Internals ----

    /// A single-root tree anchors on its root so the initial slice shows
    /// the root plus its children; a forest starts with the roots as the
    /// frontier.
    fn default_anchor(&self) -> Option<RegionIdx> {
        match self.tree.roots() {
            [only] => Some(*only),
            _ => None,
        }
    }

    fn reassemble(&mut self) {
        let Some(reference) = self.reference else {
            return;
        };
        self.visible = assemble(
            &self.tree,
            &self.offers,
            &self.assignment,
            &self.classifier,
            reference,
            self.anchor,
            &self.expanded,
        );
    }

    /// Drop a selection that is no longer visible after a slice change.
    fn refresh_selection(&mut self) {
        let stale = self
            .selected
            .as_deref()
            .is_some_and(|id| !self.visible.contains(id));
        if stale {
            self.selected = None;
            self.events
                .emit_selection_changed(&SelectionChangedEvent { selected: None });
        }
    }

    fn anchor_id(&self) -> Option<String> {
        self.anchor.map(|idx| self.tree.node(idx).id.clone())
    }

    fn emit_zoom_changed(&self) {
        self.events.emit_zoom_changed(&ZoomChangedEvent {
            depth: self.stack.depth(),
            root_id: self.anchor_id(),
        });
    }

    fn emit_slice_changed(&self) {
        self.events.emit_slice_changed(&SliceChangedEvent {
            node_count: self.visible.node_count(),
            edge_count: self.visible.edge_count(),
        });
    }

    fn surface(&self, error: EngineError) -> EngineError {
        self.events.emit_error(&ErrorEvent {
            code: error.error_code().to_string(),
            message: error.to_string(),
        });
        error
    }
}
