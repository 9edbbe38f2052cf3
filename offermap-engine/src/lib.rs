//! offermap-engine: hierarchical navigation and priority aggregation for
//! the offer-exploration map.
//!
//! The engine behind the map UI:
//! - Classify: price-relative band assignment with a pluggable threshold
//!   policy
//! - Tree: region arena with indexed lookup and one-pass bottom-up
//!   summary aggregation
//! - Navigate: snapshot stack plus the session state machine
//!   (zoom in/out, drill-down/roll-up, selection)
//! - Graph: the visible node/edge slice the presentation layer draws
//! - Loading: JSON parsing of the region tree and offer list
//! - Pricing: the estimator interface the engine consumes
//!
//! The engine is single-threaded and synchronous: every operation runs to
//! completion before control returns to the caller, and a new search
//! supersedes all prior state via [`NavigationSession::rebuild`].

pub mod classify;
pub mod graph;
pub mod loading;
pub mod navigate;
pub mod pricing;
pub mod tree;

pub use classify::{PriorityClassifier, RatioThresholdPolicy, ThresholdPolicy};
pub use graph::{GraphEdge, GraphNode, VisibleGraph};
pub use navigate::{GraphSnapshot, NavOutcome, NavigationSession, NavigationStack, RejectReason};
pub use pricing::{apply_estimates, ListPriceEstimator, PriceEstimator};
pub use tree::{
    AggregationReport, ExcludedOffer, FlatRegionRecord, OfferAssignment, RegionNode,
    RegionRecord, RegionTree,
};
