//! Region-tree and aggregation errors.

use super::error_code::{self, OffermapErrorCode};

/// Errors raised by region-tree construction and summary access.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// An offer's target region is not in the current tree. Fatal to the
    /// build: the engine refuses to produce a visible graph from
    /// inconsistent data.
    #[error("Offer {offer_id} targets unknown region {region_id}")]
    OrphanOffer { offer_id: String, region_id: String },

    #[error("Duplicate region id: {region_id}")]
    DuplicateRegion { region_id: String },

    #[error("Unknown region id: {region_id}")]
    UnknownRegion { region_id: String },

    #[error("Region input is empty")]
    EmptyTree,

    /// Summary read before any aggregation pass. Programmer error in the
    /// call sequencing, not a data problem.
    #[error("Summaries have not been computed yet")]
    NotComputed,
}

impl OffermapErrorCode for TreeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OrphanOffer { .. } => error_code::ORPHAN_OFFER,
            Self::NotComputed => error_code::NOT_COMPUTED,
            _ => error_code::TREE_ERROR,
        }
    }
}
