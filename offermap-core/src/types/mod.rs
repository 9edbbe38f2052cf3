//! Data structures shared between the engine and its host.
//! FxHashMap, SmallVec, typed arena indices, bands, summaries, offers.

pub mod band;
pub mod collections;
pub mod identifiers;
pub mod offer;

pub use band::{Band, PrioritySummary};
pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{OfferIdx, RegionIdx};
pub use offer::{Offer, OfferProperties};
