//! Typed arena-index types for regions and offers.
//!
//! Each index type wraps a `u32` position in its owning arena to prevent
//! cross-type confusion. A `RegionIdx` cannot be accidentally used where an
//! `OfferIdx` is expected. External string ids stay on the arena entries
//! themselves; these indices are how the engine refers to entries internally.

use serde::{Deserialize, Serialize};

macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an index from an arena position.
            pub fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// The arena position as a usize.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(idx: $name) -> Self {
                idx.0
            }
        }
    };
}

define_idx!(
    /// Index of a region node in the region-tree arena.
    RegionIdx
);

define_idx!(
    /// Index of an offer in the offer list.
    OfferIdx
);
