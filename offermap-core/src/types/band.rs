//! Priority bands and per-region band-count summaries.

use serde::{Deserialize, Serialize};

use crate::constants::BAND_COUNT;

/// Price-relative priority band for an offer.
///
/// Every offer with a defined value falls into exactly one band relative to
/// the reference price point of the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// At or below the acceptable threshold.
    Acceptable,
    /// Above acceptable but below the expensive threshold.
    Considerable,
    /// At or above the expensive threshold.
    Expensive,
}

impl Band {
    pub fn all() -> &'static [Band] {
        &[Self::Acceptable, Self::Considerable, Self::Expensive]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Acceptable => "acceptable",
            Self::Considerable => "considerable",
            Self::Expensive => "expensive",
        }
    }

    /// Position of this band in a `PrioritySummary`.
    pub fn slot(&self) -> usize {
        match self {
            Self::Acceptable => 0,
            Self::Considerable => 1,
            Self::Expensive => 2,
        }
    }
}

/// Band-count histogram for the offers in a region's subtree.
///
/// Cached on every region node by the aggregation pass. Always re-derivable
/// from (offer list, region assignment, reference price); the cache is an
/// optimization, never a second source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritySummary {
    pub acceptable: u32,
    pub considerable: u32,
    pub expensive: u32,
}

impl PrioritySummary {
    pub const ZERO: PrioritySummary = PrioritySummary {
        acceptable: 0,
        considerable: 0,
        expensive: 0,
    };

    /// Record one offer classified into `band`.
    pub fn record(&mut self, band: Band) {
        match band {
            Band::Acceptable => self.acceptable += 1,
            Band::Considerable => self.considerable += 1,
            Band::Expensive => self.expensive += 1,
        }
    }

    /// Elementwise sum with another summary.
    pub fn merge(&mut self, other: &PrioritySummary) {
        self.acceptable += other.acceptable;
        self.considerable += other.considerable;
        self.expensive += other.expensive;
    }

    /// Count for a single band.
    pub fn count(&self, band: Band) -> u32 {
        match band {
            Band::Acceptable => self.acceptable,
            Band::Considerable => self.considerable,
            Band::Expensive => self.expensive,
        }
    }

    /// Total offers across all bands.
    pub fn total(&self) -> u32 {
        self.acceptable + self.considerable + self.expensive
    }

    /// Counts in band order.
    pub fn as_array(&self) -> [u32; BAND_COUNT] {
        [self.acceptable, self.considerable, self.expensive]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut s = PrioritySummary::ZERO;
        s.record(Band::Acceptable);
        s.record(Band::Acceptable);
        s.record(Band::Expensive);
        assert_eq!(s.as_array(), [2, 0, 1]);
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn test_merge_elementwise() {
        let mut a = PrioritySummary {
            acceptable: 3,
            considerable: 1,
            expensive: 0,
        };
        let b = PrioritySummary {
            acceptable: 0,
            considerable: 2,
            expensive: 4,
        };
        a.merge(&b);
        assert_eq!(a.as_array(), [3, 3, 4]);
    }

    #[test]
    fn test_band_slots_match_array_order() {
        let mut s = PrioritySummary::ZERO;
        for band in Band::all() {
            s.record(*band);
        }
        for band in Band::all() {
            assert_eq!(s.as_array()[band.slot()], 1, "slot for {}", band.name());
        }
    }
}
