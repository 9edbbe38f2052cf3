//! Bottom-up priority aggregation over the region tree.
//!
//! One post-order pass, O(offers + regions) regardless of tree shape:
//! leaf and directly-attached offer histograms first, then elementwise
//! child sums. Re-running fully replaces every cached summary.

use std::time::Instant;

use offermap_core::errors::{ClassifyError, EngineError, TreeError};
use offermap_core::types::{Offer, OfferIdx, PrioritySummary, RegionIdx};

use crate::classify::PriorityClassifier;

use super::RegionTree;

/// An offer excluded from aggregation, with the classification failure that
/// excluded it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedOffer {
    pub offer_id: String,
    pub reason: ClassifyError,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregationReport {
    /// Offers classified into a band.
    pub classified: usize,
    /// Offers excluded with their failures; reported, never silently banded.
    pub excluded: Vec<ExcludedOffer>,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

impl AggregationReport {
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}

/// Offer-to-region assignment, resolved once per rebuild.
///
/// Resolution is where data integrity is enforced: an offer targeting a
/// region that is not in the current tree aborts the build.
#[derive(Debug, Clone, Default)]
pub struct OfferAssignment {
    by_region: Vec<Vec<OfferIdx>>,
}

impl OfferAssignment {
    /// Resolve every offer's target region against the tree.
    pub fn resolve(tree: &RegionTree, offers: &[Offer]) -> Result<Self, TreeError> {
        let mut by_region = vec![Vec::new(); tree.len()];
        for (pos, offer) in offers.iter().enumerate() {
            let region = tree.lookup(&offer.target_region).ok_or_else(|| {
                TreeError::OrphanOffer {
                    offer_id: offer.id.clone(),
                    region_id: offer.target_region.clone(),
                }
            })?;
            by_region[region.index()].push(OfferIdx::new(pos as u32));
        }
        Ok(Self { by_region })
    }

    /// Offers directly attached to a region.
    pub fn offers_at(&self, region: RegionIdx) -> &[OfferIdx] {
        &self.by_region[region.index()]
    }
}

impl RegionTree {
    /// Recompute every region's priority summary from scratch.
    ///
    /// Classification failures exclude the offending offer and land in the
    /// report; they never fail the pass. An invalid reference price fails
    /// the pass before any summary changes.
    pub fn recompute_summaries(
        &mut self,
        offers: &[Offer],
        assignment: &OfferAssignment,
        classifier: &PriorityClassifier,
        reference: f64,
    ) -> Result<AggregationReport, EngineError> {
        let start = Instant::now();
        classifier
            .check_reference(reference)
            .map_err(EngineError::Classify)?;

        // Per-region histograms of directly-attached offers.
        let mut own = vec![PrioritySummary::ZERO; self.len()];
        let mut excluded = Vec::new();
        let mut classified = 0usize;

        for pos in 0..self.len() {
            let region = RegionIdx::new(pos as u32);
            for &offer_idx in assignment.offers_at(region) {
                let offer = &offers[offer_idx.index()];
                match classifier.classify_offer(offer, reference) {
                    Ok(band) => {
                        own[pos].record(band);
                        classified += 1;
                    }
                    Err(reason) => excluded.push(ExcludedOffer {
                        offer_id: offer.id.clone(),
                        reason,
                    }),
                }
            }
        }

        // Post-order fold: children are final before their parent reads them.
        let order = self.post_order();
        let mut totals = vec![PrioritySummary::ZERO; self.len()];
        for idx in order {
            let mut total = own[idx.index()];
            for &child in self.node(idx).children.iter() {
                total.merge(&totals[child.index()]);
            }
            totals[idx.index()] = total;
        }

        for (pos, node) in self.nodes_mut().iter_mut().enumerate() {
            node.summary = Some(totals[pos]);
        }
        self.set_computed();

        let report = AggregationReport {
            classified,
            excluded,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        if !report.excluded.is_empty() {
            tracing::debug!(
                excluded = report.excluded.len(),
                classified = report.classified,
                "aggregation excluded offers without usable values"
            );
        }
        Ok(report)
    }

    /// Post-order traversal over all roots.
    fn post_order(&self) -> Vec<RegionIdx> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack: Vec<(RegionIdx, bool)> =
            self.roots().iter().map(|&r| (r, false)).collect();
        while let Some((idx, emitted)) = stack.pop() {
            if emitted {
                order.push(idx);
                continue;
            }
            stack.push((idx, true));
            for &child in self.node(idx).children.iter() {
                stack.push((child, false));
            }
        }
        order
    }
}
