//! Pricing collaborator interface.
//!
//! The engine consumes a price estimator, it never implements one: the
//! estimation formula lives outside this crate. `value` on every offer is
//! either the raw list price or whatever the collaborator computed.

use offermap_core::types::Offer;

/// External pricing collaborator.
pub trait PriceEstimator {
    /// Adjusted value for a listing with the given attributes.
    fn estimate_value(&self, price: f64, bedrooms: u32, bathrooms: f64) -> f64;

    /// Midpoint of the estimator's current price model, used as the
    /// reference price when adaptive search is active.
    fn mid_point(&self) -> f64;
}

/// Pass-through estimator: value is the list price, the midpoint is a
/// configured reference. Used for non-adaptive search and in tests.
#[derive(Debug, Clone)]
pub struct ListPriceEstimator {
    reference: f64,
}

impl ListPriceEstimator {
    pub fn new(reference: f64) -> Self {
        Self { reference }
    }
}

impl PriceEstimator for ListPriceEstimator {
    fn estimate_value(&self, price: f64, _bedrooms: u32, _bathrooms: f64) -> f64 {
        price
    }

    fn mid_point(&self) -> f64 {
        self.reference
    }
}

/// Run the estimator over every offer that has a list price. Offers without
/// one keep `value = None` and stay excluded from aggregation.
pub fn apply_estimates(offers: &mut [Offer], estimator: &dyn PriceEstimator) {
    for offer in offers {
        if let Some(price) = offer.properties.price {
            offer.value = Some(estimator.estimate_value(
                price,
                offer.properties.bedrooms,
                offer.properties.bathrooms,
            ));
        }
    }
}
