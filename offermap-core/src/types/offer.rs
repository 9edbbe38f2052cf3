//! The offer (source leaf) data model.

use serde::{Deserialize, Serialize};

/// Listing attributes carried by every offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferProperties {
    /// List price, if the source carried a usable number.
    pub price: Option<f64>,
    /// Bedroom count.
    pub bedrooms: u32,
    /// Bathroom count (half-baths allowed).
    pub bathrooms: f64,
    /// Thumbnail reference for the presentation layer.
    pub thumbnail: String,
    /// Optional external listing link.
    pub link: Option<String>,
}

/// A single offer: a leaf listing assigned to exactly one region.
///
/// `value` is the scalar the classifier uses: either the raw list price or
/// an adjusted estimate set by the pricing collaborator before a rebuild.
/// `None` means the source price was missing or non-numeric and no estimate
/// has been applied; such offers are excluded from aggregation and counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub properties: OfferProperties,
    /// External id of the region this offer belongs to.
    pub target_region: String,
    pub value: Option<f64>,
}

impl Offer {
    /// Whether this offer has a value the classifier can use.
    pub fn has_value(&self) -> bool {
        matches!(self.value, Some(v) if v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(value: Option<f64>) -> Offer {
        Offer {
            id: "o1".into(),
            name: "Offer 1".into(),
            desc: String::new(),
            properties: OfferProperties {
                price: value,
                bedrooms: 2,
                bathrooms: 1.0,
                thumbnail: String::new(),
                link: None,
            },
            target_region: "r1".into(),
            value,
        }
    }

    #[test]
    fn test_has_value() {
        assert!(offer(Some(100.0)).has_value());
        assert!(!offer(None).has_value());
        assert!(!offer(Some(f64::NAN)).has_value());
        assert!(!offer(Some(f64::INFINITY)).has_value());
    }
}
