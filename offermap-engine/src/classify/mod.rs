//! Priority classification - price-relative band assignment.
//!
//! The threshold formula is a pluggable policy: swapping it touches nothing
//! in the tree or navigation modules.

mod policy;

pub use policy::{RatioThresholdPolicy, ThresholdPolicy};

use offermap_core::config::ThresholdConfig;
use offermap_core::errors::{ClassifyError, ConfigError};
use offermap_core::types::{Band, Offer};

/// Classifies offers into priority bands relative to a reference price.
///
/// Purely a function of (value, reference): same inputs always produce the
/// same band. Offers without a usable value fail with [`ClassifyError`] and
/// are excluded from aggregation rather than silently defaulting to a band.
pub struct PriorityClassifier {
    policy: Box<dyn ThresholdPolicy>,
}

impl PriorityClassifier {
    pub fn new(policy: Box<dyn ThresholdPolicy>) -> Self {
        Self { policy }
    }

    /// Classifier with the shipped ratio policy and default boundaries.
    pub fn with_default_policy() -> Self {
        Self::new(Box::new(RatioThresholdPolicy::default()))
    }

    /// Classifier with a ratio policy built from configuration.
    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Box::new(RatioThresholdPolicy::from_config(
            config,
        )?)))
    }

    /// Validate a reference price point before a rebuild.
    pub fn check_reference(&self, reference: f64) -> Result<(), ClassifyError> {
        if !reference.is_finite() || reference <= 0.0 {
            return Err(ClassifyError::InvalidReferencePrice { value: reference });
        }
        Ok(())
    }

    /// Classify a bare value against a reference price.
    pub fn classify_value(&self, value: f64, reference: f64) -> Result<Band, ClassifyError> {
        self.check_reference(reference)?;
        if !value.is_finite() {
            return Err(ClassifyError::NonNumericValue {
                offer_id: String::new(),
            });
        }
        if value < 0.0 {
            return Err(ClassifyError::NegativeValue {
                offer_id: String::new(),
                value,
            });
        }
        Ok(self.policy.classify(value, reference))
    }

    /// Classify one offer against a reference price.
    pub fn classify_offer(&self, offer: &Offer, reference: f64) -> Result<Band, ClassifyError> {
        self.check_reference(reference)?;
        let value = offer.value.ok_or_else(|| ClassifyError::MissingValue {
            offer_id: offer.id.clone(),
        })?;
        if !value.is_finite() {
            return Err(ClassifyError::NonNumericValue {
                offer_id: offer.id.clone(),
            });
        }
        if value < 0.0 {
            return Err(ClassifyError::NegativeValue {
                offer_id: offer.id.clone(),
                value,
            });
        }
        Ok(self.policy.classify(value, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offermap_core::types::OfferProperties;

    fn offer(value: Option<f64>) -> Offer {
        Offer {
            id: "o1".into(),
            name: "Offer 1".into(),
            desc: String::new(),
            properties: OfferProperties {
                price: value,
                bedrooms: 3,
                bathrooms: 2.0,
                thumbnail: String::new(),
                link: None,
            },
            target_region: "r1".into(),
            value,
        }
    }

    #[test]
    fn test_reference_scenario() {
        // Reference 300000: 290000 is within 5%, 330000 is 10% over.
        let classifier = PriorityClassifier::with_default_policy();
        assert_eq!(
            classifier.classify_offer(&offer(Some(290_000.0)), 300_000.0),
            Ok(Band::Acceptable)
        );
        assert_eq!(
            classifier.classify_offer(&offer(Some(330_000.0)), 300_000.0),
            Ok(Band::Expensive)
        );
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let classifier = PriorityClassifier::with_default_policy();
        let err = classifier
            .classify_offer(&offer(None), 300_000.0)
            .unwrap_err();
        assert!(matches!(err, ClassifyError::MissingValue { .. }));
    }

    #[test]
    fn test_non_finite_value_is_an_error() {
        let classifier = PriorityClassifier::with_default_policy();
        let err = classifier
            .classify_offer(&offer(Some(f64::NAN)), 300_000.0)
            .unwrap_err();
        assert!(matches!(err, ClassifyError::NonNumericValue { .. }));
    }

    #[test]
    fn test_bad_reference_is_an_error() {
        let classifier = PriorityClassifier::with_default_policy();
        for reference in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = classifier
                .classify_offer(&offer(Some(100.0)), reference)
                .unwrap_err();
            assert!(matches!(err, ClassifyError::InvalidReferencePrice { .. }));
        }
    }
}
