//! Classification errors.

use super::error_code::{self, OffermapErrorCode};

/// Errors that can occur while classifying a single offer.
///
/// These are non-fatal to a rebuild: the offending offer is excluded from
/// aggregation and counted, never silently assigned a band.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Offer {offer_id} has no usable value")]
    MissingValue { offer_id: String },

    #[error("Offer {offer_id} has a non-numeric value")]
    NonNumericValue { offer_id: String },

    #[error("Offer {offer_id} has a negative value: {value}")]
    NegativeValue { offer_id: String, value: f64 },

    #[error("Reference price {value} is not a usable positive number")]
    InvalidReferencePrice { value: f64 },
}

impl OffermapErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFY_ERROR
    }
}
