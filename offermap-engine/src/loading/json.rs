//! JSON loading for the two external inputs: the region tree and the
//! offer list.
//!
//! Price coercion is deliberately lenient: a JSON number or a numeric
//! string becomes a price, anything else leaves the offer without a value
//! so classification can report it instead of guessing.

use std::path::Path;

use serde::Deserialize;

use offermap_core::errors::LoadError;
use offermap_core::types::{Offer, OfferProperties};

use crate::tree::{FlatRegionRecord, RegionRecord};

#[derive(Debug, Deserialize)]
struct OfferRecord {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,
    properties: OfferPropertiesRecord,
    #[serde(rename = "targetRegionId")]
    target_region: String,
    #[serde(default)]
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OfferPropertiesRecord {
    #[serde(default)]
    price: serde_json::Value,
    #[serde(default)]
    bedrooms: u32,
    #[serde(default)]
    bathrooms: f64,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    link: Option<String>,
}

/// Parse the nested region tree. Accepts a single root object or an array
/// of roots.
pub fn parse_region_tree(json: &str) -> Result<Vec<RegionRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| invalid("region tree", e))?;
    let records = if value.is_array() {
        serde_json::from_value(value).map_err(|e| invalid("region tree", e))?
    } else {
        vec![serde_json::from_value(value).map_err(|e| invalid("region tree", e))?]
    };
    validate_region_ids(&records)?;
    Ok(records)
}

/// Parse flat `{id, name, parent}` region records.
pub fn parse_flat_regions(json: &str) -> Result<Vec<FlatRegionRecord>, LoadError> {
    let records: Vec<FlatRegionRecord> =
        serde_json::from_str(json).map_err(|e| invalid("flat regions", e))?;
    for record in &records {
        if record.id.is_empty() {
            return Err(LoadError::MissingField {
                context: "flat regions".into(),
                field: "id".into(),
            });
        }
    }
    Ok(records)
}

/// Parse the offer list into the engine's offer model.
pub fn parse_offers(json: &str) -> Result<Vec<Offer>, LoadError> {
    let records: Vec<OfferRecord> =
        serde_json::from_str(json).map_err(|e| invalid("offers", e))?;
    let mut offers = Vec::with_capacity(records.len());
    for record in records {
        if record.id.is_empty() {
            return Err(LoadError::MissingField {
                context: "offers".into(),
                field: "id".into(),
            });
        }
        let price = coerce_price(&record.properties.price);
        // A preset value wins (the pricing collaborator may have run
        // upstream); otherwise the raw price is the value.
        let value = record.value.filter(|v| v.is_finite()).or(price);
        offers.push(Offer {
            id: record.id,
            name: record.name,
            desc: record.desc,
            properties: OfferProperties {
                price,
                bedrooms: record.properties.bedrooms,
                bathrooms: record.properties.bathrooms,
                thumbnail: record.properties.thumbnail,
                link: record.properties.link,
            },
            target_region: record.target_region,
            value,
        });
    }
    Ok(offers)
}

/// File variant of [`parse_region_tree`].
pub fn load_region_tree_from_path(path: &Path) -> Result<Vec<RegionRecord>, LoadError> {
    parse_region_tree(&read(path)?)
}

/// File variant of [`parse_offers`].
pub fn load_offers_from_path(path: &Path) -> Result<Vec<Offer>, LoadError> {
    parse_offers(&read(path)?)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(context: &str, error: serde_json::Error) -> LoadError {
    LoadError::InvalidJson {
        context: context.to_string(),
        message: error.to_string(),
    }
}

fn validate_region_ids(records: &[RegionRecord]) -> Result<(), LoadError> {
    for record in records {
        if record.id.is_empty() {
            return Err(LoadError::MissingField {
                context: "region tree".into(),
                field: "id".into(),
            });
        }
        validate_region_ids(&record.children)?;
    }
    Ok(())
}

fn coerce_price(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
