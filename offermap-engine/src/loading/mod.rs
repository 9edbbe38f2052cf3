//! External-input loading.

mod json;

pub use json::{
    load_offers_from_path, load_region_tree_from_path, parse_flat_regions, parse_offers,
    parse_region_tree,
};
