//! Tests for the Offermap error handling system.

use std::collections::HashSet;
use std::path::PathBuf;

use offermap_core::errors::error_code::OffermapErrorCode;
use offermap_core::errors::*;

/// Every error enum has an OffermapErrorCode implementation.
#[test]
fn test_all_errors_have_error_code() {
    let load = LoadError::InvalidJson {
        context: "offers".into(),
        message: "trailing comma".into(),
    };
    assert!(!load.error_code().is_empty());

    let config = ConfigError::FileNotFound {
        path: "/tmp/offermap.toml".into(),
    };
    assert!(!config.error_code().is_empty());

    let classify = ClassifyError::MissingValue {
        offer_id: "o1".into(),
    };
    assert!(!classify.error_code().is_empty());

    let tree = TreeError::NotComputed;
    assert!(!tree.error_code().is_empty());

    let engine: EngineError = TreeError::EmptyTree.into();
    assert!(!engine.error_code().is_empty());
}

/// From conversions between error families and the top-level error.
#[test]
fn test_from_conversions() {
    let load = LoadError::MissingField {
        context: "regions".into(),
        field: "id".into(),
    };
    let engine: EngineError = load.into();
    assert!(matches!(engine, EngineError::Load(_)));

    let config = ConfigError::ValidationFailed {
        field: "acceptable_max_ratio".into(),
        message: "must be positive".into(),
    };
    let engine: EngineError = config.into();
    assert!(matches!(engine, EngineError::Config(_)));

    let classify = ClassifyError::InvalidReferencePrice { value: f64::NAN };
    let engine: EngineError = classify.into();
    assert!(matches!(engine, EngineError::Classify(_)));

    let tree = TreeError::OrphanOffer {
        offer_id: "o1".into(),
        region_id: "ghost".into(),
    };
    let engine: EngineError = tree.into();
    assert!(matches!(engine, EngineError::Tree(_)));
}

/// Boundary string format is `[ERROR_CODE] message`.
#[test]
fn test_ui_string_format() {
    let tree = TreeError::NotComputed;
    assert_eq!(
        tree.ui_string(),
        "[NOT_COMPUTED] Summaries have not been computed yet"
    );

    let orphan = TreeError::OrphanOffer {
        offer_id: "o7".into(),
        region_id: "r-gone".into(),
    };
    let formatted = orphan.ui_string();
    assert!(formatted.starts_with("[ORPHAN_OFFER]"));
    assert!(formatted.contains("o7"));
    assert!(formatted.contains("r-gone"));
}

/// Orphan offers and not-computed reads carry their own codes; other tree
/// failures share the family code.
#[test]
fn test_tree_error_code_split() {
    let orphan = TreeError::OrphanOffer {
        offer_id: "o1".into(),
        region_id: "r1".into(),
    };
    assert_eq!(orphan.error_code(), "ORPHAN_OFFER");
    assert_eq!(TreeError::NotComputed.error_code(), "NOT_COMPUTED");
    assert_eq!(
        TreeError::DuplicateRegion {
            region_id: "r1".into()
        }
        .error_code(),
        "TREE_ERROR"
    );
}

/// Every error variant's Display impl produces a human-readable message.
#[test]
fn test_display_human_readable() {
    let errors: Vec<Box<dyn std::fmt::Display>> = vec![
        Box::new(LoadError::IoError {
            path: PathBuf::from("/tmp/offers.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file gone"),
        }),
        Box::new(LoadError::InvalidJson {
            context: "region tree".into(),
            message: "unexpected eof".into(),
        }),
        Box::new(ConfigError::ParseError {
            path: "offermap.toml".into(),
            message: "bad table".into(),
        }),
        Box::new(ClassifyError::NonNumericValue {
            offer_id: "o2".into(),
        }),
        Box::new(ClassifyError::NegativeValue {
            offer_id: "o3".into(),
            value: -5.0,
        }),
        Box::new(TreeError::DuplicateRegion {
            region_id: "r1".into(),
        }),
        Box::new(TreeError::EmptyTree),
        Box::new(TreeError::UnknownRegion {
            region_id: "nope".into(),
        }),
    ];

    for error in &errors {
        let msg = error.to_string();
        assert!(!msg.contains("{ "), "Debug leak in: {}", msg);
        assert!(!msg.is_empty());
    }
}

/// Error chain preservation via source().
#[test]
fn test_error_chain_preservation() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file gone");
    let load_err = LoadError::IoError {
        path: PathBuf::from("/tmp/offers.json"),
        source: io_err,
    };

    use std::error::Error;
    let source = load_err.source();
    assert!(source.is_some());
    assert!(source.unwrap().to_string().contains("file gone"));
}

/// All boundary error codes are unique.
#[test]
fn test_error_codes_unique() {
    use offermap_core::errors::error_code::*;

    let codes = vec![
        LOAD_ERROR,
        CONFIG_ERROR,
        CLASSIFY_ERROR,
        TREE_ERROR,
        ORPHAN_OFFER,
        NOT_COMPUTED,
        ENGINE_ERROR,
    ];

    let unique: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(codes.len(), unique.len(), "Duplicate error codes found");
}
