//! Tests for TOML configuration loading and validation.

use std::io::Write;

use offermap_core::config::EngineConfig;
use offermap_core::errors::ConfigError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
[thresholds]
acceptable_max_ratio = 1.02
considerable_below_ratio = 1.08

[adaptive]
enabled = true
"#,
    );

    let config = EngineConfig::load_from_path(file.path()).expect("load");
    assert_eq!(config.thresholds.effective_acceptable_max(), 1.02);
    assert_eq!(config.thresholds.effective_considerable_below(), 1.08);
    assert!(config.adaptive.is_enabled());
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    let config = EngineConfig::load_from_path(file.path()).expect("load");
    assert_eq!(config.thresholds.effective_acceptable_max(), 1.05);
    assert_eq!(config.thresholds.effective_considerable_below(), 1.10);
    assert!(!config.adaptive.is_enabled());
}

#[test]
fn test_missing_file_is_file_not_found() {
    let err = EngineConfig::load_from_path(std::path::Path::new("/nonexistent/offermap.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let file = write_config("[thresholds\nacceptable_max_ratio = ");
    let err = EngineConfig::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_inverted_thresholds_fail_validation() {
    let file = write_config(
        r#"
[thresholds]
acceptable_max_ratio = 1.2
considerable_below_ratio = 1.1
"#,
    );
    let err = EngineConfig::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}
