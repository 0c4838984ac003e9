//! Tests for loading conversion options from text and applying them.

mod common;

use oklch::{to_rgb, ConfigError, ConversionOptions, Lch};

#[test]
fn test_yaml_options_enable_correction() {
    let options = ConversionOptions::from_yaml_str("gamutCorrectIfNeeded: true").unwrap();
    let rgb = to_rgb(Lch::new(0.5, 0.5, 0.0), options).unwrap();
    assert!(rgb.is_some());
}

#[test]
fn test_json_options_default_to_rejection() {
    let options = ConversionOptions::from_json_str("{}").unwrap();
    let rgb = to_rgb(Lch::new(0.5, 0.5, 0.0), options).unwrap();
    assert!(rgb.is_none());
}

#[test]
fn test_explicit_false() {
    let options = ConversionOptions::from_json_str(r#"{"gamutCorrectIfNeeded": false}"#).unwrap();
    assert_eq!(options, ConversionOptions::default());
}

#[test]
fn test_malformed_options() {
    let err = ConversionOptions::from_json_str("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
