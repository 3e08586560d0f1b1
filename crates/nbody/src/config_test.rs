use crate::config::{SimConfig, DEFAULT_DT, DEFAULT_SAMPLE_INTERVAL};
use crate::error::NBodyError;
use crate::forces::G;

#[test]
fn test_default_config() {
    let config = SimConfig::default();

    assert_eq!(config.dt, DEFAULT_DT);
    assert_eq!(config.dt, 360.0);
    assert_eq!(config.gravitational_constant, G);
    assert_eq!(config.sample_interval, DEFAULT_SAMPLE_INTERVAL);
    assert!(config.validate().is_ok());
}

#[test]
fn test_with_dt() {
    let config = SimConfig::default().with_dt(60.0);

    assert_eq!(config.dt, 60.0);
    assert_eq!(config.gravitational_constant, G);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = SimConfig::from_toml_str("sample_interval = 100").unwrap();

    assert_eq!(config.sample_interval, 100);
    assert_eq!(config.dt, DEFAULT_DT);
}

#[test]
fn test_full_toml() {
    let text = r#"
        dt = 120.0
        gravitational_constant = 6.6743e-11
        sample_interval = 0
    "#;
    let config = SimConfig::from_toml_str(text).unwrap();

    assert_eq!(config.dt, 120.0);
    assert_eq!(config.gravitational_constant, 6.6743e-11);
    assert_eq!(config.sample_interval, 0);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(SimConfig::from_toml_str("").unwrap(), SimConfig::default());
}

#[test]
fn test_malformed_toml_rejected() {
    let result = SimConfig::from_toml_str("dt = \"fast\"");

    assert!(matches!(result, Err(NBodyError::ConfigParse(_))));
}

#[test]
fn test_non_positive_dt_rejected() {
    for text in ["dt = 0.0", "dt = -360.0", "dt = nan"] {
        let result = SimConfig::from_toml_str(text);
        assert!(matches!(result, Err(NBodyError::InvalidConfig(_))), "{text} accepted");
    }
}

#[test]
fn test_non_positive_constant_rejected() {
    let config = SimConfig {
        gravitational_constant: 0.0,
        ..SimConfig::default()
    };

    assert!(matches!(config.validate(), Err(NBodyError::InvalidConfig(_))));
}

#[test]
fn test_load_missing_file() {
    let result = SimConfig::load("/nonexistent/qaia.toml");

    assert!(matches!(result, Err(NBodyError::Io(_))));
}
