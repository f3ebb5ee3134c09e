//! Unit tests for configuration validation.

use bed_tramming::config::{parse_config, validate_config, TrammingConfig};
use bed_tramming::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
screw_pitch = 0.5
samples = 3

[targets.center]
x = 150.0
y = 150.0
"#;

    let config: TrammingConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero sample count.
#[test]
fn test_zero_samples_rejected() {
    let config: TrammingConfig = toml::from_str("samples = 0").expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSampleCount(0)))
    );
}

/// Test validation fails for a sample count above the buffer capacity.
#[test]
fn test_too_many_samples_rejected() {
    let config: TrammingConfig = toml::from_str("samples = 64").expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test validation fails for non-positive screw pitch.
#[test]
fn test_invalid_screw_pitch() {
    for pitch in ["0.0", "-0.8"] {
        let toml_str = format!("screw_pitch = {}", pitch);
        let config: TrammingConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidScrewPitch(_)))
        ));
    }
}

/// Test validation fails for non-positive lift height and travel speed.
#[test]
fn test_invalid_motion_settings() {
    let config: TrammingConfig = toml::from_str("lift_height = 0.0").expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidLiftHeight(_)))
    ));

    let config: TrammingConfig = toml::from_str("probe_speed = -100.0").expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidProbeSpeed(_)))
    ));
}

/// Test validation fails for non-finite target coordinates.
#[test]
fn test_non_finite_target_rejected() {
    let toml_str = r#"
[targets.back_left]
x = nan
y = 400.0
"#;

    let config: TrammingConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTarget { .. }))
    ));
}

/// Test that parse_config validates after parsing.
#[test]
fn test_parse_config_validates() {
    assert!(parse_config("screw_pitch = 0.0").is_err());
    assert!(parse_config("screw_pitch = 0.8").is_ok());
}

/// Test that the default configuration is valid.
#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&TrammingConfig::default()).is_ok());
}
