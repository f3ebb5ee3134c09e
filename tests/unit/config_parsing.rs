//! Unit tests for TOML configuration parsing.

use bed_tramming::config::{Target, TrammingConfig};

/// Test parsing every scalar setting.
#[test]
fn test_parse_scalar_settings() {
    let toml_str = r#"
screw_pitch = 0.7
samples = 4
lift_height = 12.5
probe_speed = 4500.0
"#;

    let config: TrammingConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.screw_pitch.0, 0.7);
    assert_eq!(config.samples, 4);
    assert_eq!(config.lift_height.0, 12.5);
    assert_eq!(config.probe_speed.0, 4500.0);
}

/// Test that omitted settings take their defaults.
#[test]
fn test_parse_defaults() {
    let config: TrammingConfig = toml::from_str("").expect("Failed to parse TOML");

    assert_eq!(config, TrammingConfig::default());
    assert_eq!(config.screw_pitch.0, 0.8);
    assert_eq!(config.samples, 6);
    assert_eq!(config.lift_height.0, 20.0);
    assert_eq!(config.probe_speed.0, 6000.0);

    let center = config.target(Target::Center);
    assert_eq!((center.x.0, center.y.0), (230.0, 210.0));
    assert_eq!(center.label.as_str(), "Center");
}

/// Test overriding a subset of targets.
#[test]
fn test_parse_target_overrides() {
    let toml_str = r#"
[targets.back_right]
x = 300.0
y = 290.0
name = "Rear Right Knob"

[targets.left_middle]
x = 10.0
y = 150.0
"#;

    let config: TrammingConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    let br = config.target(Target::BackRight);
    assert_eq!((br.x.0, br.y.0), (300.0, 290.0));
    assert_eq!(br.label.as_str(), "Rear Right Knob");

    let lm = config.target(Target::LeftMiddle);
    assert_eq!((lm.x.0, lm.y.0), (10.0, 150.0));
    assert_eq!(lm.label.as_str(), "Left Middle");

    let fl = config.target(Target::FrontLeft);
    assert_eq!((fl.x.0, fl.y.0), (45.0, 10.0));
}

/// Test that a target with a missing coordinate is rejected.
#[test]
fn test_partial_target_rejected() {
    let toml_str = r#"
[targets.front_left]
x = 50.0
"#;

    let result: Result<TrammingConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should require both coordinates");
}

/// Test that labels beyond the fixed capacity are rejected.
#[test]
fn test_long_label_rejected() {
    let toml_str = r#"
[targets.front_right]
x = 400.0
y = 10.0
name = "Front right corner screw next to the cable chain"
"#;

    let result: Result<TrammingConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject labels longer than 32 bytes");
}

/// Test that unknown target keys are rejected.
#[test]
fn test_unknown_target_key_rejected() {
    let toml_str = r#"
[targets.middle_front]
x = 230.0
y = 10.0
"#;

    let result: Result<TrammingConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test that misspelled top-level settings are rejected instead of defaulted.
#[test]
fn test_unknown_setting_rejected() {
    let toml_str = r#"
screw_pich = 0.5
samples = 3
"#;

    let result: Result<TrammingConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown keys");
}
