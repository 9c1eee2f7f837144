//! Unit tests for configuration validation.

use sonar_stepper::config::{parse_config, validate_config, RigConfig};
use sonar_stepper::error::{ArgumentError, ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[sensor]
trigger_pin = 23
echo_pin = 24

[actuators.left]
pins = [5, 6, 13, 19]

[actuators.right]
pins = [22, 27, 17, 4]

[run]
rps = 0.25
revolutions = 1.0
direction = "clockwise"
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a pin shared between sensor and actuator.
#[test]
fn test_shared_pin_rejected() {
    let toml_str = r#"
[sensor]
trigger_pin = 23
echo_pin = 24

[actuators.left]
pins = [5, 6, 13, 23]
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::DuplicatePin(23)))
    );
}

/// Test validation fails for a BCM pin id that does not exist.
#[test]
fn test_bcm_pin_out_of_range() {
    let toml_str = r#"
[actuators.left]
pins = [5, 6, 13, 40]
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::PinOutOfRange { pin: 40, .. }))
    ));
}

/// Test validation fails for a non-positive echo timeout.
#[test]
fn test_zero_timeout_rejected() {
    let toml_str = r#"
[sensor]
trigger_pin = 23
echo_pin = 24
timeout_s = 0.0
"#;

    assert_eq!(
        parse_config(toml_str).err(),
        Some(Error::Config(ConfigError::InvalidSensor(
            ArgumentError::InvalidTimeout(0.0)
        )))
    );
}

/// Test validation fails for a negative run speed.
#[test]
fn test_negative_run_speed_rejected() {
    let toml_str = r#"
[run]
rps = -1.0
revolutions = 1.0
direction = "clockwise"
"#;

    assert_eq!(
        parse_config(toml_str).err(),
        Some(Error::Config(ConfigError::InvalidRun(
            ArgumentError::InvalidSpeed(-1.0)
        )))
    );
}

/// Test validation fails for a start phase outside the table.
#[test]
fn test_initial_phase_out_of_range() {
    let toml_str = r#"
[actuators.left]
pins = [5, 6, 13, 19]
initial_phase = 9
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidActuator {
            reason: ArgumentError::PhaseOutOfRange(9),
            ..
        }))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = RigConfig::default();
    assert!(validate_config(&config).is_ok());
}
