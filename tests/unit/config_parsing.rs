//! Unit tests for TOML configuration parsing.

use sonar_stepper::config::{load_config, RigConfig};
use sonar_stepper::error::{ConfigError, Error};
use sonar_stepper::{Direction, PinNumbering, StepMode};

/// Test parsing a complete rig description.
#[test]
fn test_parse_rig_config() {
    let toml_str = r#"
numbering = "board"

[sensor]
trigger_pin = 16
echo_pin = 18
timeout_s = 0.5
sound_speed_m_per_s = 340.0

[actuators.left]
pins = [29, 31, 33, 35]
mode = "eight_step"

[actuators.right]
pins = [11, 13, 15, 7]
mode = "four_step"
steps_per_revolution = 2048
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.numbering, PinNumbering::Board);

    let sensor = config.sensor.as_ref().expect("Sensor not found");
    assert_eq!(sensor.trigger_pin, 16);
    assert_eq!(sensor.echo_pin, 18);
    assert_eq!(sensor.timeout.0, 0.5);
    assert_eq!(sensor.timeout_ns(), 500_000_000);
    assert_eq!(sensor.sound_speed.0, 340.0);

    let right = config.actuator("right").expect("Actuator not found");
    assert_eq!(right.coil_pins(), Ok([11, 13, 15, 7]));
    assert_eq!(right.mode, StepMode::FourStep);
    assert_eq!(right.steps_per_revolution, 2048);
    assert!(config.actuator("middle").is_none());
}

/// Test parsing the optional run command.
#[test]
fn test_parse_run_command() {
    let toml_str = r#"
[run]
rps = 0.25
revolutions = 2
direction = "counter_clockwise"
gate_distance_m = 0.2
poll_interval_ms = 20
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let run = config.run.expect("Run command not found");
    assert_eq!(run.rps.0, 0.25);
    assert_eq!(run.revolutions.0, 2.0);
    assert_eq!(run.direction, Direction::CounterClockwise);
    assert_eq!(run.gate_distance.0, 0.2);
    assert_eq!(run.poll_interval_ms, 20);
}

/// Test that unknown direction names are rejected during parsing.
#[test]
fn test_unknown_direction_rejected() {
    let toml_str = r#"
[run]
rps = 0.25
revolutions = 1.0
direction = "widdershins"
"#;

    let result: Result<RigConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown direction");
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("sonar-stepper-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[actuators.left]\npins = [5, 6, 13, 19]\n",
    )
    .expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    let names: Vec<&str> = config.actuator_names().collect();
    assert_eq!(names, ["left"]);
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/sonar-stepper/rig.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
