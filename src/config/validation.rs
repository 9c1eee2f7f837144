//! Configuration validation.

use crate::error::{ArgumentError, ConfigError, Error, Result};

use super::RigConfig;

/// Validate a rig configuration.
///
/// Checks:
/// - Sensor timeout and speed of sound are positive
/// - Every actuator has exactly four pins, a non-zero resolution and a valid start phase
/// - Every pin id exists under the chosen numbering scheme
/// - No pin id is used twice across the rig
/// - The run command, if any, has a positive speed and revolution count
pub fn validate_config(config: &RigConfig) -> Result<()> {
    if let Some(ref sensor) = config.sensor {
        sensor.validate().map_err(ConfigError::InvalidSensor)?;
    }

    for (name, actuator) in config.actuators.iter() {
        let invalid = |reason: ArgumentError| {
            Error::Config(ConfigError::InvalidActuator {
                name: name.clone(),
                reason,
            })
        };
        actuator.coil_pins().map_err(invalid)?;
        actuator.start_phase().map_err(invalid)?;
        if actuator.steps_per_revolution == 0 {
            return Err(invalid(ArgumentError::InvalidStepsPerRevolution(0)));
        }
    }

    validate_pins(config)?;

    if let Some(ref run) = config.run {
        run.validate().map_err(ConfigError::InvalidRun)?;
    }

    Ok(())
}

fn validate_pins(config: &RigConfig) -> Result<()> {
    let mut seen = [false; 256];
    for pin in config.pin_ids() {
        if !config.numbering.is_valid(pin) {
            return Err(Error::Config(ConfigError::PinOutOfRange {
                pin,
                numbering: config.numbering,
            }));
        }
        if seen[pin as usize] {
            return Err(Error::Config(ConfigError::DuplicatePin(pin)));
        }
        seen[pin as usize] = true;
    }
    Ok(())
}
