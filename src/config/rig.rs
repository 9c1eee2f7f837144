//! Rig configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::actuator::ActuatorConfig;
use super::run::RunConfig;
use super::sensor::SensorConfig;
use crate::hal::PinNumbering;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RigConfig {
    /// Scheme every pin id in this file is written in.
    #[serde(default)]
    pub numbering: PinNumbering,

    /// Distance sensor gating the start of motion.
    #[serde(default)]
    pub sensor: Option<SensorConfig>,

    /// Named actuator configurations.
    #[serde(default)]
    pub actuators: FnvIndexMap<String<32>, ActuatorConfig, 8>,

    /// Default command for the caller.
    #[serde(default)]
    pub run: Option<RunConfig>,
}

impl RigConfig {
    /// Get an actuator configuration by name.
    pub fn actuator(&self, name: &str) -> Option<&ActuatorConfig> {
        self.actuators
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all actuator names.
    pub fn actuator_names(&self) -> impl Iterator<Item = &str> {
        self.actuators.keys().map(|s| s.as_str())
    }

    /// Every pin id the rig uses, sensor first, then actuators in file order.
    pub fn pin_ids(&self) -> impl Iterator<Item = u8> + '_ {
        let sensor = self
            .sensor
            .iter()
            .flat_map(|s| [s.trigger_pin, s.echo_pin]);
        let coils = self
            .actuators
            .values()
            .flat_map(|a| a.pins.iter().copied());
        sensor.chain(coils)
    }
}
