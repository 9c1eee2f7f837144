//! Default run command for the rig's caller.

use serde::Deserialize;

use super::units::{is_positive, Meters, Revolutions, RevolutionsPerSecond};
use crate::error::ArgumentError;
use crate::motor::Direction;

/// What the caller should do once the sensor gate opens.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunConfig {
    /// Target angular speed.
    pub rps: RevolutionsPerSecond,

    /// Revolutions per actuator.
    pub revolutions: Revolutions,

    /// Rotation direction for every actuator.
    pub direction: Direction,

    /// Motion starts once a reading is at or below this distance.
    #[serde(default = "default_gate_distance", rename = "gate_distance_m")]
    pub gate_distance: Meters,

    /// Pause between sensor polls while waiting for the gate.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,
}

fn default_gate_distance() -> Meters {
    Meters(0.3)
}

fn default_poll_interval_ms() -> u32 {
    50
}

impl RunConfig {
    /// Check the command values.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if !is_positive(self.rps.0) {
            return Err(ArgumentError::InvalidSpeed(self.rps.0));
        }
        if !is_positive(self.revolutions.0) {
            return Err(ArgumentError::InvalidRevolutions(self.revolutions.0));
        }
        Ok(())
    }
}
