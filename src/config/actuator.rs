//! Stepper actuator configuration from TOML.

use heapless::Vec;
use serde::Deserialize;

use crate::error::ArgumentError;
use crate::motor::{PhaseIndex, StepMode, DEFAULT_STEPS_PER_REVOLUTION};

/// Complete actuator configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ActuatorConfig {
    /// Coil pin ids, IN1..IN4. Exactly four are required; up to eight parse so that
    /// validation can report the count.
    pub pins: Vec<u8, 8>,

    /// Phase-table walk.
    #[serde(default)]
    pub mode: StepMode,

    /// Half steps per output revolution (4096 for a 28BYJ-48).
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u32,

    /// Phase row the rotor is resting on (defaults to row 1).
    #[serde(default)]
    pub initial_phase: Option<u8>,
}

fn default_steps_per_revolution() -> u32 {
    DEFAULT_STEPS_PER_REVOLUTION
}

impl ActuatorConfig {
    /// The four coil pin ids.
    ///
    /// # Errors
    ///
    /// `ArgumentError::PinCount` unless exactly four pins are configured.
    pub fn coil_pins(&self) -> Result<[u8; 4], ArgumentError> {
        match self.pins.as_slice() {
            [a, b, c, d] => Ok([*a, *b, *c, *d]),
            other => Err(ArgumentError::PinCount(other.len())),
        }
    }

    /// Starting phase index.
    ///
    /// # Errors
    ///
    /// `ArgumentError::PhaseOutOfRange` for a row outside the table.
    pub fn start_phase(&self) -> Result<PhaseIndex, ArgumentError> {
        match self.initial_phase {
            Some(row) => PhaseIndex::new(row),
            None => Ok(PhaseIndex::default()),
        }
    }
}
