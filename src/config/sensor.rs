//! Ultrasonic sensor configuration.

use serde::Deserialize;

use super::units::{is_positive, MetersPerSecond, Seconds};
use crate::error::ArgumentError;

/// Sensor wiring and ranging constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Trigger output pin id.
    pub trigger_pin: u8,

    /// Echo input pin id.
    pub echo_pin: u8,

    /// Maximum wait for each echo edge.
    #[serde(default = "default_timeout", rename = "timeout_s")]
    pub timeout: Seconds,

    /// Speed of sound used to convert round-trip time to distance.
    #[serde(default = "default_sound_speed", rename = "sound_speed_m_per_s")]
    pub sound_speed: MetersPerSecond,
}

fn default_timeout() -> Seconds {
    Seconds(1.0)
}

fn default_sound_speed() -> MetersPerSecond {
    MetersPerSecond::SOUND_IN_AIR
}

impl SensorConfig {
    /// Configuration with a 1 s timeout and 343 m/s speed of sound.
    pub fn new(trigger_pin: u8, echo_pin: u8) -> Self {
        Self {
            trigger_pin,
            echo_pin,
            timeout: default_timeout(),
            sound_speed: default_sound_speed(),
        }
    }

    /// Set the per-edge timeout.
    pub fn with_timeout(mut self, timeout: Seconds) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the speed of sound.
    pub fn with_sound_speed(mut self, sound_speed: MetersPerSecond) -> Self {
        self.sound_speed = sound_speed;
        self
    }

    /// Per-edge timeout in nanoseconds, exactly as configured.
    #[inline]
    pub fn timeout_ns(&self) -> u64 {
        self.timeout.as_nanos()
    }

    /// Check the ranging constants.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if !is_positive(self.timeout.0) {
            return Err(ArgumentError::InvalidTimeout(self.timeout.0));
        }
        if !is_positive(self.sound_speed.0) {
            return Err(ArgumentError::InvalidSoundSpeed(self.sound_speed.0));
        }
        Ok(())
    }
}
