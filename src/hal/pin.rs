//! Scoped ownership of output lines.

use core::fmt;

use embedded_hal::digital::{OutputPin, PinState};
use serde::Deserialize;

use crate::error::{Error, ResourceError, Result};

/// What a line is wired to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// Ultrasonic trigger output.
    Trigger,
    /// Ultrasonic echo input.
    Echo,
    /// Stepper driver input, 1-based (IN1..IN4).
    Coil(u8),
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinRole::Trigger => write!(f, "trigger"),
            PinRole::Echo => write!(f, "echo"),
            PinRole::Coil(n) => write!(f, "IN{}", n),
        }
    }
}

/// Pin addressing scheme used by pin ids in configuration.
///
/// Passed around as a value; nothing in the crate assumes a process-wide mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum PinNumbering {
    /// SoC line numbers (Broadcom numbering on a Raspberry Pi).
    #[default]
    Bcm,
    /// Physical 40-pin header positions.
    Board,
}

impl PinNumbering {
    /// Check whether a pin id exists under this scheme.
    pub fn is_valid(self, pin: u8) -> bool {
        match self {
            PinNumbering::Bcm => pin <= 27,
            PinNumbering::Board => (1..=40).contains(&pin),
        }
    }
}

impl fmt::Display for PinNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinNumbering::Bcm => write!(f, "BCM"),
            PinNumbering::Board => write!(f, "board"),
        }
    }
}

/// Claim on one output line.
///
/// Claiming drives the line to its idle (low) level. The line is driven low again
/// when the guard is released or dropped, so every exit path, including an error
/// returned halfway through a run, leaves the hardware idle.
pub struct PinGuard<P: OutputPin> {
    pin: Option<P>,
    role: PinRole,
}

impl<P: OutputPin> PinGuard<P> {
    /// Claim a line and drive it low.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Claim` if the idle level cannot be driven. The pin is
    /// dropped in that case.
    pub fn claim(mut pin: P, role: PinRole) -> Result<Self> {
        pin.set_low().map_err(|_| ResourceError::Claim(role))?;
        Ok(Self { pin: Some(pin), role })
    }

    /// Role this line was claimed for.
    #[inline]
    pub fn role(&self) -> PinRole {
        self.role
    }

    /// Drive the line to `high`.
    pub fn set(&mut self, high: bool) -> Result<()> {
        let role = self.role;
        let pin = self.pin.as_mut().ok_or(ResourceError::Write(role))?;
        pin.set_state(PinState::from(high))
            .map_err(|_| Error::from(ResourceError::Write(role)))
    }

    /// Drive the line high.
    #[inline]
    pub fn set_high(&mut self) -> Result<()> {
        self.set(true)
    }

    /// Drive the line low.
    #[inline]
    pub fn set_low(&mut self) -> Result<()> {
        self.set(false)
    }

    /// Drive the line low and give the pin back.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Write` if the idle level cannot be driven. The pin is
    /// dropped in that case.
    pub fn release(mut self) -> Result<P> {
        let role = self.role;
        let mut pin = self.pin.take().ok_or(ResourceError::Write(role))?;
        pin.set_low().map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("failed to idle {} pin on release", role);
            Error::from(ResourceError::Write(role))
        })?;
        Ok(pin)
    }
}

impl<P: OutputPin> Drop for PinGuard<P> {
    fn drop(&mut self) {
        if let Some(pin) = self.pin.as_mut() {
            let _ = pin.set_low();
        }
    }
}
