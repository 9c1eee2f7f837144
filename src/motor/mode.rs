//! Step mode and rotation direction.

use core::fmt;
use core::str::FromStr;

use serde::Deserialize;

use crate::error::ArgumentError;

/// How the phase table is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Every row of the half-step table: finest resolution, weakest steps.
    #[default]
    EightStep,
    /// Every other row: half the resolution, two coils energised per step.
    FourStep,
}

impl StepMode {
    /// Phase-table rows advanced per step.
    #[inline]
    pub const fn step_size(self) -> u8 {
        match self {
            StepMode::EightStep => 1,
            StepMode::FourStep => 2,
        }
    }
}

impl TryFrom<u8> for StepMode {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StepMode::EightStep),
            2 => Ok(StepMode::FourStep),
            _ => Err(ArgumentError::UnknownMode),
        }
    }
}

impl FromStr for StepMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eight_step" | "EightStep" => Ok(StepMode::EightStep),
            "four_step" | "FourStep" => Ok(StepMode::FourStep),
            _ => Err(ArgumentError::UnknownMode),
        }
    }
}

impl fmt::Display for StepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepMode::EightStep => write!(f, "eight_step"),
            StepMode::FourStep => write!(f, "four_step"),
        }
    }
}

/// Direction of shaft rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Clockwise: walks the phase table backwards.
    Clockwise,
    /// Counter-clockwise: walks the phase table forwards.
    CounterClockwise,
}

impl Direction {
    /// Signed phase-table offset per step for a mode.
    #[inline]
    pub const fn phase_increment(self, mode: StepMode) -> i8 {
        let size = mode.step_size() as i8;
        match self {
            Direction::Clockwise => -size,
            Direction::CounterClockwise => size,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Clockwise),
            2 => Ok(Direction::CounterClockwise),
            _ => Err(ArgumentError::UnknownDirection),
        }
    }
}

impl FromStr for Direction {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clockwise" | "cw" | "Clockwise" => Ok(Direction::Clockwise),
            "counter_clockwise" | "ccw" | "CounterClockwise" => Ok(Direction::CounterClockwise),
            _ => Err(ArgumentError::UnknownDirection),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::CounterClockwise => write!(f, "counter_clockwise"),
        }
    }
}
