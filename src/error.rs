//! Error types for sonar-stepper.
//!
//! Provides unified error handling across configuration, pin ownership, echo timing
//! and actuation.

use core::fmt;

use crate::config::units::Meters;
use crate::hal::{Edge, PinNumbering, PinRole};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all sonar-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Bad argument at construction or call time (fatal to the call, never retried)
    InvalidArgument(ArgumentError),
    /// An echo edge was not observed within the configured timeout
    HardwareTimeout(TimeoutError),
    /// The distance gate ran out of polls before a reading came within range
    GateNotReached(GateError),
    /// A pin could not be claimed, written or read
    Resource(ResourceError),
    /// Configuration parsing or validation error
    Config(ConfigError),
}

/// Argument errors raised before any hardware is touched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// Revolutions per second must be finite and > 0
    InvalidSpeed(f32),
    /// Revolution count must be finite and > 0
    InvalidRevolutions(f32),
    /// Echo timeout must be finite and > 0 seconds
    InvalidTimeout(f32),
    /// Speed of sound must be finite and > 0 m/s
    InvalidSoundSpeed(f32),
    /// Steps per revolution must be > 0
    InvalidStepsPerRevolution(u32),
    /// Step mode code or name not recognised
    UnknownMode,
    /// Direction code or name not recognised
    UnknownDirection,
    /// Actuators take exactly four coil pins (IN1..IN4)
    PinCount(usize),
    /// Phase index must be in 0..8
    PhaseOutOfRange(u8),
}

/// Echo edge timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeoutError {
    /// The edge that never arrived.
    pub edge: Edge,
}

/// Distance gate gave up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GateError {
    /// Pings fired before giving up.
    pub polls: u32,
    /// Closest reading seen, `None` if every ping timed out.
    pub closest: Option<Meters>,
}

/// Pin ownership and I/O errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// Driving the idle level on activation failed
    Claim(PinRole),
    /// Output write failed
    Write(PinRole),
    /// Input read failed
    Read(PinRole),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Builder field was never set
    MissingField(&'static str),
    /// Same pin id used twice across the rig
    DuplicatePin(u8),
    /// Pin id not valid for the chosen numbering scheme
    PinOutOfRange {
        /// Offending pin id
        pin: u8,
        /// Numbering scheme the id was checked against
        numbering: PinNumbering,
    },
    /// Actuator name not found in configuration
    ActuatorNotFound(heapless::String<32>),
    /// Actuator configuration carries an invalid value
    InvalidActuator {
        /// Actuator key in the configuration
        name: heapless::String<32>,
        /// What is wrong with it
        reason: ArgumentError,
    },
    /// Sensor configuration carries an invalid value
    InvalidSensor(ArgumentError),
    /// Run command carries an invalid value
    InvalidRun(ArgumentError),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            Error::HardwareTimeout(e) => write!(f, "Hardware timeout: {}", e),
            Error::GateNotReached(e) => write!(f, "Gate not reached: {}", e),
            Error::Resource(e) => write!(f, "Resource error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::InvalidSpeed(v) => {
                write!(f, "Invalid speed: {} rev/s. Must be finite and > 0", v)
            }
            ArgumentError::InvalidRevolutions(v) => {
                write!(f, "Invalid revolutions: {}. Must be finite and > 0", v)
            }
            ArgumentError::InvalidTimeout(v) => {
                write!(f, "Invalid timeout: {} s. Must be finite and > 0", v)
            }
            ArgumentError::InvalidSoundSpeed(v) => {
                write!(f, "Invalid sound speed: {} m/s. Must be finite and > 0", v)
            }
            ArgumentError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ArgumentError::UnknownMode => {
                write!(f, "Unknown step mode. Valid modes: eight_step, four_step")
            }
            ArgumentError::UnknownDirection => {
                write!(f, "Unknown direction. Valid directions: clockwise, counter_clockwise")
            }
            ArgumentError::PinCount(n) => write!(f, "Expected 4 coil pins, got {}", n),
            ArgumentError::PhaseOutOfRange(i) => write!(f, "Phase index {} outside 0..8", i),
        }
    }
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no {} echo edge before timeout", self.edge)
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.closest {
            Some(closest) => write!(f, "closest of {} readings was {} m", self.polls, closest.0),
            None => write!(f, "no echo in {} pings", self.polls),
        }
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Claim(role) => write!(f, "Could not claim {} pin", role),
            ResourceError::Write(role) => write!(f, "Write to {} pin failed", role),
            ResourceError::Read(role) => write!(f, "Read from {} pin failed", role),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::DuplicatePin(pin) => write!(f, "Pin {} is assigned more than once", pin),
            ConfigError::PinOutOfRange { pin, numbering } => {
                write!(f, "Pin {} is not a valid {} pin", pin, numbering)
            }
            ConfigError::ActuatorNotFound(name) => write!(f, "Actuator '{}' not found", name),
            ConfigError::InvalidActuator { name, reason } => {
                write!(f, "Actuator '{}': {}", name, reason)
            }
            ConfigError::InvalidSensor(reason) => write!(f, "Sensor: {}", reason),
            ConfigError::InvalidRun(reason) => write!(f, "Run command: {}", reason),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<ArgumentError> for Error {
    fn from(e: ArgumentError) -> Self {
        Error::InvalidArgument(e)
    }
}

impl From<TimeoutError> for Error {
    fn from(e: TimeoutError) -> Self {
        Error::HardwareTimeout(e)
    }
}

impl From<GateError> for Error {
    fn from(e: GateError) -> Self {
        Error::GateNotReached(e)
    }
}

impl From<ResourceError> for Error {
    fn from(e: ResourceError) -> Self {
        Error::Resource(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ArgumentError {}

#[cfg(feature = "std")]
impl std::error::Error for TimeoutError {}

#[cfg(feature = "std")]
impl std::error::Error for GateError {}

#[cfg(feature = "std")]
impl std::error::Error for ResourceError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
