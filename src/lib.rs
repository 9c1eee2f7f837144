//! # sonar-stepper
//!
//! Ultrasonic distance sensing and unipolar stepper actuation with embedded-hal 1.0
//! support.
//!
//! ## Features
//!
//! - **Echo ranging**: HC-SR04 style trigger/echo timing with a distinct timeout error
//! - **Half-step drive**: 8-row phase table for 28BYJ-48 motors behind a ULN2003 board
//! - **Jitter compensation**: each step sleeps only what is left of its interval
//! - **Scoped pins**: every claimed line is driven low again on every exit path
//! - **Configuration-driven**: describe the rig in a TOML file
//! - **no_std compatible**: core library works without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sonar_stepper::{DistanceSensor, Direction, StepMode, StepperActuator, UnitExt};
//!
//! let mut sensor = DistanceSensor::activate(trig, echo, delay, SensorConfig::new(23, 24))?;
//! sensor.wait_until_within(0.3_f32.meters(), 50_000, None)?;
//!
//! let mut stepper = StepperActuator::activate(coils, StepMode::EightStep, clock, delay)?;
//! let report = stepper.run(0.25_f32.rps(), 1.0_f32.revolutions(), Direction::Clockwise)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and host clock/delay
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod hal;
pub mod motor;
pub mod sensor;

// Re-exports for ergonomic API
pub use config::{validate_config, ActuatorConfig, RigConfig, RunConfig, SensorConfig};
pub use error::{Error, Result};
pub use hal::{Clock, EchoInput, Edge, PinNumbering, PolledEcho};
pub use motor::{
    state, Direction, PhaseIndex, RunOutcome, RunReport, StepMode, StepperActuator,
    StepperActuatorBuilder,
};
pub use sensor::DistanceSensor;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

#[cfg(feature = "std")]
pub use hal::{StdClock, StdDelay};

// Unit types
pub use config::units::{
    Meters, MetersPerSecond, Revolutions, RevolutionsPerSecond, Seconds, UnitExt,
};
