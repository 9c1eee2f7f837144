//! Configuration module for sonar-stepper.
//!
//! Provides types for loading and validating rig configurations from TOML files
//! (with `std` feature) or pre-parsed data.

mod actuator;
#[cfg(feature = "std")]
mod loader;
mod rig;
mod run;
mod sensor;
pub mod units;
mod validation;

pub use actuator::ActuatorConfig;
pub use rig::RigConfig;
pub use run::RunConfig;
pub use sensor::SensorConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Meters, MetersPerSecond, Revolutions, RevolutionsPerSecond, Seconds};
