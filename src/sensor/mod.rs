//! Sensor module for sonar-stepper.

mod distance;

pub use distance::{DistanceSensor, TRIGGER_PULSE_US};
