//! Motor module for sonar-stepper.
//!
//! Provides the unipolar stepper actuator, its phase table and step timing.

mod actuator;
mod builder;
mod mode;
mod phase;
pub mod state;
mod timing;

pub use actuator::StepperActuator;
pub use builder::StepperActuatorBuilder;
pub use mode::{Direction, StepMode};
pub use phase::{PhaseIndex, DEFAULT_PHASE, PHASE_COUNT, PHASE_TABLE};
pub use state::{ActuatorState, RunOutcome, RunReport, StepTick};
pub use timing::{StepTiming, DEFAULT_STEPS_PER_REVOLUTION};
