//! Actuator run state and per-run reporting.

use crate::config::units::Revolutions;

use super::phase::PhaseIndex;

/// Whether the actuator is inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorState {
    /// Not stepping; the last commanded phase is held.
    #[default]
    Idle,
    /// Executing the timing loop.
    Stepping,
}

impl ActuatorState {
    /// Get the state name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            ActuatorState::Idle => "Idle",
            ActuatorState::Stepping => "Stepping",
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunOutcome {
    /// The requested revolutions were reached.
    Completed,
    /// The caller's stop predicate ended the run early.
    Stopped,
}

/// Progress handed to the stop predicate after each non-final step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepTick {
    /// Steps written so far in this run.
    pub step: u64,
    /// Phase the next step will write.
    pub phase: PhaseIndex,
    /// Revolutions completed so far.
    pub revolutions: Revolutions,
    /// Actuator state while the predicate runs.
    pub state: ActuatorState,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunReport {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Pin updates performed.
    pub steps: u64,
    /// Revolutions those steps correspond to.
    pub revolutions: Revolutions,
    /// Phase index after the run.
    pub final_phase: PhaseIndex,
    /// Iterations whose work exceeded the target interval (no sleep followed).
    pub late_steps: u64,
}

impl RunReport {
    /// Check whether the run reached its target.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }
}
