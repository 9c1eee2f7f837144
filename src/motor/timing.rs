//! Step schedule derived from speed, mode and motor resolution.

use crate::config::units::{is_positive, Revolutions, RevolutionsPerSecond, NANOS_PER_SEC};
use crate::error::ArgumentError;

use super::mode::StepMode;

/// Half steps per output revolution of a 28BYJ-48 (64 half steps x 1:64 gearbox).
pub const DEFAULT_STEPS_PER_REVOLUTION: u32 = 4096;

/// Per-run timing derived from the commanded speed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepTiming {
    /// Phase-table rows advanced per step.
    pub step_size: u8,
    /// Half steps per output revolution.
    pub steps_per_revolution: u32,
    /// Target time between two pin updates, in nanoseconds.
    pub interval_ns: u64,
}

impl StepTiming {
    /// Derive the schedule for a speed.
    ///
    /// # Errors
    ///
    /// `InvalidSpeed` if `rps` is not finite and positive, `InvalidStepsPerRevolution`
    /// if the resolution is zero.
    pub fn new(
        mode: StepMode,
        steps_per_revolution: u32,
        rps: RevolutionsPerSecond,
    ) -> Result<Self, ArgumentError> {
        if steps_per_revolution == 0 {
            return Err(ArgumentError::InvalidStepsPerRevolution(steps_per_revolution));
        }
        if !is_positive(rps.0) {
            return Err(ArgumentError::InvalidSpeed(rps.0));
        }

        let step_size = mode.step_size();
        // f64 keeps sub-nanosecond error out of slow schedules.
        let period_ns = NANOS_PER_SEC as f64 / rps.0 as f64;
        let interval_ns = period_ns / steps_per_revolution as f64 * step_size as f64;

        Ok(Self {
            step_size,
            steps_per_revolution,
            interval_ns: interval_ns as u64,
        })
    }

    /// Revolutions completed after `steps` pin updates.
    #[inline]
    pub fn revolutions_from_steps(&self, steps: u64) -> Revolutions {
        let revolutions =
            steps as f64 * self.step_size as f64 / self.steps_per_revolution as f64;
        Revolutions(revolutions as f32)
    }

    /// Number of pin updates a run of `revolutions` will perform (at least one).
    ///
    /// Computed in f64 so the count stays exact well past 2^24 steps.
    pub fn steps_for(&self, revolutions: Revolutions) -> u64 {
        let exact =
            revolutions.0 as f64 * self.steps_per_revolution as f64 / self.step_size as f64;
        let steps = libm::ceil(exact);
        if steps < 1.0 {
            1
        } else if steps >= u64::MAX as f64 {
            u64::MAX
        } else {
            steps as u64
        }
    }
}
