//! Unipolar stepper actuator driven through the half-step phase table.
//!
//! Generic over embedded-hal 1.0 output pins, a monotonic [`Clock`] and a `DelayNs`
//! provider.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::{is_positive, Revolutions, RevolutionsPerSecond};
use crate::error::{ArgumentError, Result};
use crate::hal::{sleep_ns, Clock, PinGuard, PinRole};

use super::mode::{Direction, StepMode};
use super::phase::PhaseIndex;
use super::state::{ActuatorState, RunOutcome, RunReport, StepTick};
use super::timing::{StepTiming, DEFAULT_STEPS_PER_REVOLUTION};

/// Stepper actuator holding four claimed coil lines (IN1..IN4).
///
/// Generic over:
/// - `P`: coil pin type (must implement `OutputPin`)
/// - `C`: monotonic clock used to measure loop overhead
/// - `D`: delay provider used to sleep out the rest of each step
///
/// The phase index survives between runs because the rotor physically stays where
/// the last pattern left it.
pub struct StepperActuator<P, C, D>
where
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    /// IN1..IN4, claimed for the lifetime of the actuator.
    coils: [PinGuard<P>; 4],

    clock: C,

    delay: D,

    mode: StepMode,

    /// Half steps per output revolution.
    steps_per_revolution: u32,

    /// Row of the phase table the next step writes.
    phase: PhaseIndex,

    state: ActuatorState,

    /// Actuator name for logging/debugging.
    name: heapless::String<32>,
}

impl<P, C, D> StepperActuator<P, C, D>
where
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    /// Claim four coil pins and create an idle actuator.
    ///
    /// Uses the 28BYJ-48 resolution of 4096 half steps per revolution and starts on
    /// phase row 1. Use [`StepperActuatorBuilder`](super::StepperActuatorBuilder) to
    /// change either.
    ///
    /// # Errors
    ///
    /// `ResourceError::Claim` if a coil cannot be driven low. Coils claimed before the
    /// failing one are released again before the error is returned.
    pub fn activate(pins: [P; 4], mode: StepMode, clock: C, delay: D) -> Result<Self> {
        Self::with_settings(
            pins,
            mode,
            DEFAULT_STEPS_PER_REVOLUTION,
            PhaseIndex::default(),
            clock,
            delay,
            heapless::String::try_from("stepper").unwrap_or_default(),
        )
    }

    pub(crate) fn with_settings(
        pins: [P; 4],
        mode: StepMode,
        steps_per_revolution: u32,
        phase: PhaseIndex,
        clock: C,
        delay: D,
        name: heapless::String<32>,
    ) -> Result<Self> {
        if steps_per_revolution == 0 {
            return Err(ArgumentError::InvalidStepsPerRevolution(steps_per_revolution).into());
        }

        let [in1, in2, in3, in4] = pins;
        // A failed claim drops the guards already built, which idles their lines.
        let coils = [
            PinGuard::claim(in1, PinRole::Coil(1))?,
            PinGuard::claim(in2, PinRole::Coil(2))?,
            PinGuard::claim(in3, PinRole::Coil(3))?,
            PinGuard::claim(in4, PinRole::Coil(4))?,
        ];

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: activated, mode={} spr={} phase={}",
            name.as_str(),
            mode,
            steps_per_revolution,
            phase
        );

        Ok(Self {
            coils,
            clock,
            delay,
            mode,
            steps_per_revolution,
            phase,
            state: ActuatorState::Idle,
            name,
        })
    }

    /// Idle all coils and hand back the pins, clock and delay.
    ///
    /// # Errors
    ///
    /// `ResourceError::Write` for the first coil that could not be driven low. Every
    /// coil is still attempted.
    pub fn deactivate(self) -> Result<([P; 4], C, D)> {
        #[cfg(feature = "defmt")]
        defmt::debug!("{}: deactivated at phase {}", self.name.as_str(), self.phase);

        let Self {
            coils, clock, delay, ..
        } = self;
        let [in1, in2, in3, in4] = coils.map(PinGuard::release);
        Ok(([in1?, in2?, in3?, in4?], clock, delay))
    }

    /// Get the actuator name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the step mode.
    #[inline]
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Get the resolution in half steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Get the phase row the next step will write.
    #[inline]
    pub fn phase(&self) -> PhaseIndex {
        self.phase
    }

    /// Get the run state.
    #[inline]
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Get the current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Overwrite the phase index, e.g. after moving the shaft by hand.
    pub fn set_phase(&mut self, phase: PhaseIndex) {
        self.phase = phase;
    }

    /// Drive all coils low without releasing them.
    ///
    /// The rotor loses holding torque; the phase index is kept.
    pub fn de_energize(&mut self) -> Result<()> {
        for coil in self.coils.iter_mut() {
            coil.set_low()?;
        }
        Ok(())
    }

    /// Rotate `revolutions` at `rps` in `direction`, blocking until done.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a non-positive or non-finite speed or revolution count,
    /// `ResourceError::Write` if a coil write fails mid-run. The actuator is back in
    /// [`ActuatorState::Idle`] on every return.
    pub fn run(
        &mut self,
        rps: RevolutionsPerSecond,
        revolutions: Revolutions,
        direction: Direction,
    ) -> Result<RunReport> {
        self.run_until(rps, revolutions, direction, |_| false)
    }

    /// Like [`run`](Self::run), but asks `should_stop` after every step except the
    /// last whether to end early.
    pub fn run_until<F>(
        &mut self,
        rps: RevolutionsPerSecond,
        revolutions: Revolutions,
        direction: Direction,
        should_stop: F,
    ) -> Result<RunReport>
    where
        F: FnMut(&StepTick) -> bool,
    {
        let timing = StepTiming::new(self.mode, self.steps_per_revolution, rps)?;
        if !is_positive(revolutions.0) {
            return Err(ArgumentError::InvalidRevolutions(revolutions.0).into());
        }
        let increment = direction.phase_increment(self.mode);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: run {} rev at {} rps {}, {} steps every {} ns",
            self.name.as_str(),
            revolutions.0,
            rps.0,
            direction,
            timing.steps_for(revolutions),
            timing.interval_ns
        );

        self.state = ActuatorState::Stepping;
        let result = self.step_loop(&timing, revolutions, increment, should_stop);
        self.state = ActuatorState::Idle;

        #[cfg(feature = "defmt")]
        match &result {
            Ok(report) => defmt::debug!("{}: {}", self.name.as_str(), report),
            Err(_) => defmt::warn!("{}: run aborted by pin error", self.name.as_str()),
        }

        result
    }

    fn step_loop<F>(
        &mut self,
        timing: &StepTiming,
        revolutions: Revolutions,
        increment: i8,
        mut should_stop: F,
    ) -> Result<RunReport>
    where
        F: FnMut(&StepTick) -> bool,
    {
        let target = timing.steps_for(revolutions);
        let mut steps: u64 = 0;
        let mut late_steps: u64 = 0;

        loop {
            let started = self.clock.now_ns();

            self.energize(self.phase.pattern())?;
            self.phase = self.phase.offset(increment);
            steps += 1;

            let completed = timing.revolutions_from_steps(steps);
            // The final pattern is held, not slept past.
            if steps >= target {
                return Ok(self.report(RunOutcome::Completed, steps, completed, late_steps));
            }

            let tick = StepTick {
                step: steps,
                phase: self.phase,
                revolutions: completed,
                state: self.state,
            };
            if should_stop(&tick) {
                return Ok(self.report(RunOutcome::Stopped, steps, completed, late_steps));
            }

            let elapsed = self.clock.now_ns().saturating_sub(started);
            if elapsed > timing.interval_ns {
                late_steps += 1;
                #[cfg(feature = "defmt")]
                defmt::trace!(
                    "{}: step {} late by {} ns",
                    self.name.as_str(),
                    steps,
                    elapsed - timing.interval_ns
                );
            }
            sleep_ns(&mut self.delay, timing.interval_ns.saturating_sub(elapsed));
        }
    }

    fn energize(&mut self, pattern: [bool; 4]) -> Result<()> {
        for (coil, level) in self.coils.iter_mut().zip(pattern) {
            coil.set(level)?;
        }
        Ok(())
    }

    fn report(
        &self,
        outcome: RunOutcome,
        steps: u64,
        revolutions: Revolutions,
        late_steps: u64,
    ) -> RunReport {
        RunReport {
            outcome,
            steps,
            revolutions,
            final_phase: self.phase,
            late_steps,
        }
    }
}
