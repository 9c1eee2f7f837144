//! Builder pattern for StepperActuator.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{ActuatorConfig, RigConfig};
use crate::error::{ArgumentError, ConfigError, Error, Result};
use crate::hal::Clock;

use super::actuator::StepperActuator;
use super::mode::StepMode;
use super::phase::PhaseIndex;
use super::timing::DEFAULT_STEPS_PER_REVOLUTION;

/// Builder for creating StepperActuator instances.
pub struct StepperActuatorBuilder<P, C, D>
where
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    pins: Option<[P; 4]>,
    clock: Option<C>,
    delay: Option<D>,
    name: Option<heapless::String<32>>,
    mode: StepMode,
    steps_per_revolution: u32,
    initial_phase: PhaseIndex,
}

impl<P, C, D> Default for StepperActuatorBuilder<P, C, D>
where
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C, D> StepperActuatorBuilder<P, C, D>
where
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pins: None,
            clock: None,
            delay: None,
            name: None,
            mode: StepMode::EightStep,
            steps_per_revolution: DEFAULT_STEPS_PER_REVOLUTION,
            initial_phase: PhaseIndex::default(),
        }
    }

    /// Set the coil pins, IN1..IN4.
    pub fn pins(mut self, pins: [P; 4]) -> Self {
        self.pins = Some(pins);
        self
    }

    /// Set the coil pins from any sequence.
    ///
    /// # Errors
    ///
    /// `ArgumentError::PinCount` unless the sequence yields exactly four pins.
    pub fn coil_pins<I>(self, pins: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut iter = pins.into_iter();
        let first = [iter.next(), iter.next(), iter.next(), iter.next()];
        let given = first.iter().filter(|p| p.is_some()).count();

        if let [Some(a), Some(b), Some(c), Some(d)] = first {
            let extra = iter.count();
            if extra == 0 {
                return Ok(self.pins([a, b, c, d]));
            }
            return Err(ArgumentError::PinCount(4 + extra).into());
        }
        Err(ArgumentError::PinCount(given).into())
    }

    /// Set the clock used to measure loop overhead.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the actuator name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the step mode.
    pub fn mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set half steps per output revolution.
    pub fn steps_per_revolution(mut self, steps: u32) -> Self {
        self.steps_per_revolution = steps;
        self
    }

    /// Set the phase row the rotor is resting on.
    pub fn initial_phase(mut self, phase: PhaseIndex) -> Self {
        self.initial_phase = phase;
        self
    }

    /// Configure from an ActuatorConfig.
    ///
    /// # Errors
    ///
    /// `ArgumentError::PhaseOutOfRange` if the configured start row is outside the
    /// table.
    pub fn from_actuator_config(mut self, config: &ActuatorConfig) -> Result<Self> {
        self.mode = config.mode;
        self.steps_per_revolution = config.steps_per_revolution;
        self.initial_phase = config.start_phase()?;
        Ok(self)
    }

    /// Configure from RigConfig by actuator name.
    pub fn from_config(self, config: &RigConfig, name: &str) -> Result<Self> {
        let actuator_config = config.actuator(name).ok_or_else(|| {
            Error::Config(ConfigError::ActuatorNotFound(
                heapless::String::try_from(name).unwrap_or_default(),
            ))
        })?;

        self.name(name).from_actuator_config(actuator_config)
    }

    /// Build the StepperActuator, claiming its pins.
    ///
    /// # Errors
    ///
    /// Returns an error if pins, clock or delay are missing, the resolution is zero, or
    /// a pin cannot be claimed.
    pub fn build(self) -> Result<StepperActuator<P, C, D>> {
        let pins = self
            .pins
            .ok_or(Error::Config(ConfigError::MissingField("pins")))?;
        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::MissingField("clock")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("stepper").unwrap_or_default());

        StepperActuator::with_settings(
            pins,
            self.mode,
            self.steps_per_revolution,
            self.initial_phase,
            clock,
            delay,
            name,
        )
    }
}
