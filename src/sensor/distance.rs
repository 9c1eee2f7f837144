//! Ultrasonic echo-timing distance sensor (HC-SR04 style).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::{Meters, NANOS_PER_SEC};
use crate::config::SensorConfig;
use crate::error::{Error, GateError, Result, TimeoutError};
use crate::hal::{EchoInput, Edge, EdgeEvent, PinGuard, PinRole};

/// Width of the trigger pulse in microseconds.
pub const TRIGGER_PULSE_US: u32 = 10;

/// Distance sensor holding a claimed trigger line and an echo input.
///
/// Generic over:
/// - `T`: trigger pin type (must implement `OutputPin`)
/// - `E`: echo line with a blocking edge wait
/// - `D`: delay provider for the trigger pulse and poll pauses
pub struct DistanceSensor<T, E, D>
where
    T: OutputPin,
    E: EchoInput,
    D: DelayNs,
{
    trigger: PinGuard<T>,
    echo: E,
    delay: D,
    config: SensorConfig,
}

impl<T, E, D> DistanceSensor<T, E, D>
where
    T: OutputPin,
    E: EchoInput,
    D: DelayNs,
{
    /// Claim the trigger line (driven low) and create the sensor.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a non-positive timeout or speed of sound, checked before
    /// any pin is touched; `ResourceError::Claim` if the trigger cannot be driven low.
    pub fn activate(trigger: T, echo: E, delay: D, config: SensorConfig) -> Result<Self> {
        config.validate()?;
        let trigger = PinGuard::claim(trigger, PinRole::Trigger)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "sensor: activated trigger={} echo={} timeout={}s",
            config.trigger_pin,
            config.echo_pin,
            config.timeout.0
        );

        Ok(Self {
            trigger,
            echo,
            delay,
            config,
        })
    }

    /// Idle the trigger and hand back the trigger, echo and delay.
    ///
    /// # Errors
    ///
    /// `ResourceError::Write` if the trigger cannot be driven low.
    pub fn deactivate(self) -> Result<(T, E, D)> {
        let Self {
            trigger,
            echo,
            delay,
            ..
        } = self;
        Ok((trigger.release()?, echo, delay))
    }

    /// Get the sensor configuration.
    #[inline]
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Fire one ping and return the distance to the reflecting object.
    ///
    /// Blocks for at most twice the configured timeout plus the trigger pulse.
    ///
    /// # Errors
    ///
    /// `HardwareTimeout` naming the missing edge if the echo does not start or end in
    /// time; `Resource` errors if the trigger cannot be written or the echo read.
    pub fn measure(&mut self) -> Result<Meters> {
        let echo_ns = self.echo_duration_ns()?;
        let seconds = echo_ns as f32 / NANOS_PER_SEC;
        Ok(Meters(0.5 * self.config.sound_speed.0 * seconds))
    }

    /// Fire one ping and return the echo pulse width in nanoseconds.
    pub fn echo_duration_ns(&mut self) -> Result<u64> {
        self.trigger.set_high()?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low()?;

        let timeout_ns = self.config.timeout_ns();
        let start = self.wait_edge(Edge::Rising, timeout_ns)?;
        let end = self.wait_edge(Edge::Falling, timeout_ns)?;

        Ok(end.saturating_sub(start))
    }

    /// Measure repeatedly until a reading is at or below `threshold`.
    ///
    /// Echo timeouts mean nothing is in range and keep the loop polling; other errors
    /// end it. The thread sleeps `poll_interval_us` between attempts.
    ///
    /// # Errors
    ///
    /// `GateNotReached` once `max_polls` attempts have failed (`None` polls forever),
    /// carrying the closest out-of-range reading if any echo came back. Otherwise the
    /// first non-timeout error.
    pub fn wait_until_within(
        &mut self,
        threshold: Meters,
        poll_interval_us: u32,
        max_polls: Option<u32>,
    ) -> Result<Meters> {
        let mut polls: u32 = 0;
        let mut closest: Option<Meters> = None;
        loop {
            match self.measure() {
                Ok(distance) if distance <= threshold => return Ok(distance),
                Ok(distance) => {
                    if closest.map_or(true, |c| distance < c) {
                        closest = Some(distance);
                    }
                }
                Err(Error::HardwareTimeout(_)) => {}
                Err(e) => return Err(e),
            }

            polls = polls.saturating_add(1);
            if max_polls.is_some_and(|max| polls >= max) {
                return Err(GateError { polls, closest }.into());
            }
            self.delay.delay_us(poll_interval_us);
        }
    }

    fn wait_edge(&mut self, edge: Edge, timeout_ns: u64) -> Result<u64> {
        match self.echo.wait_for_edge(edge, timeout_ns)? {
            EdgeEvent::Detected { at_ns } => Ok(at_ns),
            EdgeEvent::TimedOut => {
                #[cfg(feature = "defmt")]
                defmt::warn!("sensor: no {} echo edge within {} ns", edge, timeout_ns);
                Err(TimeoutError { edge }.into())
            }
        }
    }
}
