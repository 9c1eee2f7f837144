//! Blocking edge wait for the echo line.

use core::fmt;

use embedded_hal::digital::InputPin;

use crate::error::{Error, ResourceError, Result};

use super::clock::Clock;
use super::pin::PinRole;

/// Signal transition on a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high.
    Rising,
    /// High to low.
    Falling,
}

impl Edge {
    /// Check whether going from `previous` to `current` is this edge.
    #[inline]
    pub fn is_transition(self, previous: bool, current: bool) -> bool {
        match self {
            Edge::Rising => !previous && current,
            Edge::Falling => previous && !current,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Rising => write!(f, "rising"),
            Edge::Falling => write!(f, "falling"),
        }
    }
}

/// Outcome of one edge wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeEvent {
    /// The edge happened at this clock reading (nanoseconds).
    Detected {
        /// Timestamp of the edge.
        at_ns: u64,
    },
    /// The timeout elapsed first.
    TimedOut,
}

/// Input line that can block until an edge, with a timeout.
///
/// Implement this directly on top of interrupt-driven GPIO where available, or use
/// [`PolledEcho`] to sample any `InputPin`.
pub trait EchoInput {
    /// Block until `edge` is seen or `timeout_ns` elapses.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Read` if the line cannot be read. A timeout is not an
    /// error at this level; it is reported as [`EdgeEvent::TimedOut`].
    fn wait_for_edge(&mut self, edge: Edge, timeout_ns: u64) -> Result<EdgeEvent>;
}

impl<E: EchoInput + ?Sized> EchoInput for &mut E {
    fn wait_for_edge(&mut self, edge: Edge, timeout_ns: u64) -> Result<EdgeEvent> {
        (**self).wait_for_edge(edge, timeout_ns)
    }
}

/// Edge wait built from an `InputPin` sampled against a [`Clock`].
///
/// An edge is an observed level change between two consecutive samples, so a line
/// already high when a rising wait starts has to drop low first. Each detection is
/// stamped with the clock reading taken just before the sample that saw it.
pub struct PolledEcho<P, C> {
    pin: P,
    clock: C,
}

impl<P, C> PolledEcho<P, C>
where
    P: InputPin,
    C: Clock,
{
    /// Wrap an input pin and a clock.
    pub fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    /// Give back the pin and clock.
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    fn sample(&mut self) -> Result<bool> {
        self.pin
            .is_high()
            .map_err(|_| Error::from(ResourceError::Read(PinRole::Echo)))
    }
}

impl<P, C> EchoInput for PolledEcho<P, C>
where
    P: InputPin,
    C: Clock,
{
    fn wait_for_edge(&mut self, edge: Edge, timeout_ns: u64) -> Result<EdgeEvent> {
        let started = self.clock.now_ns();
        let mut previous = self.sample()?;

        loop {
            let now = self.clock.now_ns();
            let current = self.sample()?;
            if edge.is_transition(previous, current) {
                return Ok(EdgeEvent::Detected { at_ns: now });
            }
            if now.saturating_sub(started) >= timeout_ns {
                return Ok(EdgeEvent::TimedOut);
            }
            previous = current;
        }
    }
}
