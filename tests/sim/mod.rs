//! Simulated hardware sharing one virtual timeline.
//!
//! `SimClock` reads the timeline, `SimDelay` advances it, and `SimPin` records
//! every write with its timestamp (optionally charging a fixed cost per write).

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use sonar_stepper::hal::{EchoInput, Edge, EdgeEvent};
use sonar_stepper::{Clock, Result};

/// Shared virtual time in nanoseconds.
#[derive(Clone, Default)]
pub struct Timeline(Rc<Cell<u64>>);

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.0.get()
    }

    pub fn advance(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }

    pub fn clock(&self) -> SimClock {
        SimClock(self.clone())
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay {
            timeline: self.clone(),
            sleeps: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

pub struct SimClock(Timeline);

impl Clock for SimClock {
    fn now_ns(&mut self) -> u64 {
        self.0.now()
    }
}

/// Delay that moves virtual time forward and logs each request.
#[derive(Clone)]
pub struct SimDelay {
    timeline: Timeline,
    pub sleeps: Rc<RefCell<Vec<u32>>>,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps.borrow_mut().push(ns);
        self.timeline.advance(ns as u64);
    }
}

/// One recorded pin write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Write {
    pub at_ns: u64,
    pub high: bool,
}

/// Output line recording its writes.
#[derive(Clone)]
pub struct SimPin {
    timeline: Timeline,
    pub writes: Rc<RefCell<Vec<Write>>>,
    cost_ns: u64,
    fail_after: Option<usize>,
    fail_once_at: Option<usize>,
    attempts: Rc<Cell<usize>>,
}

impl SimPin {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            timeline: timeline.clone(),
            writes: Rc::new(RefCell::new(Vec::new())),
            cost_ns: 0,
            fail_after: None,
            fail_once_at: None,
            attempts: Rc::new(Cell::new(0)),
        }
    }

    /// Every write takes `ns` of virtual time.
    pub fn with_cost(mut self, ns: u64) -> Self {
        self.cost_ns = ns;
        self
    }

    /// Writes after the first `n` fail.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Only write attempt number `n` (0-based) fails.
    pub fn failing_once_at(mut self, n: usize) -> Self {
        self.fail_once_at = Some(n);
        self
    }

    pub fn is_high(&self) -> bool {
        self.writes.borrow().last().is_some_and(|w| w.high)
    }

    pub fn levels(&self) -> Vec<bool> {
        self.writes.borrow().iter().map(|w| w.high).collect()
    }

    fn write(&mut self, high: bool) -> core::result::Result<(), ErrorKind> {
        let attempt = self.attempts.get();
        self.attempts.set(attempt + 1);
        if self.fail_once_at == Some(attempt) {
            return Err(ErrorKind::Other);
        }
        if self
            .fail_after
            .is_some_and(|n| self.writes.borrow().len() >= n)
        {
            return Err(ErrorKind::Other);
        }
        self.timeline.advance(self.cost_ns);
        self.writes.borrow_mut().push(Write {
            at_ns: self.timeline.now(),
            high,
        });
        Ok(())
    }
}

impl ErrorType for SimPin {
    type Error = ErrorKind;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.write(true)
    }
}

/// Output line that accepts and forgets every write.
pub struct NullPin;

impl ErrorType for NullPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NullPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Four fresh coil pins on one timeline.
pub fn coils(timeline: &Timeline) -> [SimPin; 4] {
    [
        SimPin::new(timeline),
        SimPin::new(timeline),
        SimPin::new(timeline),
        SimPin::new(timeline),
    ]
}

/// Echo line answering from a script of `(delay, width)` pulses.
///
/// Each rising wait takes the next pulse: the echo goes high `delay` ns after the
/// wait starts and stays high for `width` ns. A `None` pulse never arrives and the
/// wait burns the full timeout.
pub struct SimEcho {
    timeline: Timeline,
    pulses: Vec<Option<(u64, u64)>>,
    current: Option<(u64, u64)>,
}

impl SimEcho {
    pub fn new(timeline: &Timeline, pulses: &[Option<(u64, u64)>]) -> Self {
        let mut pulses = pulses.to_vec();
        pulses.reverse();
        Self {
            timeline: timeline.clone(),
            pulses,
            current: None,
        }
    }
}

impl EchoInput for SimEcho {
    fn wait_for_edge(&mut self, edge: Edge, timeout_ns: u64) -> Result<EdgeEvent> {
        let now = self.timeline.now();
        if edge == Edge::Rising {
            self.current = self
                .pulses
                .pop()
                .flatten()
                .map(|(delay, width)| (now + delay, now + delay + width));
        }
        let at = match (edge, self.current) {
            (Edge::Rising, Some((rise, _))) => Some(rise),
            (Edge::Falling, Some((_, fall))) => Some(fall),
            _ => None,
        };
        match at {
            Some(at) if at.saturating_sub(now) <= timeout_ns => {
                self.timeline.advance(at.saturating_sub(now));
                Ok(EdgeEvent::Detected { at_ns: at })
            }
            _ => {
                self.timeline.advance(timeout_ns);
                Ok(EdgeEvent::TimedOut)
            }
        }
    }
}
