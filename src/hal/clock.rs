//! Monotonic time source.

use embedded_hal::delay::DelayNs;

/// Monotonic timestamp source with nanosecond resolution.
///
/// Only differences between two readings are meaningful; the epoch is up to the
/// implementation.
pub trait Clock {
    /// Current timestamp in nanoseconds.
    fn now_ns(&mut self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    #[inline]
    fn now_ns(&mut self) -> u64 {
        (**self).now_ns()
    }
}

/// Sleep for a 64-bit nanosecond span on a `DelayNs` provider.
///
/// `DelayNs::delay_ns` takes a `u32`, which caps one call at ~4.29 s.
pub fn sleep_ns<D: DelayNs>(delay: &mut D, mut ns: u64) {
    while ns > 0 {
        let chunk = ns.min(u32::MAX as u64);
        delay.delay_ns(chunk as u32);
        ns -= chunk;
    }
}
