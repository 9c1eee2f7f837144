//! Unit types for physical quantities.
//!
//! Provides type-safe representations of distances, durations, speeds and revolution
//! counts to prevent unit confusion at compile time.

use core::ops::Mul;

use serde::Deserialize;

/// Nanoseconds per second.
pub const NANOS_PER_SEC: f32 = 1_000_000_000.0;

/// Distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Meters(pub f32);

impl Meters {
    /// Create a new Meters value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Seconds(pub f32);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to whole nanoseconds (saturating, negative values become 0).
    #[inline]
    pub fn as_nanos(self) -> u64 {
        (self.0 as f64 * NANOS_PER_SEC as f64) as u64
    }

    /// Create from nanoseconds.
    #[inline]
    pub fn from_nanos(ns: u64) -> Self {
        Self((ns as f64 / NANOS_PER_SEC as f64) as f32)
    }
}

/// Speed in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MetersPerSecond(pub f32);

impl MetersPerSecond {
    /// Speed of sound in dry air at roughly 20 °C.
    pub const SOUND_IN_AIR: Self = Self(343.0);

    /// Create a new MetersPerSecond value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Mul<Seconds> for MetersPerSecond {
    type Output = Meters;

    fn mul(self, rhs: Seconds) -> Self::Output {
        Meters(self.0 * rhs.0)
    }
}

/// Angular speed in revolutions per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct RevolutionsPerSecond(pub f32);

impl RevolutionsPerSecond {
    /// Create a new RevolutionsPerSecond value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Time for one full revolution.
    #[inline]
    pub fn period(self) -> Seconds {
        Seconds(1.0 / self.0)
    }
}

/// Revolution count (fractional revolutions allowed).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Revolutions(pub f32);

impl Revolutions {
    /// Create a new Revolutions value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Check that a value is usable as a strictly positive quantity.
#[inline]
pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Meters.
    fn meters(self) -> Meters;
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
    /// Convert to RevolutionsPerSecond.
    fn rps(self) -> RevolutionsPerSecond;
    /// Convert to Revolutions.
    fn revolutions(self) -> Revolutions;
}

impl UnitExt for f32 {
    #[inline]
    fn meters(self) -> Meters {
        Meters(self)
    }

    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }

    #[inline]
    fn rps(self) -> RevolutionsPerSecond {
        RevolutionsPerSecond(self)
    }

    #[inline]
    fn revolutions(self) -> Revolutions {
        Revolutions(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_nanos() {
        assert_eq!(Seconds(1.0).as_nanos(), 1_000_000_000);
        assert_eq!(Seconds(0.001).as_nanos(), 1_000_000);
        assert_eq!(Seconds(-1.0).as_nanos(), 0);
    }

    #[test]
    fn test_speed_times_duration() {
        let d = MetersPerSecond(343.0) * Seconds(0.5);
        assert!((d.value() - 171.5).abs() < 1e-4);
    }

    #[test]
    fn test_period() {
        assert!((0.25_f32.rps().period().value() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_positive_check() {
        assert!(is_positive(0.1));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-1.0));
        assert!(!is_positive(f32::NAN));
        assert!(!is_positive(f32::INFINITY));
    }
}
