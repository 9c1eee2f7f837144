//! Half-step phase table and the wrapping index into it.

use crate::error::ArgumentError;

/// Number of rows in the half-step drive sequence.
pub const PHASE_COUNT: u8 = 8;

/// Coil energisation pattern for IN1..IN4, one row per half step.
pub const PHASE_TABLE: [[bool; 4]; PHASE_COUNT as usize] = [
    [false, false, false, true],
    [false, false, true, true],
    [false, false, true, false],
    [false, true, true, false],
    [false, true, false, false],
    [true, true, false, false],
    [true, false, false, false],
    [true, false, false, true],
];

/// Row the rig powers up on.
pub const DEFAULT_PHASE: u8 = 1;

/// Position in [`PHASE_TABLE`], always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseIndex(u8);

impl PhaseIndex {
    /// Create an index, rejecting values outside the table.
    pub fn new(index: u8) -> Result<Self, ArgumentError> {
        if index < PHASE_COUNT {
            Ok(Self(index))
        } else {
            Err(ArgumentError::PhaseOutOfRange(index))
        }
    }

    /// Get the raw index.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Coil pattern at this index.
    #[inline]
    pub fn pattern(self) -> [bool; 4] {
        PHASE_TABLE[self.0 as usize]
    }

    /// Move by a signed number of rows, wrapping in both directions.
    #[inline]
    pub fn offset(self, delta: i8) -> Self {
        let next = (self.0 as i16 + delta as i16).rem_euclid(PHASE_COUNT as i16);
        Self(next as u8)
    }

    /// Move by `delta` rows `times` times.
    pub fn offset_by(self, delta: i8, times: u64) -> Self {
        let wrapped = (times % PHASE_COUNT as u64) as i64 * delta as i64;
        let next = (self.0 as i64 + wrapped).rem_euclid(PHASE_COUNT as i64);
        Self(next as u8)
    }
}

impl Default for PhaseIndex {
    fn default() -> Self {
        Self(DEFAULT_PHASE)
    }
}
