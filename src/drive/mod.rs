//! Motor drive module for leadscrew-indexer.
//!
//! The controller only talks to the [`MotorDrive`] trait. [`PulseDrive`]
//! implements it for STEP/DIR driver boards over embedded-hal 1.0 pins.

mod pulse;

use serde::Deserialize;

use crate::error::DriveError;
use crate::position::Direction;

pub use pulse::PulseDrive;

/// Coil energisation pattern for each commanded step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum DriveMode {
    /// One coil energised per step.
    Single,
    /// Two coils energised per step, more torque at higher current.
    #[default]
    Double,
    /// Alternating single/double half-steps.
    Interleave,
    /// Sixteen microsteps per full step.
    Microstep,
}

impl DriveMode {
    /// Microstep subdivision used by [`DriveMode::Microstep`].
    pub const MICROSTEPS: u32 = 16;

    /// Driver pulses emitted for one commanded step.
    #[inline]
    pub fn pulses_per_step(self) -> u32 {
        match self {
            DriveMode::Microstep => Self::MICROSTEPS,
            _ => 1,
        }
    }

    /// Divisor applied to the full-step interval between pulses.
    #[inline]
    pub fn interval_divisor(self) -> u32 {
        match self {
            DriveMode::Single | DriveMode::Double => 1,
            DriveMode::Interleave => 2,
            DriveMode::Microstep => Self::MICROSTEPS,
        }
    }
}

/// A blocking stepper motor drive.
pub trait MotorDrive {
    /// Set the step rate in revolutions per minute.
    fn configure_speed(&mut self, rpm: u16);

    /// Perform `count` steps in `direction`, blocking until done.
    ///
    /// # Errors
    ///
    /// Returns `DriveError` if the driver hardware could not be commanded.
    fn step(
        &mut self,
        count: u32,
        direction: Direction,
        mode: DriveMode,
    ) -> Result<(), DriveError>;
}

impl<T: MotorDrive + ?Sized> MotorDrive for &mut T {
    fn configure_speed(&mut self, rpm: u16) {
        (**self).configure_speed(rpm)
    }

    fn step(
        &mut self,
        count: u32,
        direction: Direction,
        mode: DriveMode,
    ) -> Result<(), DriveError> {
        (**self).step(count, direction, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_pulses() {
        assert_eq!(DriveMode::Double.pulses_per_step(), 1);
        assert_eq!(DriveMode::Interleave.pulses_per_step(), 1);
        assert_eq!(DriveMode::Microstep.pulses_per_step(), 16);
    }

    #[test]
    fn test_mode_interval() {
        assert_eq!(DriveMode::Single.interval_divisor(), 1);
        assert_eq!(DriveMode::Interleave.interval_divisor(), 2);
        assert_eq!(DriveMode::Microstep.interval_divisor(), 16);
    }

    #[test]
    fn test_default_mode_is_double() {
        assert_eq!(DriveMode::default(), DriveMode::Double);
    }
}
