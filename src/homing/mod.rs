//! Homing for leadscrew-indexer.
//!
//! Homing is a hard dependency of the controller: until a [`Homing`]
//! implementation reports success, no position is assumed and no port move
//! is issued.

mod limit_switch;

use crate::drive::{DriveMode, MotorDrive};
use crate::error::HomingError;

pub use limit_switch::LimitSwitchHoming;

/// Capability to drive the carriage to the home reference.
pub trait Homing {
    /// Drive toward home until the reference is detected.
    ///
    /// # Errors
    ///
    /// Returns `HomingError::Timeout` if the reference is never detected
    /// within the implementation's travel budget.
    fn drive_until_homed<D: MotorDrive>(
        &mut self,
        drive: &mut D,
        mode: DriveMode,
    ) -> Result<(), HomingError>;
}

impl<T: Homing + ?Sized> Homing for &mut T {
    fn drive_until_homed<D: MotorDrive>(
        &mut self,
        drive: &mut D,
        mode: DriveMode,
    ) -> Result<(), HomingError> {
        (**self).drive_until_homed(drive, mode)
    }
}
