//! Limit-switch homing.

use embedded_hal::digital::InputPin;

use crate::config::SystemConfig;
use crate::drive::{DriveMode, MotorDrive};
use crate::error::HomingError;
use crate::position::Direction;

use super::Homing;

/// Steps forward one step at a time until the home switch trips.
///
/// Gives up with `HomingError::Timeout` after `max_travel_steps`.
pub struct LimitSwitchHoming<SW: InputPin> {
    switch: SW,
    max_travel_steps: u32,
    active_low: bool,
}

impl<SW: InputPin> LimitSwitchHoming<SW> {
    /// Create a homing routine for an active-low switch.
    pub fn new(switch: SW, max_travel_steps: u32) -> Self {
        Self {
            switch,
            max_travel_steps,
            active_low: true,
        }
    }

    /// Create a homing routine from system configuration.
    pub fn from_config(switch: SW, config: &SystemConfig) -> Self {
        Self::new(switch, config.homing_budget()).active_low(config.homing.switch_active_low)
    }

    /// Set switch polarity.
    pub fn active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    /// Travel budget in steps.
    #[inline]
    pub fn max_travel_steps(&self) -> u32 {
        self.max_travel_steps
    }

    /// Read the switch.
    pub fn is_tripped(&mut self) -> Result<bool, HomingError> {
        let level = if self.active_low {
            self.switch.is_low()
        } else {
            self.switch.is_high()
        };
        level.map_err(|_| HomingError::SensorError)
    }

    /// Release the switch pin.
    pub fn release(self) -> SW {
        self.switch
    }
}

impl<SW: InputPin> Homing for LimitSwitchHoming<SW> {
    fn drive_until_homed<D: MotorDrive>(
        &mut self,
        drive: &mut D,
        mode: DriveMode,
    ) -> Result<(), HomingError> {
        let mut steps = 0u32;
        loop {
            if self.is_tripped()? {
                debug!("home switch tripped after {} steps", steps);
                return Ok(());
            }
            if steps >= self.max_travel_steps {
                warn!("home switch not found within {} steps", steps);
                return Err(HomingError::Timeout { steps });
            }
            drive.step(1, Direction::Forward, mode)?;
            steps += 1;
        }
    }
}
