//! Motor drive configuration.

use serde::Deserialize;

use crate::drive::DriveMode;

/// Motor speed and drive-mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// Step rate in revolutions per minute.
    #[serde(default = "default_rpm")]
    pub rpm: u16,

    /// Coil drive mode used for every move.
    #[serde(default)]
    pub drive_mode: DriveMode,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

fn default_rpm() -> u16 {
    100
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            rpm: default_rpm(),
            drive_mode: DriveMode::default(),
            invert_direction: false,
        }
    }
}
