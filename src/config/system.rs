//! System configuration - root configuration structure.

use serde::Deserialize;

use super::geometry::TrackGeometry;
use super::homing::HomingConfig;
use super::motor::MotorConfig;
use super::timing::TimingConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; missing values fall back to the prototype's
/// fixed constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemConfig {
    /// Track step geometry.
    #[serde(default)]
    pub geometry: TrackGeometry,

    /// Motor speed and drive mode.
    #[serde(default)]
    pub motor: MotorConfig,

    /// Control loop pauses.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Homing settings.
    #[serde(default)]
    pub homing: HomingConfig,
}

impl SystemConfig {
    /// Configuration with the reference geometry and motor, and no pauses.
    pub fn immediate() -> Self {
        Self {
            timing: TimingConfig::immediate(),
            ..Self::default()
        }
    }

    /// Homing travel budget in steps.
    #[inline]
    pub fn homing_budget(&self) -> u32 {
        self.homing.travel_budget(&self.geometry)
    }
}
