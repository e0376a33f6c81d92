//! Homing configuration.

use serde::Deserialize;

use super::geometry::TrackGeometry;

/// Limit-switch homing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HomingConfig {
    /// Maximum steps driven toward home before giving up.
    ///
    /// Defaults to full travel plus one port interval.
    #[serde(default)]
    pub max_travel_steps: Option<u32>,

    /// Switch reads low when tripped.
    #[serde(default = "default_switch_active_low")]
    pub switch_active_low: bool,
}

fn default_switch_active_low() -> bool {
    true
}

impl HomingConfig {
    /// Travel budget for a given track.
    ///
    /// Saturates at `u32::MAX` if the default budget does not fit.
    pub fn travel_budget(&self, geometry: &TrackGeometry) -> u32 {
        self.max_travel_steps
            .unwrap_or_else(|| {
                geometry
                    .travel_steps()
                    .saturating_add(geometry.steps_between_ports)
            })
    }
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            max_travel_steps: None,
            switch_active_low: default_switch_active_low(),
        }
    }
}
