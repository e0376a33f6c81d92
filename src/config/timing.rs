//! Blocking pause durations of the control loop.

use serde::Deserialize;

/// Fixed pauses, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Stabilisation pause after speed configuration, before homing.
    #[serde(default = "default_startup_pause_ms")]
    pub startup_pause_ms: u32,

    /// Stabilisation pause after homing completes.
    #[serde(default = "default_homing_pause_ms")]
    pub homing_pause_ms: u32,

    /// Pause after a target is acquired, before moving.
    #[serde(default = "default_target_pause_ms")]
    pub target_pause_ms: u32,

    /// Pause at the end of every cycle.
    #[serde(default = "default_cycle_delay_ms")]
    pub cycle_delay_ms: u32,
}

fn default_startup_pause_ms() -> u32 {
    5000
}

fn default_homing_pause_ms() -> u32 {
    2000
}

fn default_target_pause_ms() -> u32 {
    1000
}

fn default_cycle_delay_ms() -> u32 {
    5000
}

impl TimingConfig {
    /// All pauses zero. Useful for simulation and tests.
    pub const fn immediate() -> Self {
        Self {
            startup_pause_ms: 0,
            homing_pause_ms: 0,
            target_pause_ms: 0,
            cycle_delay_ms: 0,
        }
    }

    /// Total blocking time of one cycle, excluding motion.
    #[inline]
    pub fn cycle_pause_ms(&self) -> u32 {
        self.target_pause_ms.saturating_add(self.cycle_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            startup_pause_ms: default_startup_pause_ms(),
            homing_pause_ms: default_homing_pause_ms(),
            target_pause_ms: default_target_pause_ms(),
            cycle_delay_ms: default_cycle_delay_ms(),
        }
    }
}
