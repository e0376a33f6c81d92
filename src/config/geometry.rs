//! Track geometry: the fixed step distances between home and the ports.

use libm::roundf;
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

use super::validate_geometry;

/// Number of physical ports along the track.
pub const PORT_COUNT: u8 = 4;

/// 2^32, the first float step count that no longer fits in a `u32`.
const U32_LIMIT: f32 = 4_294_967_296.0;

/// Fixed step geometry of the lead-screw track.
///
/// ```text
/// [MOT]==[ 4 ]====[ 3 ]====[ 2 ]====[ 1 ]==[0 HOME]
///        <-- BACKWARD            FORWARD -->
/// ```
///
/// The home-to-port-1 hop is shorter than a regular port interval and is
/// handled as a distinct first hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackGeometry {
    /// Full steps per motor revolution (200 for 1.8° motors).
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u16,

    /// Steps for one port-to-port interval.
    #[serde(default = "default_steps_between_ports")]
    pub steps_between_ports: u32,

    /// Steps from the home reference to port 1.
    #[serde(default = "default_steps_home_to_port1")]
    pub steps_home_to_port1: u32,
}

fn default_steps_per_revolution() -> u16 {
    TrackGeometry::REFERENCE.steps_per_revolution
}

fn default_steps_between_ports() -> u32 {
    TrackGeometry::REFERENCE.steps_between_ports
}

fn default_steps_home_to_port1() -> u32 {
    TrackGeometry::REFERENCE.steps_home_to_port1
}

impl TrackGeometry {
    /// Prototype track: 200 steps/rev motor on a TR8x8 screw, ports 1.375" apart,
    /// port 1 0.3125" from home.
    pub const REFERENCE: Self = Self {
        steps_per_revolution: 200,
        steps_between_ports: 873,
        steps_home_to_port1: 198,
    };

    /// Create a geometry from explicit step counts.
    pub const fn new(
        steps_per_revolution: u16,
        steps_between_ports: u32,
        steps_home_to_port1: u32,
    ) -> Self {
        Self {
            steps_per_revolution,
            steps_between_ports,
            steps_home_to_port1,
        }
    }

    /// Derive step counts from lead-screw mechanics.
    ///
    /// `lead` is the nut advance per screw revolution; `port_spacing` and
    /// `home_spacing` are the linear distances of a port interval and of the
    /// home-to-port-1 hop. All three must share one length unit.
    ///
    /// The derived counts go through [`validate_geometry`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMechanics` if any length is not positive,
    /// `ConfigError::GeometryTooLarge` if a count does not fit in a `u32`, or
    /// any other geometry validation error for the rounded counts.
    pub fn from_lead_screw(
        steps_per_revolution: u16,
        lead: f32,
        port_spacing: f32,
        home_spacing: f32,
    ) -> Result<Self> {
        if !(lead > 0.0 && port_spacing > 0.0 && home_spacing > 0.0) {
            return Err(Error::Config(ConfigError::InvalidMechanics));
        }

        let to_steps = |spacing: f32| {
            let steps = roundf(spacing / lead * steps_per_revolution as f32);
            if steps < U32_LIMIT {
                Ok(steps as u32)
            } else {
                Err(Error::Config(ConfigError::GeometryTooLarge))
            }
        };

        let geometry = Self {
            steps_per_revolution,
            steps_between_ports: to_steps(port_spacing)?,
            steps_home_to_port1: to_steps(home_spacing)?,
        };
        validate_geometry(&geometry)?;

        Ok(geometry)
    }

    /// Steps from home to port 4, the full travel of the carriage.
    ///
    /// Saturates at `u32::MAX`; exact for any geometry accepted by
    /// [`validate_config`](super::validate_config).
    #[inline]
    pub fn travel_steps(&self) -> u32 {
        self.checked_travel_steps().unwrap_or(u32::MAX)
    }

    /// Full travel in steps, `None` if it does not fit in a `u32`.
    pub fn checked_travel_steps(&self) -> Option<u32> {
        (PORT_COUNT as u32 - 1)
            .checked_mul(self.steps_between_ports)?
            .checked_add(self.steps_home_to_port1)
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}
