//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{SystemConfig, TrackGeometry};

/// Validate a system configuration.
///
/// Checks:
/// - Geometry passes [`validate_geometry`]
/// - Motor speed is non-zero
/// - The default homing budget, full travel plus one interval, fits in a `u32`
/// - The homing travel budget can reach home from the far port
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let geometry = &config.geometry;
    validate_geometry(geometry)?;

    if config.motor.rpm == 0 {
        return Err(Error::Config(ConfigError::InvalidRpm(config.motor.rpm)));
    }

    if config.homing.max_travel_steps.is_none()
        && geometry
            .travel_steps()
            .checked_add(geometry.steps_between_ports)
            .is_none()
    {
        return Err(Error::Config(ConfigError::GeometryTooLarge));
    }

    let budget = config.homing_budget();
    let required = geometry.travel_steps();
    if budget < required {
        return Err(Error::Config(ConfigError::HomingTravelTooShort { budget, required }));
    }

    Ok(())
}

/// Validate track geometry on its own.
///
/// Checks:
/// - Step counts are non-zero
/// - The home-to-port-1 hop is not longer than a port interval
/// - Full travel fits in a `u32`
pub fn validate_geometry(geometry: &TrackGeometry) -> Result<()> {
    if geometry.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::ZeroSteps("steps_per_revolution")));
    }

    if geometry.steps_between_ports == 0 {
        return Err(Error::Config(ConfigError::ZeroSteps("steps_between_ports")));
    }

    if geometry.steps_home_to_port1 == 0 {
        return Err(Error::Config(ConfigError::ZeroSteps("steps_home_to_port1")));
    }

    if geometry.steps_home_to_port1 > geometry.steps_between_ports {
        return Err(Error::Config(ConfigError::FirstHopTooLong {
            home_to_port1: geometry.steps_home_to_port1,
            between_ports: geometry.steps_between_ports,
        }));
    }

    if geometry.checked_travel_steps().is_none() {
        return Err(Error::Config(ConfigError::GeometryTooLarge));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackGeometry;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SystemConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_rpm() {
        let mut config = SystemConfig::default();
        config.motor.rpm = 0;

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidRpm(0)))
        ));
    }

    #[test]
    fn test_zero_port_interval() {
        let config = SystemConfig {
            geometry: TrackGeometry::new(200, 0, 0),
            ..SystemConfig::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::ZeroSteps("steps_between_ports")))
        ));
    }

    #[test]
    fn test_travel_overflow_rejected() {
        let config = SystemConfig {
            geometry: TrackGeometry::new(200, 2_000_000_000, 1),
            ..SystemConfig::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::GeometryTooLarge))
        ));
    }

    #[test]
    fn test_default_budget_overflow_rejected() {
        // Travel fits (3 * 1_073_741_824 + 1 < 2^32) but one more interval does not
        let mut config = SystemConfig {
            geometry: TrackGeometry::new(200, 1 << 30, 1),
            ..SystemConfig::default()
        };
        assert!(validate_geometry(&config.geometry).is_ok());

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::GeometryTooLarge))
        ));

        // An explicit budget replaces the default
        config.homing.max_travel_steps = Some(u32::MAX);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_short_homing_budget() {
        let mut config = SystemConfig::default();
        config.homing.max_travel_steps = Some(1000);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::HomingTravelTooShort {
                budget: 1000,
                required: 2817
            }))
        ));
    }
}
