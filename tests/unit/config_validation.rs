//! Unit tests for configuration validation.

use leadscrew_indexer::config::{validate_config, SystemConfig};
use leadscrew_indexer::error::{ConfigError, Error};

/// Test validation of the default configuration.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
    assert!(validate_config(&SystemConfig::immediate()).is_ok());
}

/// Test validation fails for a zero port interval.
#[test]
fn test_zero_steps_between_ports() {
    let config: SystemConfig =
        toml::from_str("[geometry]\nsteps_between_ports = 0").expect("Failed to parse TOML");

    let result = validate_config(&config);
    assert_eq!(
        result,
        Err(Error::Config(ConfigError::ZeroSteps("steps_between_ports")))
    );
}

/// Test validation fails when the first hop is longer than a port interval.
#[test]
fn test_first_hop_too_long() {
    let toml_str = r#"
[geometry]
steps_between_ports = 500
steps_home_to_port1 = 501
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::FirstHopTooLong {
            home_to_port1: 501,
            between_ports: 500,
        }))
    );
}

/// Test validation fails when homing cannot cover full travel.
#[test]
fn test_homing_budget_too_short() {
    let config: SystemConfig =
        toml::from_str("[homing]\nmax_travel_steps = 1000").expect("Failed to parse TOML");

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::HomingTravelTooShort {
            budget: 1000,
            required: 2817,
        }))
    );
}

/// Test that a budget of exactly full travel is accepted.
#[test]
fn test_homing_budget_exact_travel() {
    let config: SystemConfig =
        toml::from_str("[homing]\nmax_travel_steps = 2817").expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test error display messages.
#[test]
fn test_error_display() {
    let error = Error::Config(ConfigError::InvalidRpm(0));
    assert_eq!(
        error.to_string(),
        "Configuration error: Invalid motor speed: 0 rpm. Must be > 0"
    );
}

/// Test that geometry whose full travel overflows is rejected, not a panic.
#[test]
fn test_travel_overflow_is_config_error() {
    let toml_str = r#"
[geometry]
steps_between_ports = 2000000000
steps_home_to_port1 = 1
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::GeometryTooLarge))
    );
    assert_eq!(
        leadscrew_indexer::parse_config(toml_str),
        Err(Error::Config(ConfigError::GeometryTooLarge))
    );
}

/// Test that a default homing budget past `u32::MAX` is rejected.
#[test]
fn test_default_budget_overflow_is_config_error() {
    let toml_str = r#"
[geometry]
steps_between_ports = 1073741824
steps_home_to_port1 = 1
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::GeometryTooLarge))
    );

    let explicit = format!("{}\n[homing]\nmax_travel_steps = 4000000000\n", toml_str);
    assert!(leadscrew_indexer::parse_config(&explicit).is_ok());
}
