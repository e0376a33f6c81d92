//! Unit tests for TOML configuration parsing.

use leadscrew_indexer::config::{SystemConfig, TrackGeometry};
use leadscrew_indexer::drive::DriveMode;
use leadscrew_indexer::error::{ConfigError, Error};
use leadscrew_indexer::{load_config, parse_config};

const FULL_CONFIG: &str = r#"
[geometry]
steps_per_revolution = 400
steps_between_ports = 1746
steps_home_to_port1 = 396

[motor]
rpm = 120
drive_mode = "microstep"
invert_direction = true

[timing]
startup_pause_ms = 100
homing_pause_ms = 50
target_pause_ms = 10
cycle_delay_ms = 500

[homing]
max_travel_steps = 8000
switch_active_low = false
"#;

/// Test parsing of every section.
#[test]
fn test_parse_full_config() {
    let config = parse_config(FULL_CONFIG).expect("Failed to parse config");

    assert_eq!(config.geometry, TrackGeometry::new(400, 1746, 396));
    assert_eq!(config.motor.rpm, 120);
    assert_eq!(config.motor.drive_mode, DriveMode::Microstep);
    assert!(config.motor.invert_direction);
    assert_eq!(config.timing.cycle_pause_ms(), 510);
    assert_eq!(config.homing.max_travel_steps, Some(8000));
    assert!(!config.homing.switch_active_low);
    assert_eq!(config.homing_budget(), 8000);
}

/// Test that an empty file yields the prototype constants.
#[test]
fn test_empty_config_uses_reference_values() {
    let config = parse_config("").unwrap();

    assert_eq!(config.geometry, TrackGeometry::REFERENCE);
    assert_eq!(config.motor.rpm, 100);
    assert_eq!(config.motor.drive_mode, DriveMode::Double);
    assert_eq!(config.timing.startup_pause_ms, 5000);
    assert_eq!(config.timing.homing_pause_ms, 2000);
    assert_eq!(config.timing.target_pause_ms, 1000);
    assert_eq!(config.timing.cycle_delay_ms, 5000);
    assert_eq!(config.homing_budget(), 2817 + 873);
}

/// Test that drive modes use snake_case names.
#[test]
fn test_drive_mode_names() {
    for (name, mode) in [
        ("single", DriveMode::Single),
        ("double", DriveMode::Double),
        ("interleave", DriveMode::Interleave),
        ("microstep", DriveMode::Microstep),
    ] {
        let toml = format!("[motor]\ndrive_mode = \"{}\"", name);
        let config = parse_config(&toml).unwrap();
        assert_eq!(config.motor.drive_mode, mode);
    }
}

/// Test that an unknown drive mode is a parse error.
#[test]
fn test_unknown_drive_mode() {
    let result = parse_config("[motor]\ndrive_mode = \"quarter\"");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that parsing runs validation.
#[test]
fn test_parse_rejects_zero_rpm() {
    let result = parse_config("[motor]\nrpm = 0");
    assert_eq!(result, Err(Error::Config(ConfigError::InvalidRpm(0))));
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!(
        "leadscrew-indexer-{}-load.toml",
        std::process::id()
    ));
    std::fs::write(&path, FULL_CONFIG).unwrap();

    let config = load_config(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().motor.rpm, 120);
}

/// Test that a missing file is an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/leadscrew-indexer.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}

/// Test that derived geometry matches the reference track.
#[test]
fn test_geometry_from_lead_screw_matches_reference() {
    let geometry = TrackGeometry::from_lead_screw(200, 0.315, 1.375, 0.3125).unwrap();
    assert_eq!(geometry, TrackGeometry::REFERENCE);

    let config = SystemConfig {
        geometry,
        ..SystemConfig::default()
    };
    assert_eq!(config.geometry.travel_steps(), 2817);
}
