//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use leadscrew_indexer::load_config;
///
/// let config = load_config("indexer.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = truncated(e.message());
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::DriveMode;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[motor]
rpm = 60
drive_mode = "interleave"

[timing]
cycle_delay_ms = 250
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.motor.rpm, 60);
        assert_eq!(config.motor.drive_mode, DriveMode::Interleave);
        assert_eq!(config.timing.cycle_delay_ms, 250);
        // Unspecified values keep their defaults
        assert_eq!(config.timing.startup_pause_ms, 5000);
        assert_eq!(config.geometry.steps_between_ports, 873);
    }

    #[test]
    fn test_parse_rejects_invalid_geometry() {
        let toml = r#"
[geometry]
steps_between_ports = 100
steps_home_to_port1 = 400
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::FirstHopTooLong { .. }))
        ));
    }

    #[test]
    fn test_parse_error_message() {
        let result = parse_config("[motor]\nrpm = \"fast\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_truncated_long_message() {
        let long = "x".repeat(300);
        assert_eq!(truncated(&long).len(), 128);
    }
}
