//! Error types for leadscrew-indexer.
//!
//! Provides unified error handling across configuration, position handling,
//! homing and the motor drive.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all indexer operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Position outside the track's domain
    Position(PositionError),
    /// Homing sequence failed
    Homing(HomingError),
    /// Motor drive failed to execute a command
    Drive(DriveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A geometry step count was zero
    ZeroSteps(&'static str),
    /// Home-to-port-1 hop is longer than a port-to-port interval
    FirstHopTooLong {
        /// Configured home-to-port-1 steps
        home_to_port1: u32,
        /// Configured port-to-port steps
        between_ports: u32,
    },
    /// Motor speed must be > 0 rpm
    InvalidRpm(u16),
    /// Homing travel budget cannot reach home from the far port
    HomingTravelTooShort {
        /// Configured budget in steps
        budget: u32,
        /// Steps from home to the last port
        required: u32,
    },
    /// Lead or spacing used for geometry derivation was not positive
    InvalidMechanics,
    /// Full travel or the default homing budget does not fit in a `u32`
    GeometryTooLarge,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Position domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionError {
    /// Raw value outside 0..=4 (positions) or 1..=4 (targets)
    InvalidPosition(u8),
}

/// Homing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingError {
    /// Limit switch never tripped within the travel budget
    Timeout {
        /// Steps driven before giving up
        steps: u32,
    },
    /// Limit switch could not be read
    SensorError,
    /// Motor drive failed while seeking home
    Drive(DriveError),
}

/// Motor drive errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    /// STEP or DIR pin operation failed
    Pin,
    /// An earlier move failed; the carriage must be re-homed before moving
    PositionLost,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Position(e) => write!(f, "Position error: {}", e),
            Error::Homing(e) => write!(f, "Homing error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::ZeroSteps(field) => write!(f, "{} must be > 0", field),
            ConfigError::FirstHopTooLong {
                home_to_port1,
                between_ports,
            } => write!(
                f,
                "Home-to-port-1 steps ({}) must not exceed steps between ports ({})",
                home_to_port1, between_ports
            ),
            ConfigError::InvalidRpm(v) => write!(f, "Invalid motor speed: {} rpm. Must be > 0", v),
            ConfigError::HomingTravelTooShort { budget, required } => write!(
                f,
                "Homing travel budget of {} steps is shorter than full travel ({} steps)",
                budget, required
            ),
            ConfigError::InvalidMechanics => {
                write!(f, "Lead and port spacing must be > 0")
            }
            ConfigError::GeometryTooLarge => {
                write!(f, "Track travel exceeds {} steps", u32::MAX)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::InvalidPosition(v) => write!(f, "Invalid position: {}", v),
        }
    }
}

impl fmt::Display for HomingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomingError::Timeout { steps } => {
                write!(f, "Home limit switch not detected after {} steps", steps)
            }
            HomingError::SensorError => write!(f, "Home limit switch read failed"),
            HomingError::Drive(e) => write!(f, "Drive failed while homing: {}", e),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::Pin => write!(f, "GPIO pin operation failed"),
            DriveError::PositionLost => {
                write!(f, "Carriage position lost after a failed move, re-home first")
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PositionError> for Error {
    fn from(e: PositionError) -> Self {
        Error::Position(e)
    }
}

impl From<HomingError> for Error {
    fn from(e: HomingError) -> Self {
        Error::Homing(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

impl From<DriveError> for HomingError {
    fn from(e: DriveError) -> Self {
        HomingError::Drive(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PositionError {}

#[cfg(feature = "std")]
impl std::error::Error for HomingError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}
