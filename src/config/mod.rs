//! Configuration module for leadscrew-indexer.
//!
//! Provides the track geometry, motor, timing and homing settings, loaded
//! from TOML files (with `std` feature) or built from the reference defaults.

mod geometry;
mod homing;
#[cfg(feature = "std")]
mod loader;
mod motor;
mod system;
mod timing;
mod validation;

pub use geometry::{TrackGeometry, PORT_COUNT};
pub use homing::HomingConfig;
pub use motor::MotorConfig;
pub use system::SystemConfig;
pub use timing::TimingConfig;
pub use validation::{validate_config, validate_geometry};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
