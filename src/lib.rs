//! # leadscrew-indexer
//!
//! Lead-screw port indexer with embedded-hal 1.0 support.
//!
//! A stepper motor drives a carriage along a lead screw that serves a home
//! reference and four equally spaced ports. After homing, the controller
//! repeatedly picks a target port, computes the direction and step count
//! from the fixed track geometry, moves there and tracks the new position.
//!
//! ## Features
//!
//! - **Configuration-driven**: Geometry, speed and timing from TOML files
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR, `InputPin` for the
//!   home switch, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Type-state safety**: Port moves only compile on a homed controller
//! - **Pluggable targets**: Random, scripted or closure-driven target choice
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leadscrew_indexer::{
//!     LimitSwitchHoming, PortController, PulseDrive, RandomTargets, SystemConfig,
//! };
//!
//! let config: SystemConfig = leadscrew_indexer::load_config("indexer.toml")?;
//!
//! let drive = PulseDrive::from_config(step_pin, dir_pin, pulse_delay, &config);
//! let homing = LimitSwitchHoming::from_config(home_switch, &config);
//!
//! let controller = PortController::new(drive, homing, RandomTargets::new(), delay, config)
//!     .start()
//!     .map_err(|(_, e)| e)?;
//!
//! // Cycles until the drive reports a fault
//! let error = controller.run();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod controller;
pub mod drive;
pub mod error;
pub mod homing;
pub mod position;
pub mod target;

// Re-exports for ergonomic API
pub use config::{
    validate_config, validate_geometry, HomingConfig, MotorConfig, SystemConfig, TimingConfig,
    TrackGeometry, PORT_COUNT,
};
pub use controller::{
    CycleObserver, CycleReport, Homed, NoopObserver, Phase, PortController, Unhomed,
};
pub use drive::{DriveMode, MotorDrive, PulseDrive};
pub use error::{Error, Result};
pub use homing::{Homing, LimitSwitchHoming};
pub use position::{compute_move, compute_move_raw, Direction, Move, Port, Position};
pub use target::{FnTargets, RandomTargets, ScriptedTargets, TargetSource};

#[cfg(feature = "log")]
pub use controller::LogObserver;

#[cfg(feature = "defmt")]
pub use controller::DefmtObserver;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
