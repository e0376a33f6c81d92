//! Port controller for leadscrew-indexer.
//!
//! [`PortController`] owns the drive, the homing routine and the target
//! source. It starts [`Unhomed`]; [`PortController::start`] homes the
//! carriage and hands back a [`Homed`] controller that can cycle.

mod indexer;
mod observer;
mod state;

pub use indexer::{CycleReport, PortController};
#[cfg(feature = "defmt")]
pub use observer::DefmtObserver;
#[cfg(feature = "log")]
pub use observer::LogObserver;
pub use observer::{CycleObserver, NoopObserver};
pub use state::{ControllerMode, ControllerState, Homed, Phase, StateName, Unhomed};
