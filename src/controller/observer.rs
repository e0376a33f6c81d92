//! Diagnostic observers.
//!
//! Observers only watch the control loop; nothing they do feeds back into it.

use crate::error::{DriveError, HomingError};
use crate::position::{Move, Port, Position};

use super::CycleReport;

/// Receives control-loop events. Every hook defaults to doing nothing.
pub trait CycleObserver {
    /// Homing completed; the carriage is at home.
    fn on_homed(&mut self) {}

    /// Homing failed.
    fn on_homing_failed(&mut self, _error: HomingError) {}

    /// A target was acquired.
    fn on_target(&mut self, _target: Port) {}

    /// A move was computed, before it is issued.
    fn on_move(&mut self, _from: Position, _movement: &Move) {}

    /// A cycle finished and the position was updated.
    fn on_cycle_complete(&mut self, _report: &CycleReport) {}

    /// A move failed partway; the position is no longer known.
    fn on_drive_failed(&mut self, _error: DriveError) {}
}

impl<T: CycleObserver + ?Sized> CycleObserver for &mut T {
    fn on_homed(&mut self) {
        (**self).on_homed()
    }

    fn on_homing_failed(&mut self, error: HomingError) {
        (**self).on_homing_failed(error)
    }

    fn on_target(&mut self, target: Port) {
        (**self).on_target(target)
    }

    fn on_move(&mut self, from: Position, movement: &Move) {
        (**self).on_move(from, movement)
    }

    fn on_cycle_complete(&mut self, report: &CycleReport) {
        (**self).on_cycle_complete(report)
    }

    fn on_drive_failed(&mut self, error: DriveError) {
        (**self).on_drive_failed(error)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}

/// Writes each cycle to the `log` facade.
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

#[cfg(feature = "log")]
impl CycleObserver for LogObserver {
    fn on_homed(&mut self) {
        log::info!("Homed, current position: home");
    }

    fn on_homing_failed(&mut self, error: HomingError) {
        log::error!("Homing failed: {}", error);
    }

    fn on_target(&mut self, target: Port) {
        log::info!("Target received: {}", target);
    }

    fn on_move(&mut self, from: Position, movement: &Move) {
        match movement.command() {
            Some((direction, steps)) => {
                log::info!("Moving {:?} {} steps from {}", direction, steps, from)
            }
            None => log::info!("Already at target ({})", from),
        }
    }

    fn on_cycle_complete(&mut self, report: &CycleReport) {
        log::info!("Current position: {} (cycle {})", report.target, report.cycle);
    }

    fn on_drive_failed(&mut self, error: DriveError) {
        log::error!("Move failed, position unknown: {}", error);
    }
}

/// Writes each cycle as defmt frames.
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtObserver;

#[cfg(feature = "defmt")]
impl CycleObserver for DefmtObserver {
    fn on_homed(&mut self) {
        defmt::info!("Homed, current position: home");
    }

    fn on_homing_failed(&mut self, error: HomingError) {
        defmt::error!("Homing failed: {}", error);
    }

    fn on_target(&mut self, target: Port) {
        defmt::info!("Target received: {}", target);
    }

    fn on_move(&mut self, from: Position, movement: &Move) {
        match movement.command() {
            Some((direction, steps)) => {
                defmt::info!("Moving {} {=u32} steps from {}", direction, steps, from)
            }
            None => defmt::info!("Already at target ({})", from),
        }
    }

    fn on_cycle_complete(&mut self, report: &CycleReport) {
        defmt::info!(
            "Current position: {} (cycle {=u32})",
            report.target,
            report.cycle
        );
    }

    fn on_drive_failed(&mut self, error: DriveError) {
        defmt::error!("Move failed, position unknown: {}", error);
    }
}
