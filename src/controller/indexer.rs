//! Port indexing control loop.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;

use crate::config::SystemConfig;
use crate::drive::MotorDrive;
use crate::error::{DriveError, Error, Result};
use crate::homing::Homing;
use crate::position::{Move, Port, Position};
use crate::target::TargetSource;

use super::observer::{CycleObserver, NoopObserver};
use super::state::{ControllerMode, ControllerState, Homed, Phase, StateName, Unhomed};

/// Outcome of one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Position at the start of the cycle.
    pub from: Position,
    /// Port requested this cycle; the carriage is now there.
    pub target: Port,
    /// Move computed for the cycle.
    pub movement: Move,
    /// Cycle number, starting at 1.
    pub cycle: u32,
}

impl CycleReport {
    /// Whether a drive command was issued.
    #[inline]
    pub fn moved(&self) -> bool {
        self.movement.is_motion()
    }
}

/// Lead-screw port controller with type-state safety.
///
/// Generic over:
/// - `DRIVE`: motor drive (must implement `MotorDrive`)
/// - `HOME`: homing routine (must implement `Homing`)
/// - `TARGETS`: target source (must implement `TargetSource`)
/// - `DELAY`: blocking delay provider (must implement `DelayNs`)
/// - `OBS`: diagnostics observer (defaults to `NoopObserver`)
/// - `MODE`: type-state marker (defaults to `Unhomed`)
pub struct PortController<DRIVE, HOME, TARGETS, DELAY, OBS = NoopObserver, MODE = Unhomed>
where
    DRIVE: MotorDrive,
    HOME: Homing,
    TARGETS: TargetSource,
    DELAY: DelayNs,
    OBS: CycleObserver,
    MODE: ControllerMode,
{
    drive: DRIVE,
    homing: HOME,
    targets: TARGETS,
    delay: DELAY,
    observer: OBS,
    config: SystemConfig,
    state: ControllerState,
    _mode: PhantomData<MODE>,
}

impl<DRIVE, HOME, TARGETS, DELAY, OBS, MODE> PortController<DRIVE, HOME, TARGETS, DELAY, OBS, MODE>
where
    DRIVE: MotorDrive,
    HOME: Homing,
    TARGETS: TargetSource,
    DELAY: DelayNs,
    OBS: CycleObserver,
    MODE: ControllerMode + StateName,
{
    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Get the tracked state.
    #[inline]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Get the current type-state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        MODE::name()
    }

    /// Get the motor drive.
    #[inline]
    pub fn drive(&self) -> &DRIVE {
        &self.drive
    }

    /// Get the observer.
    #[inline]
    pub fn observer(&self) -> &OBS {
        &self.observer
    }

    /// Release all collaborators.
    pub fn release(self) -> (DRIVE, HOME, TARGETS, DELAY, OBS) {
        (self.drive, self.homing, self.targets, self.delay, self.observer)
    }

    fn into_mode<NEXT: ControllerMode>(self) -> PortController<DRIVE, HOME, TARGETS, DELAY, OBS, NEXT> {
        PortController {
            drive: self.drive,
            homing: self.homing,
            targets: self.targets,
            delay: self.delay,
            observer: self.observer,
            config: self.config,
            state: self.state,
            _mode: PhantomData,
        }
    }
}

impl<DRIVE, HOME, TARGETS, DELAY> PortController<DRIVE, HOME, TARGETS, DELAY>
where
    DRIVE: MotorDrive,
    HOME: Homing,
    TARGETS: TargetSource,
    DELAY: DelayNs,
{
    /// Create a controller. Nothing is commanded until [`start`](Self::start).
    pub fn new(
        drive: DRIVE,
        homing: HOME,
        targets: TARGETS,
        delay: DELAY,
        config: SystemConfig,
    ) -> Self {
        Self {
            drive,
            homing,
            targets,
            delay,
            observer: NoopObserver,
            config,
            state: ControllerState::default(),
            _mode: PhantomData,
        }
    }
}

impl<DRIVE, HOME, TARGETS, DELAY, OBS> PortController<DRIVE, HOME, TARGETS, DELAY, OBS, Unhomed>
where
    DRIVE: MotorDrive,
    HOME: Homing,
    TARGETS: TargetSource,
    DELAY: DelayNs,
    OBS: CycleObserver,
{
    /// Replace the diagnostics observer.
    pub fn with_observer<NEW: CycleObserver>(
        self,
        observer: NEW,
    ) -> PortController<DRIVE, HOME, TARGETS, DELAY, NEW, Unhomed> {
        PortController {
            drive: self.drive,
            homing: self.homing,
            targets: self.targets,
            delay: self.delay,
            observer,
            config: self.config,
            state: self.state,
            _mode: PhantomData,
        }
    }

    /// Configure the motor, home the carriage and enter the cycling state.
    ///
    /// On homing failure the controller is handed back in the `Faulted`
    /// phase with no position assumed; `start` may be retried.
    pub fn start(
        mut self,
    ) -> core::result::Result<PortController<DRIVE, HOME, TARGETS, DELAY, OBS, Homed>, (Self, Error)>
    {
        let timing = self.config.timing;
        let mode = self.config.motor.drive_mode;

        info!("initializing, {} rpm", self.config.motor.rpm);
        self.drive.configure_speed(self.config.motor.rpm);
        self.delay.delay_ms(timing.startup_pause_ms);

        info!("homing");
        self.state.set_phase(Phase::Homing);
        if let Err(e) = self.homing.drive_until_homed(&mut self.drive, mode) {
            warn!("homing failed");
            self.state.fault();
            self.observer.on_homing_failed(e);
            return Err((self, Error::Homing(e)));
        }
        self.delay.delay_ms(timing.homing_pause_ms);

        self.state.mark_homed();
        self.observer.on_homed();
        info!("homed");

        Ok(self.into_mode())
    }
}

impl<DRIVE, HOME, TARGETS, DELAY, OBS> PortController<DRIVE, HOME, TARGETS, DELAY, OBS, Homed>
where
    DRIVE: MotorDrive,
    HOME: Homing,
    TARGETS: TargetSource,
    DELAY: DelayNs,
    OBS: CycleObserver,
{
    /// Current carriage position, `None` once a move has failed.
    #[inline]
    pub fn current_position(&self) -> Option<Position> {
        self.state.current()
    }

    /// Run one cycle: acquire a target, move there, update the position,
    /// then pause.
    ///
    /// # Errors
    ///
    /// Returns `Error::Drive` if the move failed. The carriage may have
    /// stopped anywhere along the move, so the controller enters the
    /// `Faulted` phase and every later call returns
    /// `DriveError::PositionLost` until [`rehome`](Self::rehome) succeeds.
    pub fn cycle(&mut self) -> Result<CycleReport> {
        if !self.state.homed() {
            return Err(Error::Drive(DriveError::PositionLost));
        }

        let timing = self.config.timing;

        let target = self.targets.next_target();
        self.observer.on_target(target);
        self.delay.delay_ms(timing.target_pause_ms);

        let from = self.state.position();
        let movement = self.config.geometry.compute_move(from, target);
        self.observer.on_move(from, &movement);

        if let Some((direction, steps)) = movement.command() {
            debug!("moving {:?} {} steps", direction, steps);
            let mode = self.config.motor.drive_mode;
            if let Err(e) = self.drive.step(steps, direction, mode) {
                warn!("move failed, position lost");
                self.state.fault();
                self.observer.on_drive_failed(e);
                return Err(Error::Drive(e));
            }
        }

        self.state.arrive(target);
        let report = CycleReport {
            from,
            target,
            movement,
            cycle: self.state.cycles(),
        };
        self.observer.on_cycle_complete(&report);

        self.delay.delay_ms(timing.cycle_delay_ms);
        Ok(report)
    }

    /// Home again, typically after a failed move.
    ///
    /// Runs the full [`start`](PortController::start) sequence. On failure the
    /// controller is handed back `Unhomed` in the `Faulted` phase.
    pub fn rehome(
        self,
    ) -> core::result::Result<Self, (PortController<DRIVE, HOME, TARGETS, DELAY, OBS, Unhomed>, Error)>
    {
        self.into_mode::<Unhomed>().start()
    }

    /// Cycle forever. Returns only if a cycle fails.
    pub fn run(mut self) -> Error {
        loop {
            if let Err(e) = self.cycle() {
                warn!("cycle failed");
                return e;
            }
        }
    }
}
