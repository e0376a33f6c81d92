//! Controller state: type-state markers and the tracked position.
//!
//! Uses Rust's type system so that port moves can only be issued once the
//! carriage has been homed.

use crate::position::{Port, Position};

/// Controller has not completed homing; position is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unhomed;

/// Controller is homed and cycling between ports.
#[derive(Debug, Clone, Copy)]
pub struct Homed;

/// Trait for controller type-states.
pub trait ControllerMode: private::Sealed {}

impl ControllerMode for Unhomed {}
impl ControllerMode for Homed {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Unhomed {}
    impl Sealed for super::Homed {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Unhomed {
    fn name() -> &'static str {
        "Unhomed"
    }
}

impl StateName for Homed {
    fn name() -> &'static str {
        "Homed"
    }
}

/// Runtime phase of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Constructed, motor not yet configured.
    #[default]
    Uninitialized,
    /// Seeking the home reference.
    Homing,
    /// Homed and cycling between ports. Terminal.
    Cycling,
    /// Homing or a move failed; no position is known.
    Faulted,
}

/// Position state owned by the controller.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    phase: Phase,
    homed: bool,
    current: Position,
    target: Option<Port>,
    cycles: u32,
}

impl ControllerState {
    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether homing has completed.
    #[inline]
    pub fn homed(&self) -> bool {
        self.homed
    }

    /// Current carriage position, `None` until homed.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.homed.then_some(self.current)
    }

    /// Target of the most recent cycle.
    #[inline]
    pub fn target(&self) -> Option<Port> {
        self.target
    }

    /// Completed cycles.
    #[inline]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn mark_homed(&mut self) {
        self.homed = true;
        self.current = Position::Home;
        self.phase = Phase::Cycling;
    }

    /// Forget the position. Called when homing or a move fails.
    pub(crate) fn fault(&mut self) {
        self.homed = false;
        self.phase = Phase::Faulted;
    }

    pub(crate) fn position(&self) -> Position {
        self.current
    }

    /// Record arrival at `target`. Called only after the move was issued.
    pub(crate) fn arrive(&mut self, target: Port) {
        self.current = Position::Port(target);
        self.target = Some(target);
        self.cycles = self.cycles.wrapping_add(1);
    }
}
