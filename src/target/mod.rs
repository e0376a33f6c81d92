//! Target selection for leadscrew-indexer.
//!
//! The controller asks a [`TargetSource`] for the next port every cycle.
//! [`RandomTargets`] reproduces the prototype's uniform random choice;
//! [`ScriptedTargets`] replays a fixed sequence.

mod random;

use crate::position::Port;

pub use random::RandomTargets;

/// Supplies the next desired port.
pub trait TargetSource {
    /// Next port to move to.
    fn next_target(&mut self) -> Port;
}

impl<T: TargetSource + ?Sized> TargetSource for &mut T {
    fn next_target(&mut self) -> Port {
        (**self).next_target()
    }
}

/// Replays a fixed port sequence, starting over after the last entry.
#[derive(Debug, Clone)]
pub struct ScriptedTargets<'a> {
    script: &'a [Port],
    next: usize,
}

impl<'a> ScriptedTargets<'a> {
    /// Create a source from a non-empty script.
    ///
    /// Returns `None` if `script` is empty.
    pub fn new(script: &'a [Port]) -> Option<Self> {
        if script.is_empty() {
            None
        } else {
            Some(Self { script, next: 0 })
        }
    }

    /// Number of targets handed out so far in the current pass.
    #[inline]
    pub fn position_in_script(&self) -> usize {
        self.next
    }
}

impl TargetSource for ScriptedTargets<'_> {
    fn next_target(&mut self) -> Port {
        let port = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        port
    }
}

/// Wraps a closure as a target source.
pub struct FnTargets<F>(pub F);

impl<F: FnMut() -> Port> TargetSource for FnTargets<F> {
    fn next_target(&mut self) -> Port {
        (self.0)()
    }
}
