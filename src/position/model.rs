//! Move computation: direction and step count between two positions.

use crate::config::TrackGeometry;
use crate::error::Result;

use super::port::{Port, Position};

/// Direction of carriage travel.
///
/// The motor sits beyond port 4 and home is at the far end, so travelling
/// toward higher port numbers is `Backward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward home (decreasing port number).
    Forward,
    /// Away from home (increasing port number).
    Backward,
}

impl Direction {
    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A move instruction from the position model.
///
/// `direction` is `None` when the carriage is already at the target; in that
/// case `steps` is zero and no drive command may be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Move {
    /// Travel direction, `None` for no motion.
    pub direction: Option<Direction>,
    /// Step count.
    pub steps: u32,
}

impl Move {
    /// No motion.
    pub const STAY: Self = Self {
        direction: None,
        steps: 0,
    };

    /// Check if this move requires a drive command.
    #[inline]
    pub fn is_motion(&self) -> bool {
        self.direction.is_some()
    }

    /// Drive command for this move, if any.
    #[inline]
    pub fn command(&self) -> Option<(Direction, u32)> {
        self.direction.map(|direction| (direction, self.steps))
    }
}

/// Compute the move from `current` to `target`.
///
/// From home the distance is measured as if starting at port 1, plus the
/// short home-to-port-1 hop. The substitution only affects the distance; the
/// caller tracks `target` as the new position.
///
/// Never exceeds the full travel, so the step count is exact for any geometry
/// accepted by [`validate_config`](crate::config::validate_config). Larger
/// geometries saturate at `u32::MAX`.
pub fn compute_move(geometry: &TrackGeometry, current: Position, target: Port) -> Move {
    let target_index = target.number();
    let current_index = current.index();

    let direction = if target_index > current_index {
        Direction::Backward
    } else if target_index < current_index {
        Direction::Forward
    } else {
        return Move::STAY;
    };

    let steps = match current {
        Position::Home => {
            let intervals = u32::from(target_index.abs_diff(1));
            intervals
                .saturating_mul(geometry.steps_between_ports)
                .saturating_add(geometry.steps_home_to_port1)
        }
        Position::Port(_) => {
            u32::from(target_index.abs_diff(current_index))
                .saturating_mul(geometry.steps_between_ports)
        }
    };

    Move {
        direction: Some(direction),
        steps,
    }
}

/// Compute a move from raw position numbers.
///
/// # Errors
///
/// Returns `PositionError::InvalidPosition` if `current` is outside 0..=4 or
/// `target` outside 1..=4.
pub fn compute_move_raw(geometry: &TrackGeometry, current: u8, target: u8) -> Result<Move> {
    let current = Position::try_from(current)?;
    let target = Port::try_from(target)?;
    Ok(compute_move(geometry, current, target))
}

impl TrackGeometry {
    /// Compute the move from `current` to `target` on this track.
    #[inline]
    pub fn compute_move(&self, current: Position, target: Port) -> Move {
        compute_move(self, current, target)
    }

    /// Steps from home to a position.
    pub fn absolute_steps(&self, position: Position) -> u32 {
        match position {
            Position::Home => 0,
            Position::Port(port) => compute_move(self, Position::Home, port).steps,
        }
    }
}
