//! Typed carriage positions.

use core::fmt;

use crate::config::PORT_COUNT;
use crate::error::PositionError;

/// One of the four physical ports (1..=4).
///
/// Only constructible for valid port numbers, so a `Port` is always a valid
/// move target. Home is deliberately not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Port(u8);

impl Port {
    /// Port 1, nearest to home.
    pub const P1: Self = Self(1);
    /// Port 2.
    pub const P2: Self = Self(2);
    /// Port 3.
    pub const P3: Self = Self(3);
    /// Port 4, farthest from home.
    pub const P4: Self = Self(4);

    /// All ports, nearest to home first.
    pub const ALL: [Self; PORT_COUNT as usize] = [Self::P1, Self::P2, Self::P3, Self::P4];

    /// Create a port from its number.
    ///
    /// # Errors
    ///
    /// Returns `PositionError::InvalidPosition` outside 1..=4.
    pub const fn new(number: u8) -> Result<Self, PositionError> {
        if number >= 1 && number <= PORT_COUNT {
            Ok(Self(number))
        } else {
            Err(PositionError::InvalidPosition(number))
        }
    }

    /// Port number (1..=4).
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Port {
    type Error = PositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Port> for u8 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port {}", self.0)
    }
}

/// Where the carriage is: the home reference or one of the ports.
///
/// Ordered by distance from home, so `Home < Port(P1) < ... < Port(P4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Zero reference at the home limit switch.
    #[default]
    Home,
    /// At a port.
    Port(Port),
}

impl Position {
    /// Position index: 0 for home, 1..=4 for ports.
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            Position::Home => 0,
            Position::Port(port) => port.number(),
        }
    }

    /// Check if this is the home reference.
    #[inline]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    /// The port at this position, if any.
    #[inline]
    pub const fn port(self) -> Option<Port> {
        match self {
            Position::Home => None,
            Position::Port(port) => Some(port),
        }
    }
}

impl From<Port> for Position {
    fn from(port: Port) -> Self {
        Position::Port(port)
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Position::Home),
            n => Port::new(n).map(Position::Port),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Home => write!(f, "home"),
            Position::Port(port) => port.fmt(f),
        }
    }
}
