//! Position model for leadscrew-indexer.
//!
//! Typed carriage positions and the pure move computation over the fixed
//! track geometry.

mod model;
mod port;

pub use model::{compute_move, compute_move_raw, Direction, Move};
pub use port::{Port, Position};
