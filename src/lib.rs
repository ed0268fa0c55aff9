//! smartboard - airplane boarding simulation
//!
//! Passengers wait in a lobby grouped by destination row. A controller picks
//! which row releases its next passenger into a single-file aisle; passengers
//! walk one slot per tick, spend one tick stowing their suitcase at their row
//! and then sit down. The [`rl`] module wraps this in a reset/step/observe
//! environment with an action mask.

pub mod aisle;
pub mod cabin;
pub mod error;
pub mod lobby;
pub mod passenger;
pub mod rl;

pub use error::{BoardingError, BoardingResult};

/// Index of an airplane row (also the lobby row and the action).
pub type RowId = usize;

/// Index of a seat, `row * seats_per_row + position_in_row`.
pub type SeatId = usize;
