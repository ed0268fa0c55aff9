//! Configuration for the boarding environment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BoardingError, BoardingResult};

/// Configuration for the boarding environment.
///
/// Controls cabin geometry and reward shaping. Geometry is fixed for the
/// lifetime of a [`BoardingEnv`](super::BoardingEnv).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardingConfig {
    // --- Cabin geometry ---
    /// Number of airplane rows (and lobby rows, and actions).
    pub rows: usize,
    /// Seats in every row.
    pub seats_per_row: usize,

    // --- Reward shaping ---
    /// Reward per passenger walking to its seat at the end of a tick.
    pub walking_weight: f64,
    /// Penalty per passenger waiting in the aisle at the end of a tick.
    pub waiting_weight: f64,
}

impl BoardingConfig {
    /// Creates a configuration with default reward weights.
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        Self {
            rows,
            seats_per_row,
            ..Self::default()
        }
    }

    /// Checks that the cabin has at least one seat and the weights are finite.
    pub fn validate(&self) -> BoardingResult<()> {
        if self.rows == 0 {
            return Err(BoardingError::Config("rows must be positive".into()));
        }
        if self.seats_per_row == 0 {
            return Err(BoardingError::Config("seats_per_row must be positive".into()));
        }
        if !self.walking_weight.is_finite() || !self.waiting_weight.is_finite() {
            return Err(BoardingError::Config("reward weights must be finite".into()));
        }
        Ok(())
    }

    pub fn total_seats(&self) -> usize {
        self.rows * self.seats_per_row
    }

    /// Observation length: a `(seat, status)` pair per possible aisle passenger.
    pub fn observation_dim(&self) -> usize {
        Self::SLOT_FEATURE_DIM * self.total_seats()
    }

    /// Number of features encoding a single aisle slot.
    pub const SLOT_FEATURE_DIM: usize = 2; // seat, status code

    /// One action per lobby row.
    pub fn action_dim(&self) -> usize {
        self.rows
    }

    /// Upper bound on ticks for draining a full aisle.
    ///
    /// The front-most passenger always progresses (moves, stows or sits) and
    /// needs at most `rows + total_seats + 2` ticks; one bound per passenger.
    pub fn drain_tick_limit(&self) -> u64 {
        let total = self.total_seats() as u64;
        total * (self.rows as u64 + total + 2)
    }
}

impl Default for BoardingConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            seats_per_row: 4,
            walking_weight: 1.0,
            waiting_weight: 1.0,
        }
    }
}
