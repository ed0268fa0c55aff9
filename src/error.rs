use thiserror::Error;

use crate::{RowId, SeatId};

/// Errors raised by the boarding simulation.
///
/// `InvalidAction`, `NoActionSelected` and `EpisodeFinished` are controller
/// mistakes and are rejected before any state changes. `SeatMismatch` and `SeatOccupied`
/// signal a broken aisle-window invariant and should be unreachable through
/// [`BoardingEnv::step`](crate::rl::BoardingEnv::step).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoardingError {
    #[error("invalid action: row {row} {reason}")]
    InvalidAction { row: RowId, reason: &'static str },

    #[error("seat {seat} cannot take the passenger assigned to seat {passenger_seat}")]
    SeatMismatch { seat: SeatId, passenger_seat: SeatId },

    #[error("seat {seat} is already occupied")]
    SeatOccupied { seat: SeatId },

    #[error("policy {policy} selected no row while passengers are still waiting")]
    NoActionSelected { policy: String },

    #[error("episode already terminated; call reset() first")]
    EpisodeFinished,

    #[error("boarding configuration error: {0}")]
    Config(String),

    #[error("aisle still boarding after {ticks} drain ticks")]
    DrainStalled { ticks: u64 },
}

pub type BoardingResult<T> = Result<T, BoardingError>;
