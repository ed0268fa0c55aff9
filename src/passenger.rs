//! Passengers and their boarding status.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RowId, SeatId};

/// Where a passenger is in the boarding process.
///
/// The numeric [`code`](PassengerStatus::code) is the value emitted in
/// observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PassengerStatus {
    WalkingToSeat,
    WaitingInAisle,
    StowingSuitcase,
    SeatedAndReady,
}

impl PassengerStatus {
    /// Returns all statuses in code order.
    pub fn all() -> [PassengerStatus; 4] {
        [
            PassengerStatus::WalkingToSeat,
            PassengerStatus::WaitingInAisle,
            PassengerStatus::StowingSuitcase,
            PassengerStatus::SeatedAndReady,
        ]
    }

    /// Observation code of this status (0=walking, 1=waiting, 2=stowing, 3=seated).
    pub fn code(&self) -> i32 {
        match self {
            PassengerStatus::WalkingToSeat => 0,
            PassengerStatus::WaitingInAisle => 1,
            PassengerStatus::StowingSuitcase => 2,
            PassengerStatus::SeatedAndReady => 3,
        }
    }

    /// Inverse of [`code`](PassengerStatus::code).
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PassengerStatus::WalkingToSeat),
            1 => Some(PassengerStatus::WaitingInAisle),
            2 => Some(PassengerStatus::StowingSuitcase),
            3 => Some(PassengerStatus::SeatedAndReady),
            _ => None,
        }
    }

    /// True for statuses that may advance along the aisle.
    pub fn can_move(&self) -> bool {
        matches!(
            self,
            PassengerStatus::WalkingToSeat | PassengerStatus::WaitingInAisle
        )
    }
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerStatus::WalkingToSeat => write!(f, "WALKING_TO_SEAT"),
            PassengerStatus::WaitingInAisle => write!(f, "WAITING_IN_AISLE"),
            PassengerStatus::StowingSuitcase => write!(f, "STOWING_SUITCASE"),
            PassengerStatus::SeatedAndReady => write!(f, "SEATED_AND_READY"),
        }
    }
}

/// A passenger with an assigned seat.
///
/// Passengers are created by the [`Lobby`](crate::lobby::Lobby) and then moved
/// (never cloned) into the aisle and finally into their seat.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Passenger {
    seat: SeatId,
    row: RowId,
    status: PassengerStatus,
    holding_suitcase: bool,
}

impl Passenger {
    /// Creates a passenger walking to `seat` in `row` with a suitcase in hand.
    pub fn new(seat: SeatId, row: RowId) -> Self {
        Self {
            seat,
            row,
            status: PassengerStatus::WalkingToSeat,
            holding_suitcase: true,
        }
    }

    pub fn seat(&self) -> SeatId {
        self.seat
    }

    pub fn row(&self) -> RowId {
        self.row
    }

    pub fn status(&self) -> PassengerStatus {
        self.status
    }

    pub fn is_holding_suitcase(&self) -> bool {
        self.holding_suitcase
    }

    pub(crate) fn set_status(&mut self, status: PassengerStatus) {
        self.status = status;
    }

    /// Puts the suitcase in the overhead bin. The flag only ever goes from
    /// true to false.
    pub(crate) fn stow_suitcase(&mut self) {
        self.holding_suitcase = false;
        self.status = PassengerStatus::StowingSuitcase;
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:02}", self.seat)
    }
}
