use std::fmt;

use crate::error::{BoardingError, BoardingResult};
use crate::passenger::{Passenger, PassengerStatus};
use crate::{RowId, SeatId};

/// A single seat. Owns its occupant once the passenger sits down.
#[derive(Debug)]
pub struct Seat {
    id: SeatId,
    row: RowId,
    occupant: Option<Passenger>,
}

impl Seat {
    pub fn new(id: SeatId, row: RowId) -> Self {
        Self {
            id,
            row,
            occupant: None,
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn row(&self) -> RowId {
        self.row
    }

    pub fn occupant(&self) -> Option<&Passenger> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Offers the passenger standing in `slot` this seat.
    ///
    /// A passenger still holding a suitcase spends this attempt stowing it and
    /// stays in the slot (`Ok(false)`). Otherwise the passenger is taken out of
    /// the slot, seated, and `Ok(true)` is returned.
    ///
    /// An empty slot is a no-op. Mismatched or occupied seats are rejected
    /// without touching either the seat or the slot.
    pub fn seat_passenger(&mut self, slot: &mut Option<Passenger>) -> BoardingResult<bool> {
        let Some(passenger) = slot.as_mut() else {
            return Ok(false);
        };

        if passenger.seat() != self.id {
            return Err(BoardingError::SeatMismatch {
                seat: self.id,
                passenger_seat: passenger.seat(),
            });
        }
        if self.occupant.is_some() {
            return Err(BoardingError::SeatOccupied { seat: self.id });
        }

        if passenger.is_holding_suitcase() {
            passenger.stow_suitcase();
            return Ok(false);
        }

        passenger.set_status(PassengerStatus::SeatedAndReady);
        self.occupant = slot.take();
        Ok(true)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occupant {
            Some(_) => write!(f, "P{:02}", self.id),
            None => write!(f, "S{:02}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attempt_stows_second_seats() {
        let mut seat = Seat::new(5, 1);
        let mut slot = Some(Passenger::new(5, 1));

        assert_eq!(seat.seat_passenger(&mut slot), Ok(false));
        let p = slot.as_ref().unwrap();
        assert_eq!(p.status(), PassengerStatus::StowingSuitcase);
        assert!(!p.is_holding_suitcase());
        assert!(!seat.is_occupied());

        assert_eq!(seat.seat_passenger(&mut slot), Ok(true));
        assert!(slot.is_none());
        let seated = seat.occupant().unwrap();
        assert_eq!(seated.status(), PassengerStatus::SeatedAndReady);
        assert!(!seated.is_holding_suitcase());
        assert_eq!(seated.seat(), seat.id());
    }

    #[test]
    fn mismatch_leaves_state_untouched() {
        let mut seat = Seat::new(2, 0);
        let mut slot = Some(Passenger::new(3, 0));
        assert_eq!(
            seat.seat_passenger(&mut slot),
            Err(BoardingError::SeatMismatch {
                seat: 2,
                passenger_seat: 3
            })
        );
        let p = slot.as_ref().unwrap();
        assert!(p.is_holding_suitcase());
        assert_eq!(p.status(), PassengerStatus::WalkingToSeat);
        assert!(!seat.is_occupied());
    }

    #[test]
    fn empty_slot_is_noop() {
        let mut seat = Seat::new(0, 0);
        let mut slot = None;
        assert_eq!(seat.seat_passenger(&mut slot), Ok(false));
        assert!(!seat.is_occupied());
    }

    #[test]
    fn display_shows_occupancy() {
        let mut seat = Seat::new(7, 1);
        assert_eq!(seat.to_string(), "S07");
        let mut slot = Some(Passenger::new(7, 1));
        seat.seat_passenger(&mut slot).unwrap();
        seat.seat_passenger(&mut slot).unwrap();
        assert_eq!(seat.to_string(), "P07");
    }
}
