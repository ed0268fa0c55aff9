use std::fmt;

use super::seat::Seat;
use crate::error::BoardingResult;
use crate::passenger::Passenger;
use crate::RowId;

/// A row of seats. Seat ids are `row * seats_per_row + i`.
#[derive(Debug)]
pub struct AirplaneRow {
    id: RowId,
    seats: Vec<Seat>,
}

impl AirplaneRow {
    pub fn new(id: RowId, seats_per_row: usize) -> Self {
        let seats = (0..seats_per_row)
            .map(|i| Seat::new(id * seats_per_row + i, id))
            .collect();
        Self { id, seats }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn occupied(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    /// Offers this row to the passenger standing in `slot`.
    ///
    /// Returns `Ok(false)` without any state change when the passenger's seat
    /// is not in this row. Otherwise defers to [`Seat::seat_passenger`].
    pub fn try_seat(&mut self, slot: &mut Option<Passenger>) -> BoardingResult<bool> {
        let Some(seat_id) = slot.as_ref().map(Passenger::seat) else {
            return Ok(false);
        };
        match self.seats.iter_mut().find(|s| s.id() == seat_id) {
            Some(seat) => seat.seat_passenger(slot),
            None => Ok(false),
        }
    }
}

impl fmt::Display for AirplaneRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seat) in self.seats.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", seat)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::PassengerStatus;

    #[test]
    fn seat_ids_follow_row() {
        let row = AirplaneRow::new(2, 3);
        let ids: Vec<_> = row.seats().iter().map(Seat::id).collect();
        assert_eq!(ids, vec![6, 7, 8]);
        assert!(row.seats().iter().all(|s| s.row() == 2));
    }

    #[test]
    fn passenger_from_other_row_is_ignored() {
        let mut row = AirplaneRow::new(0, 2);
        let mut slot = Some(Passenger::new(5, 2));
        assert_eq!(row.try_seat(&mut slot), Ok(false));
        let p = slot.as_ref().unwrap();
        assert!(p.is_holding_suitcase());
        assert_eq!(p.status(), PassengerStatus::WalkingToSeat);
        assert_eq!(row.occupied(), 0);
    }

    #[test]
    fn stow_then_seat() {
        let mut row = AirplaneRow::new(1, 2);
        let mut slot = Some(Passenger::new(3, 1));
        assert_eq!(row.try_seat(&mut slot), Ok(false));
        assert_eq!(row.occupied(), 0);
        assert_eq!(row.try_seat(&mut slot), Ok(true));
        assert!(slot.is_none());
        assert_eq!(row.occupied(), 1);
        assert!(row.seats()[1].is_occupied());
    }

    #[test]
    fn display_lists_seats() {
        let row = AirplaneRow::new(1, 3);
        assert_eq!(row.to_string(), "S03 S04 S05");
    }
}
