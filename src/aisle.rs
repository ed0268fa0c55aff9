//! The single-file boarding line.
//!
//! The line is a vector of slots. The first `window` slots line up with the
//! airplane rows: a passenger in slot `i` stands next to row `i` and can only
//! sit there. Passengers released from the lobby are appended behind the
//! window and walk toward slot 0, one slot per tick.
//!
//! ```text
//!  slot:   0     1     2   | 3     4        (window = 3)
//!  row:    0     1     2   | overflow tail
//!         [P01] [   ] [P09]| [P05] [P04]
//! ```
//!
//! A tick runs three passes over the line:
//!
//! 1. seating: every passenger inside the window tries its row;
//! 2. movement: slots `1..len` in ascending order, each movable passenger
//!    steps into an empty predecessor slot;
//! 3. compaction: empty slots behind the window are removed.
//!
//! The movement pass walks the live slot vector front to back. A passenger
//! that steps from `i` to `i - 1` is never visited again, and the passenger
//! at `i + 1` then sees slot `i` free, so a contiguous group advances
//! together while nobody moves more than one slot.

use crate::cabin::AirplaneRow;
use crate::error::BoardingResult;
use crate::passenger::{Passenger, PassengerStatus};
use crate::SeatId;

/// The aisle queue of passengers between the lobby and their seats.
#[derive(Debug)]
pub struct AisleQueue {
    window: usize,
    slots: Vec<Option<Passenger>>,
}

impl AisleQueue {
    /// Creates an empty aisle with one window slot per airplane row.
    pub fn new(rows: usize) -> Self {
        Self {
            window: rows,
            slots: std::iter::repeat_with(|| None).take(rows).collect(),
        }
    }

    /// Number of slots aligned with airplane rows.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Current number of slots, window plus overflow tail. Never below
    /// `window`; use [`is_boarding`](Self::is_boarding) to ask about passengers.
    pub fn line_len(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<Passenger>] {
        &self.slots
    }

    /// Slots behind the row window.
    pub fn overflow(&self) -> &[Option<Passenger>] {
        &self.slots[self.window.min(self.slots.len())..]
    }

    /// Appends a passenger at the tail of the line.
    pub fn enqueue(&mut self, passenger: Passenger) {
        self.slots.push(Some(passenger));
    }

    /// True while at least one passenger stands in the aisle.
    pub fn is_boarding(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    pub fn count_passengers(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn count_in_status(&self, status: PassengerStatus) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|p| p.status() == status)
            .count()
    }

    /// Slot index of the passenger assigned to `seat`, if it is in the aisle.
    pub fn position_of(&self, seat: SeatId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|p| p.seat() == seat))
    }

    /// Runs one tick: seating, movement, compaction.
    ///
    /// `rows` must be the airplane rows this aisle was built for. Returns the
    /// number of passengers that sat down during the tick.
    pub fn tick(&mut self, rows: &mut [AirplaneRow]) -> BoardingResult<usize> {
        debug_assert_eq!(rows.len(), self.window, "aisle window must match row count");

        let seated = self.seat_passengers(rows)?;
        self.advance();
        self.compact();
        Ok(seated)
    }

    fn seat_passengers(&mut self, rows: &mut [AirplaneRow]) -> BoardingResult<usize> {
        let mut seated = 0;
        for (slot, row) in self.slots.iter_mut().zip(rows.iter_mut()) {
            if row.try_seat(slot)? {
                seated += 1;
            }
        }
        Ok(seated)
    }

    fn advance(&mut self) {
        for i in 1..self.slots.len() {
            let blocked = self.slots[i - 1].is_some();
            let Some(passenger) = self.slots[i].as_mut() else {
                continue;
            };
            if !passenger.status().can_move() {
                continue;
            }

            if blocked {
                passenger.set_status(PassengerStatus::WaitingInAisle);
            } else {
                passenger.set_status(PassengerStatus::WalkingToSeat);
                self.slots.swap(i - 1, i);
            }
        }
    }

    /// Drops every empty slot behind the window. The window itself keeps its
    /// length so slot indices keep matching row indices.
    fn compact(&mut self) {
        let window = self.window;
        let mut index = 0;
        self.slots.retain(|slot| {
            let keep = index < window || slot.is_some();
            index += 1;
            keep
        });
    }
}
