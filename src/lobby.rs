//! Per-row waiting pools of passengers not yet in the aisle.

use crate::error::{BoardingError, BoardingResult};
use crate::passenger::Passenger;
use crate::RowId;

/// Passengers of one airplane row waiting to board, in seat order.
#[derive(Debug)]
pub struct LobbyRow {
    row: RowId,
    passengers: Vec<Passenger>,
}

impl LobbyRow {
    /// Creates a full pool: one passenger per seat of `row`.
    pub fn new(row: RowId, seats_per_row: usize) -> Self {
        let passengers = (0..seats_per_row)
            .map(|i| Passenger::new(row * seats_per_row + i, row))
            .collect();
        Self { row, passengers }
    }

    pub fn row(&self) -> RowId {
        self.row
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

/// The boarding lobby: one [`LobbyRow`] per airplane row.
///
/// Release takes the *last* passenger of a row, so a row boards from its
/// highest seat number down.
#[derive(Debug)]
pub struct Lobby {
    rows: Vec<LobbyRow>,
}

impl Lobby {
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        Self {
            rows: (0..rows).map(|r| LobbyRow::new(r, seats_per_row)).collect(),
        }
    }

    pub fn rows(&self) -> &[LobbyRow] {
        &self.rows
    }

    /// Removes the next passenger of `row` from the lobby.
    ///
    /// # Errors
    ///
    /// [`BoardingError::InvalidAction`] when `row` is out of range or its pool
    /// is empty. Nothing is removed in that case.
    pub fn release(&mut self, row: RowId) -> BoardingResult<Passenger> {
        let pool = self.rows.get_mut(row).ok_or(BoardingError::InvalidAction {
            row,
            reason: "is out of range",
        })?;
        pool.passengers.pop().ok_or(BoardingError::InvalidAction {
            row,
            reason: "has no waiting passengers",
        })
    }

    /// Total passengers still waiting across all rows.
    pub fn count_waiting(&self) -> usize {
        self.rows.iter().map(LobbyRow::len).sum()
    }

    /// True if `row` exists and still has someone waiting.
    pub fn is_non_empty(&self, row: RowId) -> bool {
        self.rows.get(row).is_some_and(|r| !r.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(LobbyRow::is_empty)
    }

    /// One entry per row, true where a passenger can be released.
    pub fn action_mask(&self) -> Vec<bool> {
        self.rows.iter().map(|r| !r.is_empty()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lobby_is_full() {
        let lobby = Lobby::new(3, 4);
        assert_eq!(lobby.count_waiting(), 12);
        assert_eq!(lobby.action_mask(), vec![true; 3]);
        let seats: Vec<_> = lobby.rows()[1].passengers().iter().map(|p| p.seat()).collect();
        assert_eq!(seats, vec![4, 5, 6, 7]);
    }

    #[test]
    fn release_is_last_in_first_out() {
        let mut lobby = Lobby::new(2, 3);
        assert_eq!(lobby.release(1).unwrap().seat(), 5);
        assert_eq!(lobby.release(1).unwrap().seat(), 4);
        assert_eq!(lobby.release(1).unwrap().seat(), 3);
        assert_eq!(lobby.count_waiting(), 3);
    }

    #[test]
    fn release_from_empty_row_fails() {
        let mut lobby = Lobby::new(2, 1);
        lobby.release(0).unwrap();
        assert!(!lobby.is_non_empty(0));
        assert_eq!(
            lobby.release(0).unwrap_err(),
            BoardingError::InvalidAction {
                row: 0,
                reason: "has no waiting passengers"
            }
        );
        assert_eq!(lobby.count_waiting(), 1);
    }

    #[test]
    fn release_out_of_range_fails() {
        let mut lobby = Lobby::new(2, 1);
        assert!(matches!(
            lobby.release(2),
            Err(BoardingError::InvalidAction { row: 2, .. })
        ));
        assert!(!lobby.is_non_empty(2));
        assert_eq!(lobby.count_waiting(), 2);
    }

    #[test]
    fn mask_tracks_empty_rows() {
        let mut lobby = Lobby::new(3, 1);
        lobby.release(1).unwrap();
        assert_eq!(lobby.action_mask(), vec![true, false, true]);
        lobby.release(0).unwrap();
        lobby.release(2).unwrap();
        assert!(lobby.is_empty());
        assert_eq!(lobby.action_mask(), vec![false; 3]);
    }
}
