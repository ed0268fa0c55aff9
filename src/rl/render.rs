//! Read-only text snapshot of the cabin for terminal display.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aisle::AisleQueue;
use crate::cabin::AirplaneRow;
use crate::lobby::Lobby;
use crate::passenger::{Passenger, PassengerStatus};
use crate::SeatId;

/// A passenger as seen in the aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassengerView {
    pub seat: SeatId,
    pub status: PassengerStatus,
}

impl From<&Passenger> for PassengerView {
    fn from(p: &Passenger) -> Self {
        Self {
            seat: p.seat(),
            status: p.status(),
        }
    }
}

/// One airplane row and the aisle slot beside it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowView {
    /// `(seat, occupied)` for every seat in the row.
    pub seats: Vec<(SeatId, bool)>,
    pub aisle: Option<PassengerView>,
}

/// Snapshot of the whole boarding state.
///
/// Built by [`BoardingEnv::snapshot`](super::BoardingEnv::snapshot). The
/// simulation never reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CabinSnapshot {
    pub rows: Vec<RowView>,
    /// Passengers behind the row window, front first.
    pub entering: Vec<PassengerView>,
    /// Seat ids still waiting in each lobby row.
    pub lobby: Vec<Vec<SeatId>>,
}

impl CabinSnapshot {
    pub fn capture(rows: &[AirplaneRow], aisle: &AisleQueue, lobby: &Lobby) -> Self {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| RowView {
                seats: row
                    .seats()
                    .iter()
                    .map(|s| (s.id(), s.is_occupied()))
                    .collect(),
                aisle: aisle
                    .slots()
                    .get(i)
                    .and_then(Option::as_ref)
                    .map(PassengerView::from),
            })
            .collect();

        let entering = aisle
            .overflow()
            .iter()
            .flatten()
            .map(PassengerView::from)
            .collect();

        let lobby = lobby
            .rows()
            .iter()
            .map(|r| r.passengers().iter().map(Passenger::seat).collect())
            .collect();

        Self {
            rows,
            entering,
            lobby,
        }
    }

    pub fn seated(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| &r.seats)
            .filter(|(_, occupied)| *occupied)
            .count()
    }
}

impl fmt::Display for CabinSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seat_width = self
            .rows
            .first()
            .map(|r| r.seats.len() * 4)
            .unwrap_or(4)
            .saturating_sub(1);
        writeln!(f, "{:^seat_width$} | Aisle Line", "Seats")?;

        for row in &self.rows {
            for (i, (seat, occupied)) in row.seats.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                let tag = if *occupied { 'P' } else { 'S' };
                write!(f, "{}{:02}", tag, seat)?;
            }
            match row.aisle {
                Some(p) => writeln!(f, " | P{:02} {}", p.seat, p.status)?,
                None => writeln!(f, " |")?,
            }
        }

        writeln!(f)?;
        writeln!(f, "Line entering plane:")?;
        for p in &self.entering {
            writeln!(f, "P{:02} {}", p.seat, p.status)?;
        }

        writeln!(f)?;
        writeln!(f, "Lobby:")?;
        for row in self.lobby.iter().filter(|r| !r.is_empty()) {
            let names: Vec<_> = row.iter().map(|s| format!("P{:02}", s)).collect();
            writeln!(f, "{}", names.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reflects_state() {
        let rows: Vec<_> = (0..2).map(|r| AirplaneRow::new(r, 2)).collect();
        let mut lobby = Lobby::new(2, 2);
        let mut aisle = AisleQueue::new(2);
        aisle.enqueue(lobby.release(1).unwrap());

        let snap = CabinSnapshot::capture(&rows, &aisle, &lobby);
        assert_eq!(snap.rows.len(), 2);
        assert_eq!(snap.rows[1].seats, vec![(2, false), (3, false)]);
        assert!(snap.rows.iter().all(|r| r.aisle.is_none()));
        assert_eq!(
            snap.entering,
            vec![PassengerView {
                seat: 3,
                status: PassengerStatus::WalkingToSeat
            }]
        );
        assert_eq!(snap.lobby, vec![vec![0, 1], vec![2]]);
        assert_eq!(snap.seated(), 0);
    }

    #[test]
    fn display_layout() {
        let rows: Vec<_> = (0..2).map(|r| AirplaneRow::new(r, 1)).collect();
        let mut lobby = Lobby::new(2, 1);
        let mut aisle = AisleQueue::new(2);
        aisle.enqueue(lobby.release(0).unwrap());

        let text = CabinSnapshot::capture(&rows, &aisle, &lobby).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Seats | Aisle Line");
        assert_eq!(lines[1], "S00 |");
        assert_eq!(lines[2], "S01 |");
        assert_eq!(lines[4], "Line entering plane:");
        assert_eq!(lines[5], "P00 WALKING_TO_SEAT");
        assert_eq!(lines[7], "Lobby:");
        assert_eq!(lines[8], "P01");
    }
}
