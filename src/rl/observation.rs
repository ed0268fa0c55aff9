//! Observation encoding for the boarding environment.

use super::config::BoardingConfig;
use crate::aisle::AisleQueue;

/// Marker emitted for both fields of an empty or absent aisle slot.
pub const EMPTY_SLOT: i32 = -1;

/// Builds fixed-width observation vectors from the aisle.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Builds the observation for the current aisle.
    ///
    /// The observation is a flat `Vec<i32>` with structure:
    /// ```text
    /// [seat_0, status_0, seat_1, status_1, ..., seat_{N-1}, status_{N-1}]
    /// ```
    /// where pair `k` describes aisle slot `k` and `N` is the number of seats.
    /// Empty slots and slots past the end of the line are `(-1, -1)`.
    ///
    /// The overflow tail can in principle grow past `N` slots while the
    /// window is mostly empty; only the first `N` slots are encoded so the
    /// width never changes.
    pub fn build(aisle: &AisleQueue, config: &BoardingConfig) -> Vec<i32> {
        let width = config.total_seats();
        let mut obs = Vec::with_capacity(config.observation_dim());

        for slot in aisle.slots().iter().take(width) {
            match slot {
                Some(passenger) => {
                    obs.push(passenger.seat() as i32);
                    obs.push(passenger.status().code());
                }
                None => obs.extend([EMPTY_SLOT, EMPTY_SLOT]),
            }
        }
        obs.resize(config.observation_dim(), EMPTY_SLOT);

        obs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::{Passenger, PassengerStatus};

    #[test]
    fn empty_aisle_is_all_sentinels() {
        let config = BoardingConfig::new(3, 2);
        let aisle = AisleQueue::new(3);
        let obs = ObservationBuilder::build(&aisle, &config);
        assert_eq!(obs.len(), config.observation_dim());
        assert!(obs.iter().all(|&v| v == EMPTY_SLOT));
    }

    #[test]
    fn slots_encode_seat_and_status() {
        let config = BoardingConfig::new(2, 2);
        let mut aisle = AisleQueue::new(2);
        aisle.enqueue(Passenger::new(3, 1));
        let obs = ObservationBuilder::build(&aisle, &config);
        assert_eq!(obs.len(), 8);
        assert_eq!(&obs[..4], &[-1, -1, -1, -1]);
        assert_eq!(&obs[4..6], &[3, PassengerStatus::WalkingToSeat.code()]);
        assert_eq!(&obs[6..], &[-1, -1]);
    }

    #[test]
    fn long_line_is_truncated() {
        let config = BoardingConfig::new(3, 1);
        let mut aisle = AisleQueue::new(3);
        aisle.enqueue(Passenger::new(0, 0));
        aisle.enqueue(Passenger::new(1, 1));
        assert_eq!(aisle.line_len(), 5);
        let obs = ObservationBuilder::build(&aisle, &config);
        assert_eq!(obs.len(), 6);
        assert!(obs.iter().all(|&v| v == EMPTY_SLOT));
    }
}
