//! Per-tick reward shaping.

use super::config::BoardingConfig;
use crate::aisle::AisleQueue;
use crate::passenger::PassengerStatus;

/// Computes rewards for the boarding environment.
pub struct RewardComputer;

impl RewardComputer {
    /// Reward for the aisle state at the end of one tick.
    ///
    /// `walking_weight × #walking − waiting_weight × #waiting`. Forward
    /// progress is rewarded, congestion penalized. Stowing and seated
    /// passengers are neutral.
    pub fn compute(aisle: &AisleQueue, config: &BoardingConfig) -> f64 {
        let walking = aisle.count_in_status(PassengerStatus::WalkingToSeat) as f64;
        let waiting = aisle.count_in_status(PassengerStatus::WaitingInAisle) as f64;
        config.walking_weight * walking - config.waiting_weight * waiting
    }
}
