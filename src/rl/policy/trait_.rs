//! Controller trait for the boarding environment.

use crate::RowId;

/// A controller that picks which lobby row releases the next passenger.
///
/// Implementations must only return rows whose `mask` entry is true; the
/// environment rejects anything else with
/// [`InvalidAction`](crate::BoardingError::InvalidAction). `None` means the
/// mask allows no row.
pub trait Policy: Send + Sync {
    /// Selects a row given the current observation and action mask.
    ///
    /// # Arguments
    ///
    /// * `observation` - Aisle encoding from [`ObservationBuilder`](crate::rl::ObservationBuilder)
    /// * `mask` - One entry per row, true where the lobby row is non-empty
    fn select_row(&mut self, observation: &[i32], mask: &[bool]) -> Option<RowId>;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
