//! Airplane seats and rows.
//!
//! Seating models the stowing delay: the first time a passenger reaches its
//! seat it puts its suitcase away and keeps blocking the aisle for that tick;
//! the next attempt seats it.

mod row;
mod seat;

pub use row::AirplaneRow;
pub use seat::Seat;
