//! Policy trait and baseline controllers.

pub mod heuristic;
#[cfg(feature = "rl")]
pub mod random;
pub mod trait_;

pub use heuristic::{BackToFrontPolicy, FrontToBackPolicy};
#[cfg(feature = "rl")]
pub use random::RandomPolicy;
pub use trait_::Policy;
