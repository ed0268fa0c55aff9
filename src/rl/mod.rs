//! Boarding environment for row-selection controllers.
//!
//! The environment, observation encoding, reward shaping, rendering snapshot
//! and fixed-order baselines are always available. The seeded
//! [`RandomPolicy`] is behind the `rl` feature flag (which brings in `rand`).
//!
//! ```
//! use smartboard::rl::{BackToFrontPolicy, BoardingConfig, BoardingEnv, Policy};
//!
//! let mut env = BoardingEnv::new(BoardingConfig::new(3, 2)).unwrap();
//! let mut policy = BackToFrontPolicy;
//! let mut obs = env.reset();
//! loop {
//!     let row = policy.select_row(&obs, &env.action_mask()).unwrap();
//!     let result = env.step(row).unwrap();
//!     obs = result.observation;
//!     if result.terminated {
//!         break;
//!     }
//! }
//! assert_eq!(env.seated_count(), 6);
//! ```

pub mod config;
pub mod environment;
pub mod metrics;
pub mod observation;
pub mod policy;
pub mod render;
pub mod reward;


pub use config::BoardingConfig;
pub use environment::{BoardingEnv, StepResult};
pub use metrics::{EpisodeSummary, EvaluationMetrics};
pub use observation::{ObservationBuilder, EMPTY_SLOT};
pub use policy::{BackToFrontPolicy, FrontToBackPolicy, Policy};
pub use render::{CabinSnapshot, PassengerView, RowView};
pub use reward::RewardComputer;

#[cfg(feature = "rl")]
pub use policy::RandomPolicy;
