//! Boarding environment.
//!
//! Each step follows: release → tick (or drain) → reward → termination →
//! observation.

use tracing::{debug, trace, warn};

use super::config::BoardingConfig;
use super::metrics::EpisodeSummary;
use super::observation::ObservationBuilder;
use super::policy::Policy;
use super::render::CabinSnapshot;
use super::reward::RewardComputer;
use crate::aisle::AisleQueue;
use crate::cabin::AirplaneRow;
use crate::error::{BoardingError, BoardingResult};
use crate::lobby::Lobby;
use crate::RowId;

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Observation after the step (length `2 × total_seats`).
    pub observation: Vec<i32>,
    /// Reward of the single tick, or the sum over all drain ticks.
    pub reward: f64,
    /// Whether every passenger is seated.
    pub terminated: bool,
    /// Number of steps taken this episode, including this one.
    pub time_step: u32,
    /// Ticks simulated during this step (1 unless the aisle drained).
    pub ticks: u64,
    /// Passengers that sat down during this step.
    pub seated: usize,
}

/// The airplane boarding environment.
///
/// A controller picks which lobby row releases its next passenger; the
/// environment moves the aisle forward and reports how well it flowed.
///
/// # Lifecycle
///
/// 1. Call [`BoardingEnv::new`] with a configuration. The episode is ready.
/// 2. Query [`BoardingEnv::action_mask`] and call [`BoardingEnv::step`] with a
///    row whose mask entry is true, until `terminated`.
/// 3. Call [`BoardingEnv::reset`] to start over.
///
/// Once the lobby is empty there is nothing left to choose, so the step that
/// releases the last passenger keeps ticking until the aisle is empty and
/// returns the accumulated reward.
#[derive(Debug)]
pub struct BoardingEnv {
    config: BoardingConfig,
    rows: Vec<AirplaneRow>,
    lobby: Lobby,
    aisle: AisleQueue,
    /// Steps taken this episode.
    steps: u32,
    /// Ticks simulated this episode.
    ticks: u64,
    /// Cumulative reward this episode.
    cumulative_reward: f64,
}

impl BoardingEnv {
    /// Creates an environment with a full lobby and an empty cabin.
    ///
    /// # Errors
    ///
    /// [`BoardingError::Config`] if the configuration does not validate.
    pub fn new(config: BoardingConfig) -> BoardingResult<Self> {
        config.validate()?;
        Ok(Self {
            rows: Self::build_rows(&config),
            lobby: Lobby::new(config.rows, config.seats_per_row),
            aisle: AisleQueue::new(config.rows),
            config,
            steps: 0,
            ticks: 0,
            cumulative_reward: 0.0,
        })
    }

    fn build_rows(config: &BoardingConfig) -> Vec<AirplaneRow> {
        (0..config.rows)
            .map(|r| AirplaneRow::new(r, config.seats_per_row))
            .collect()
    }

    /// Starts a new episode: full lobby, empty aisle, empty seats.
    pub fn reset(&mut self) -> Vec<i32> {
        self.rows = Self::build_rows(&self.config);
        self.lobby = Lobby::new(self.config.rows, self.config.seats_per_row);
        self.aisle = AisleQueue::new(self.config.rows);
        self.steps = 0;
        self.ticks = 0;
        self.cumulative_reward = 0.0;

        debug!(
            rows = self.config.rows,
            seats_per_row = self.config.seats_per_row,
            "boarding episode reset"
        );
        self.observe()
    }

    /// Releases the next passenger of `row` and advances the simulation.
    ///
    /// # Errors
    ///
    /// - [`BoardingError::EpisodeFinished`] once the episode has terminated.
    /// - [`BoardingError::InvalidAction`] when `row` is out of range or its
    ///   lobby pool is empty. Check [`BoardingEnv::action_mask`] first.
    ///
    /// Rejected actions leave the environment untouched.
    pub fn step(&mut self, row: RowId) -> BoardingResult<StepResult> {
        if self.is_terminated() {
            return Err(BoardingError::EpisodeFinished);
        }
        let passenger = self.lobby.release(row).inspect_err(|e| {
            warn!(row, error = %e, "boarding action rejected");
        })?;
        self.aisle.enqueue(passenger);
        self.steps += 1;

        let mut reward = 0.0;
        let mut ticks = 0;
        let mut seated = 0;

        if !self.lobby.is_empty() {
            let (r, s) = self.tick()?;
            reward = r;
            seated = s;
            ticks = 1;
        } else {
            let limit = self.config.drain_tick_limit();
            while self.aisle.is_boarding() {
                if ticks >= limit {
                    return Err(BoardingError::DrainStalled { ticks });
                }
                let (r, s) = self.tick()?;
                reward += r;
                seated += s;
                ticks += 1;
            }
        }

        self.cumulative_reward += reward;
        let terminated = self.is_terminated();
        debug!(
            row,
            step = self.steps,
            ticks,
            reward,
            terminated,
            "boarding step"
        );

        Ok(StepResult {
            observation: self.observe(),
            reward,
            terminated,
            time_step: self.steps,
            ticks,
            seated,
        })
    }

    fn tick(&mut self) -> BoardingResult<(f64, usize)> {
        let seated = self.aisle.tick(&mut self.rows)?;
        self.ticks += 1;
        let reward = RewardComputer::compute(&self.aisle, &self.config);
        trace!(
            tick = self.ticks,
            line_len = self.aisle.line_len(),
            in_aisle = self.aisle.count_passengers(),
            seated,
            reward,
            "boarding tick"
        );
        Ok((reward, seated))
    }

    /// Plays one full episode from a fresh reset with `policy` choosing rows.
    ///
    /// # Errors
    ///
    /// [`BoardingError::NoActionSelected`] if the policy returns `None` while
    /// the lobby still has passengers, and any error raised by [`step`](Self::step).
    pub fn run_episode(&mut self, policy: &mut dyn Policy) -> BoardingResult<EpisodeSummary> {
        let mut observation = self.reset();
        let mut summary = EpisodeSummary::default();

        loop {
            let mask = self.action_mask();
            let row = policy.select_row(&observation, &mask).ok_or_else(|| {
                BoardingError::NoActionSelected {
                    policy: policy.name().to_string(),
                }
            })?;
            let result = self.step(row)?;

            summary.total_reward += result.reward;
            summary.steps = result.time_step;
            summary.ticks += result.ticks;
            observation = result.observation;

            if result.terminated {
                break;
            }
        }

        summary.seated = self.seated_count();
        Ok(summary)
    }

    /// Current fixed-width observation of the aisle.
    pub fn observe(&self) -> Vec<i32> {
        ObservationBuilder::build(&self.aisle, &self.config)
    }

    /// `mask[r]` is true iff lobby row `r` still has a passenger to release.
    pub fn action_mask(&self) -> Vec<bool> {
        self.lobby.action_mask()
    }

    /// Row indices currently allowed by the action mask.
    pub fn valid_actions(&self) -> Vec<RowId> {
        (0..self.config.rows)
            .filter(|&r| self.lobby.is_non_empty(r))
            .collect()
    }

    /// True while someone waits in the lobby or stands in the aisle.
    pub fn is_boarding(&self) -> bool {
        !self.lobby.is_empty() || self.aisle.is_boarding()
    }

    pub fn is_terminated(&self) -> bool {
        !self.is_boarding()
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> CabinSnapshot {
        CabinSnapshot::capture(&self.rows, &self.aisle, &self.lobby)
    }

    pub fn config(&self) -> &BoardingConfig {
        &self.config
    }

    pub fn lobby(&self) -> &Lobby {
        &self.lobby
    }

    pub fn aisle(&self) -> &AisleQueue {
        &self.aisle
    }

    pub fn rows(&self) -> &[AirplaneRow] {
        &self.rows
    }

    pub fn seated_count(&self) -> usize {
        self.rows.iter().map(AirplaneRow::occupied).sum()
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn cumulative_reward(&self) -> f64 {
        self.cumulative_reward
    }
}
