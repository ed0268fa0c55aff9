//! Evaluation metrics for boarding controllers.
//!
//! Tracks episode-level results and aggregates them over multiple
//! evaluation episodes.

use std::fmt;

use super::environment::BoardingEnv;
use super::policy::Policy;
use crate::error::BoardingResult;

/// Outcome of one complete boarding episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeSummary {
    /// Sum of step rewards.
    pub total_reward: f64,
    /// Number of controller decisions (equals the number of passengers).
    pub steps: u32,
    /// Simulated ticks until the last passenger sat down.
    pub ticks: u64,
    /// Passengers seated at the end of the episode.
    pub seated: usize,
}

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    /// Name of the evaluated policy.
    pub policy: String,
    /// Mean cumulative reward per episode.
    pub mean_reward: f64,
    /// Lowest cumulative reward seen.
    pub min_reward: f64,
    /// Highest cumulative reward seen.
    pub max_reward: f64,
    /// Mean ticks needed to seat everyone.
    pub mean_ticks: f64,
    /// Mean controller steps per episode.
    pub mean_steps: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

impl EvaluationMetrics {
    /// Evaluates a policy over multiple episodes and returns aggregated metrics.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by an episode, typically an
    /// [`InvalidAction`](crate::BoardingError::InvalidAction) from a policy
    /// that ignores the action mask.
    pub fn evaluate(
        env: &mut BoardingEnv,
        policy: &mut dyn Policy,
        n_episodes: usize,
    ) -> BoardingResult<Self> {
        let mut episodes = Vec::with_capacity(n_episodes);
        for _ in 0..n_episodes {
            episodes.push(env.run_episode(&mut *policy)?);
        }
        Ok(Self::from_episodes(policy.name(), &episodes))
    }

    /// Aggregates already collected episode summaries.
    pub fn from_episodes(policy: &str, episodes: &[EpisodeSummary]) -> Self {
        let n = episodes.len().max(1) as f64;
        let mean_reward = episodes.iter().map(|e| e.total_reward).sum::<f64>() / n;
        let mean_ticks = episodes.iter().map(|e| e.ticks as f64).sum::<f64>() / n;
        let mean_steps = episodes.iter().map(|e| e.steps as f64).sum::<f64>() / n;
        let min_reward = episodes
            .iter()
            .map(|e| e.total_reward)
            .fold(f64::INFINITY, f64::min);
        let max_reward = episodes
            .iter()
            .map(|e| e.total_reward)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            policy: policy.to_string(),
            mean_reward,
            min_reward: if episodes.is_empty() { 0.0 } else { min_reward },
            max_reward: if episodes.is_empty() { 0.0 } else { max_reward },
            mean_ticks,
            mean_steps,
            n_episodes: episodes.len(),
        }
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics: {} ({} episodes) ===",
            self.policy, self.n_episodes
        )?;
        writeln!(f, "  Mean reward:   {:.2}", self.mean_reward)?;
        writeln!(
            f,
            "  Reward range:  [{:.2}, {:.2}]",
            self.min_reward, self.max_reward
        )?;
        writeln!(f, "  Mean ticks:    {:.1}", self.mean_ticks)?;
        writeln!(f, "  Mean steps:    {:.1}", self.mean_steps)
    }
}
