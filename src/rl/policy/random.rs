//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::trait_::Policy;
use crate::RowId;

/// Uniformly random choice among the rows allowed by the action mask.
///
/// Seeded for reproducible episodes. Used for sanity checks and as a
/// lower-bound baseline.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a new random policy.
    ///
    /// # Arguments
    ///
    /// * `seed` - RNG seed; the environment itself is deterministic, so this
    ///   fixes the whole episode.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_row(&mut self, _observation: &[i32], mask: &[bool]) -> Option<RowId> {
        let valid: Vec<RowId> = mask
            .iter()
            .enumerate()
            .filter(|(_, ok)| **ok)
            .map(|(row, _)| row)
            .collect();
        valid.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_policy_respects_mask() {
        let mut policy = RandomPolicy::new(7);
        let mask = [false, true, false, true];
        for _ in 0..100 {
            let row = policy.select_row(&[], &mask).unwrap();
            assert!(mask[row]);
        }
    }

    #[test]
    fn empty_mask_selects_nothing() {
        let mut policy = RandomPolicy::new(7);
        assert_eq!(policy.select_row(&[], &[false, false]), None);
    }

    #[test]
    fn same_seed_same_choices() {
        let mask = [true; 8];
        let mut a = RandomPolicy::new(42);
        let mut b = RandomPolicy::new(42);
        for _ in 0..20 {
            assert_eq!(a.select_row(&[], &mask), b.select_row(&[], &mask));
        }
    }
}
