//! The policy seam and a count-based reference policy.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use restcov_core::ActionId;

/// Action selection over the coverage observation.
///
/// A policy-optimization algorithm implements this to plug into the
/// [`Trainer`](crate::Trainer); it sees nothing of the environment
/// beyond the observation vector and per-step feedback.
pub trait Policy {
    /// Choose the next action given the current success counters.
    fn select(&mut self, observation: &[u8]) -> ActionId;

    /// Per-step feedback after the chosen action was executed.
    ///
    /// Default: ignore. Learning policies update from this.
    fn observe(&mut self, action: ActionId, reward: f32) {
        let _ = (action, reward);
    }
}

/// Epsilon-greedy policy over confirmation counts.
///
/// Greedy choice is the least-confirmed operation (ties broken
/// uniformly at random); with probability `epsilon` it explores
/// uniformly instead. Deterministic for a fixed seed via ChaCha8
/// (the workspace determinism convention).
#[derive(Debug)]
pub struct CountGreedy {
    rng: ChaCha8Rng,
    epsilon: f64,
}

impl CountGreedy {
    /// Seeded policy with the given exploration rate in `[0, 1]`.
    pub fn new(seed: u64, epsilon: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            epsilon: epsilon.clamp(0.0, 1.0),
        }
    }
}

impl Policy for CountGreedy {
    fn select(&mut self, observation: &[u8]) -> ActionId {
        debug_assert!(!observation.is_empty());
        let n = observation.len();
        if self.rng.random_bool(self.epsilon) {
            return ActionId(self.rng.random_range(0..n) as u32);
        }
        let min = observation.iter().copied().min().unwrap_or(0);
        let candidates: Vec<usize> = observation
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == min)
            .map(|(i, _)| i)
            .collect();
        let pick = candidates[self.rng.random_range(0..candidates.len())];
        ActionId(pick as u32)
    }
}
