//! Training run configuration.

use crate::error::TrainError;

/// Tunables for one training run.
///
/// The defaults reproduce the reference experiment: rollouts of
/// `20 × N` steps rounded up to the learner's minibatch of 64, and a
/// total budget of 102 400 timesteps.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainConfig {
    /// Rollout steps per operation in the action space. Default: 20.
    pub episode_multiplier: u32,
    /// Learner minibatch size; rollout lengths are rounded up to a
    /// multiple of this. Default: 64.
    pub minibatch: u32,
    /// Total timesteps across all episodes. Default: 102 400.
    pub total_timesteps: u64,
    /// Exploration rate of the reference policy, in `[0, 1]`.
    /// Default: 0.1.
    pub epsilon: f64,
    /// RNG seed for the reference policy. Default: 42.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            episode_multiplier: 20,
            minibatch: 64,
            total_timesteps: 102_400,
            epsilon: 0.1,
            seed: 42,
        }
    }
}

impl TrainConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.episode_multiplier == 0 {
            return Err(TrainError::InvalidConfig {
                reason: "episode_multiplier must be at least 1".to_string(),
            });
        }
        if self.minibatch == 0 {
            return Err(TrainError::InvalidConfig {
                reason: "minibatch must be at least 1".to_string(),
            });
        }
        if self.total_timesteps == 0 {
            return Err(TrainError::InvalidConfig {
                reason: "total_timesteps must be at least 1".to_string(),
            });
        }
        if !self.epsilon.is_finite() || !(0.0..=1.0).contains(&self.epsilon) {
            return Err(TrainError::InvalidConfig {
                reason: format!("epsilon must be in [0, 1], got {}", self.epsilon),
            });
        }
        Ok(())
    }
}
