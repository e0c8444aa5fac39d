//! The episode loop.

use restcov_core::ExecutorLink;
use restcov_env::CoverageEnv;

use crate::config::TrainConfig;
use crate::error::TrainError;
use crate::policy::Policy;
use crate::rollout::rollout_steps;

/// What a training run achieved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainReport {
    /// Episodes started.
    pub episodes: u64,
    /// Timesteps consumed across all episodes.
    pub total_steps: u64,
    /// Episodes that reached full coverage.
    pub terminated_episodes: u64,
    /// Episodes abandoned after one operation's budget was exhausted.
    pub truncated_episodes: u64,
    /// Best per-episode covered-operation count seen.
    pub best_covered: u32,
    /// Sum of rewards across the whole run.
    pub cumulative_reward: f64,
}

/// Drives reset/step episodes against a policy until the timestep
/// budget is spent.
#[derive(Clone, Debug)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    /// Build a trainer from a validated configuration.
    pub fn new(config: TrainConfig) -> Result<Self, TrainError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this trainer runs with.
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Run episodes until `total_timesteps` is reached.
    ///
    /// Each episode ends at termination (full coverage), truncation
    /// (confirmation budget exhausted), or the rollout boundary
    /// computed from the action-space size — whichever comes first.
    ///
    /// # Errors
    ///
    /// Propagates the first environment error; a broken channel ends
    /// the run immediately, there is no degraded mode.
    pub fn run<L, P>(
        &self,
        env: &mut CoverageEnv<L>,
        policy: &mut P,
    ) -> Result<TrainReport, TrainError>
    where
        L: ExecutorLink,
        P: Policy,
    {
        let rollout = rollout_steps(
            env.action_count(),
            self.config.episode_multiplier,
            self.config.minibatch,
        );
        let mut report = TrainReport::default();

        while report.total_steps < self.config.total_timesteps {
            env.reset(Some(self.config.seed ^ report.episodes));
            report.episodes += 1;

            let mut episode_steps = 0u64;
            loop {
                let action = policy.select(env.observation());
                let (reward, done_terminated, done_truncated) = {
                    let result = env.step(action)?;
                    (result.reward, result.terminated, result.truncated)
                };
                policy.observe(action, reward);

                episode_steps += 1;
                report.total_steps += 1;
                report.cumulative_reward += f64::from(reward);

                if done_terminated {
                    report.terminated_episodes += 1;
                }
                if done_truncated {
                    report.truncated_episodes += 1;
                }

                let out_of_budget = report.total_steps >= self.config.total_timesteps;
                if done_terminated || done_truncated || episode_steps >= rollout || out_of_budget
                {
                    break;
                }
            }

            report.best_covered = report.best_covered.max(env.metrics().covered);
        }

        Ok(report)
    }
}
