//! The coverage environment.

use restcov_core::{ActionId, ExecutorLink};

use crate::config::EnvConfig;
use crate::error::EnvError;
use crate::metrics::EpisodeMetrics;
use crate::reward::{apply_outcome, Transition};
use crate::spaces::{CounterVector, Discrete};

/// Auxiliary step/reset information.
///
/// Always empty; the observation vector is the entire visible state.
/// Kept in the signatures so a generic driver can consume this
/// environment without special-casing it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Info;

/// Result of one [`CoverageEnv::step`] call.
///
/// The observation borrows the environment, so the caller must release
/// it before stepping again — the borrow checker enforces the strict
/// one-exchange-in-flight protocol at compile time.
#[derive(Debug)]
pub struct StepResult<'e> {
    /// Post-step observation: per-operation success counters.
    pub observation: &'e [u8],
    /// Scalar reward for this step.
    pub reward: f32,
    /// Every operation has been confirmed at least once.
    pub terminated: bool,
    /// One operation exhausted its confirmation budget first.
    pub truncated: bool,
    /// Always empty.
    pub info: Info,
}

/// RL environment over the operation space of a REST API under test.
///
/// Generic over the transport: production uses the named-pipe
/// `FifoLink`, tests substitute scripted or in-process links.
///
/// # Lifecycle
///
/// [`connect`](CoverageEnv::connect) performs the one-time handshake
/// that fixes the action-space size `N`. After that the environment
/// alternates between idle and one blocking action/outcome exchange
/// per [`step`](CoverageEnv::step), until an episode terminates (full
/// coverage) or truncates (one counter saturated). [`reset`]
/// (CoverageEnv::reset) zeroes the observation only — the external
/// API's state cannot be rolled back, and no message is exchanged.
pub struct CoverageEnv<L: ExecutorLink> {
    link: L,
    config: EnvConfig,
    action_count: u32,
    observation: Vec<u8>,
    metrics: EpisodeMetrics,
    last_seed: Option<u64>,
}

impl<L: ExecutorLink> CoverageEnv<L> {
    /// Perform the handshake and build the environment.
    ///
    /// Blocks until the executor announces its action-space size.
    /// Warns on stderr when the size pushes the 4-digit wire encoding
    /// toward its ceiling; the protocol still proceeds (known design
    /// weakness, preserved for peer compatibility).
    ///
    /// # Errors
    ///
    /// [`EnvError::Channel`] on a broken or malformed handshake,
    /// [`EnvError::EmptyActionSpace`] when the executor announces zero
    /// operations.
    pub fn connect(mut link: L, config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        let action_count = link.recv_action_count()?;
        if action_count == 0 {
            return Err(EnvError::EmptyActionSpace);
        }
        if action_count > config.wire_warn_limit {
            eprintln!(
                "restcov: {action_count} operations exceed the wire-safe limit of {}; \
                 encoded actions may outgrow the fixed 4-digit width",
                config.wire_warn_limit
            );
        }
        Ok(Self {
            link,
            config,
            action_count,
            observation: vec![0; action_count as usize],
            metrics: EpisodeMetrics::default(),
            last_seed: None,
        })
    }

    /// The action-space size `N`, fixed at handshake.
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Descriptor of the discrete action space.
    pub fn action_space(&self) -> Discrete {
        Discrete {
            n: self.action_count,
        }
    }

    /// Descriptor of the bounded counter-vector observation space.
    pub fn observation_space(&self) -> CounterVector {
        CounterVector {
            len: self.action_count as usize,
            high: self.config.obs_max,
        }
    }

    /// The current observation vector.
    pub fn observation(&self) -> &[u8] {
        &self.observation
    }

    /// Counters for the episode in progress.
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// Seed recorded by the most recent [`reset`](CoverageEnv::reset).
    pub fn last_seed(&self) -> Option<u64> {
        self.last_seed
    }

    /// Start a new episode: zero the observation vector.
    ///
    /// Never communicates with the executor — whatever side effects
    /// prior invocations caused in the API under test persist. The
    /// seed is accepted for driver-interface parity and recorded, but
    /// the environment itself has no stochastic behavior.
    pub fn reset(&mut self, seed: Option<u64>) -> (&[u8], Info) {
        self.observation.fill(0);
        self.metrics = EpisodeMetrics::default();
        self.last_seed = seed;
        (&self.observation, Info)
    }

    /// Invoke one operation: send the action, block for the outcome,
    /// apply the reward and termination policy.
    ///
    /// # Errors
    ///
    /// [`EnvError::ActionOutOfRange`] before anything is sent when the
    /// action falls outside `[0, N)`; [`EnvError::Channel`] when the
    /// exchange fails.
    pub fn step(&mut self, action: ActionId) -> Result<StepResult<'_>, EnvError> {
        if action.0 >= self.action_count {
            return Err(EnvError::ActionOutOfRange {
                action,
                n: self.action_count,
            });
        }

        self.link.send_action(action)?;
        let outcome = self.link.recv_outcome()?;

        let index = action.0 as usize;
        let covered_before = self.observation[index] > 0;
        let transition = apply_outcome(
            &mut self.observation,
            index,
            outcome,
            self.config.obs_max,
        );
        self.record(outcome.is_success(), covered_before, &transition);

        Ok(StepResult {
            observation: &self.observation,
            reward: transition.reward,
            terminated: transition.terminated,
            truncated: transition.truncated,
            info: Info,
        })
    }

    /// No-op: the environment has no visual representation.
    pub fn render(&self) {}

    /// No-op: the channel is expected to outlive the environment in
    /// the executor's lifetime model.
    pub fn close(&mut self) {}

    fn record(&mut self, success: bool, covered_before: bool, transition: &Transition) {
        self.metrics.steps += 1;
        if success {
            self.metrics.successes += 1;
            if !covered_before && !transition.truncated {
                self.metrics.first_coverage_events += 1;
                self.metrics.covered += 1;
            }
        } else {
            self.metrics.failures += 1;
        }
        self.metrics.cumulative_reward += f64::from(transition.reward);
    }
}

impl<L: ExecutorLink> std::fmt::Debug for CoverageEnv<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverageEnv")
            .field("action_count", &self.action_count)
            .field("covered", &self.metrics.covered)
            .field("steps", &self.metrics.steps)
            .finish()
    }
}
