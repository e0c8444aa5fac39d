//! restcov: RL-driven exploration of a REST API's operation space.
//!
//! An external test-executor process invokes HTTP operations and
//! reports outcomes; the coverage environment here chooses which
//! operation to try next, rewarding the first confirmed success of
//! each operation so the learning agent is pulled toward full
//! coverage. The two processes meet over a pair of named pipes.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all restcov sub-crates. For most users, adding `restcov` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```no_run
//! use restcov::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The executor process must be started separately; the handshake
//! // blocks until it announces its action-space size.
//! let link = FifoLink::new(ChannelConfig::default())?;
//! let mut env = CoverageEnv::connect(link, EnvConfig::default())?;
//!
//! let config = TrainConfig::default();
//! let mut policy = CountGreedy::new(config.seed, config.epsilon);
//! let report = Trainer::new(config)?.run(&mut env, &mut policy)?;
//! println!("covered {} of {}", report.best_covered, env.action_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `restcov-core` | IDs, wire encoding, errors, the link trait |
//! | [`channel`] | `restcov-channel` | Named-pipe executor link |
//! | [`env`] | `restcov-env` | Coverage environment, reward policy, spaces |
//! | [`train`] | `restcov-train` | Trainer, policies, rollout sizing, catalog |
//! | [`prompt`] | `restcov-prompt` | Prompt templating and response parsing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, wire encoding, and the link trait (`restcov-core`).
pub use restcov_core as types;

/// Named-pipe synchronization channel (`restcov-channel`).
pub use restcov_channel as channel;

/// Coverage environment and reward policy (`restcov-env`).
pub use restcov_env as env;

/// Training driver, policies, and experiment catalog (`restcov-train`).
pub use restcov_train as train;

/// Prompt templating and response parsing (`restcov-prompt`).
pub use restcov_prompt as prompt;

/// Common imports for typical restcov usage.
///
/// ```
/// use restcov::prelude::*;
/// ```
pub mod prelude {
    // Core types and the transport seam
    pub use restcov_core::{ActionId, ChannelError, ExecutorLink, OutcomeCode};

    // Channel
    pub use restcov_channel::{ChannelConfig, FifoLink};

    // Environment
    pub use restcov_env::{
        CounterVector, CoverageEnv, Discrete, EnvConfig, EnvError, EpisodeMetrics, Info,
        StepResult, Transition, OBS_MAX,
    };

    // Training
    pub use restcov_train::{
        CountGreedy, Policy, TrainConfig, TrainError, TrainReport, Trainer,
    };

    // Prompting
    pub use restcov_prompt::{parse_response, ParameterQuery, ValueTable};
}
