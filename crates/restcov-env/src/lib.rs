//! Coverage environment for RL-driven REST API exploration.
//!
//! [`CoverageEnv`] exposes the standard environment contract — connect,
//! reset, step, render, close — over an [`ExecutorLink`] to the external
//! test-executor process. The observation is a vector of per-operation
//! success counters; the reward shape pays a large bonus for the first
//! confirmed success of each operation and penalizes re-exploitation,
//! steering the agent toward full operation coverage.
//!
//! [`ExecutorLink`]: restcov_core::ExecutorLink

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod env;
pub mod error;
pub mod metrics;
pub mod reward;
pub mod spaces;

pub use config::{EnvConfig, OBS_MAX};
pub use env::{CoverageEnv, Info, StepResult};
pub use error::EnvError;
pub use metrics::EpisodeMetrics;
pub use reward::{
    Transition, REWARD_NEW_COVERAGE, REWARD_PROBE_FAILURE, REWARD_WASTED,
};
pub use spaces::{CounterVector, Discrete};
