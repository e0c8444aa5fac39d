//! Training driver for the coverage environment.
//!
//! Consumes the environment strictly through its reset/step contract:
//! computes the rollout length from the action-space size, runs
//! episodes against a pluggable [`Policy`] until the timestep budget
//! is spent, and reports what the exploration achieved. The policy
//! seam is where a full policy-optimization algorithm plugs in; the
//! bundled [`CountGreedy`] reference policy keeps the driver
//! self-contained.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod policy;
pub mod rollout;
pub mod trainer;

pub use config::TrainConfig;
pub use error::TrainError;
pub use policy::{CountGreedy, Policy};
pub use rollout::rollout_steps;
pub use trainer::{TrainReport, Trainer};
