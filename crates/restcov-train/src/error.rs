//! Error types for the training driver.

use std::error::Error;
use std::fmt;

use restcov_env::EnvError;

/// Errors from configuring or running a training session.
#[derive(Debug)]
pub enum TrainError {
    /// The environment failed during an episode.
    Env(EnvError),
    /// Training configuration failed validation.
    InvalidConfig {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(e) => write!(f, "environment: {e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid train config: {reason}"),
        }
    }
}

impl Error for TrainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Env(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EnvError> for TrainError {
    fn from(e: EnvError) -> Self {
        Self::Env(e)
    }
}
