//! Error types for the coverage environment.

use std::error::Error;
use std::fmt;

use restcov_core::{ActionId, ChannelError};

/// Errors from environment construction and stepping.
#[derive(Debug)]
pub enum EnvError {
    /// The synchronization channel failed or delivered a malformed
    /// payload.
    Channel(ChannelError),
    /// The executor announced zero operations; there is nothing to
    /// explore.
    EmptyActionSpace,
    /// The caller stepped with an action outside `[0, N)`.
    ///
    /// This is a contract violation by the learning algorithm; failing
    /// here keeps the violation from corrupting the observation vector
    /// through an out-of-bounds write.
    ActionOutOfRange {
        /// The offending action.
        action: ActionId,
        /// The action-space size.
        n: u32,
    },
    /// Environment configuration failed validation.
    InvalidConfig {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel(e) => write!(f, "channel: {e}"),
            Self::EmptyActionSpace => write!(f, "executor announced zero operations"),
            Self::ActionOutOfRange { action, n } => {
                write!(f, "action {action} outside action space of size {n}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid env config: {reason}"),
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Channel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChannelError> for EnvError {
    fn from(e: ChannelError) -> Self {
        Self::Channel(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_errors_convert_and_chain() {
        let e: EnvError = ChannelError::Disconnected.into();
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("channel:"));
    }

    #[test]
    fn out_of_range_display_names_both_sides() {
        let e = EnvError::ActionOutOfRange {
            action: ActionId(9),
            n: 3,
        };
        let text = e.to_string();
        assert!(text.contains('9'));
        assert!(text.contains('3'));
    }
}
