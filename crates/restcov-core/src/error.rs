//! Error types for the executor synchronization channel.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from the synchronization channel between the environment and
/// the executor process.
///
/// Malformed payloads are fatal: the protocol cannot be established or
/// continued without a valid integer, so the error propagates and the
/// channel performs no retries.
#[derive(Debug)]
pub enum ChannelError {
    /// An I/O operation on a conduit failed.
    Io(io::Error),
    /// A conduit could not be created.
    Create {
        /// Path of the conduit that could not be created.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
    /// A received payload did not parse as an ASCII decimal integer.
    MalformedPayload {
        /// The raw payload text as received.
        payload: String,
    },
    /// The peer endpoint is gone (channel closed before a reply).
    Disconnected,
    /// Channel configuration failed validation.
    InvalidConfig {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "conduit i/o failed: {e}"),
            Self::Create { path, source } => {
                write!(f, "could not create conduit {}: {source}", path.display())
            }
            Self::MalformedPayload { payload } => {
                write!(f, "payload {payload:?} is not a decimal integer")
            }
            Self::Disconnected => write!(f, "executor endpoint disconnected"),
            Self::InvalidConfig { reason } => {
                write!(f, "invalid channel config: {reason}")
            }
        }
    }
}

impl Error for ChannelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Create { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ChannelError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_payload() {
        let e = ChannelError::MalformedPayload {
            payload: "abc".to_string(),
        };
        assert!(e.to_string().contains("\"abc\""));
    }

    #[test]
    fn io_error_converts_and_chains_source() {
        let e: ChannelError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(e.source().is_some());
        assert!(e.to_string().contains("gone"));
    }
}
