//! Conduit path configuration and validation.

use std::path::{Path, PathBuf};

use restcov_core::ChannelError;

/// Default file name of the environment → executor conduit.
pub const DEFAULT_TO_EXECUTOR: &str = "to-executor";

/// Default file name of the executor → environment conduit.
pub const DEFAULT_FROM_EXECUTOR: &str = "from-executor";

/// Paths of the two unidirectional conduits.
///
/// Both processes must agree on these paths out of band; the executor
/// opens the same two pipes from its side with the directions swapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Pipe the environment writes chosen actions to.
    pub to_executor: PathBuf,
    /// Pipe the executor writes the handshake and outcomes to.
    pub from_executor: PathBuf,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            to_executor: PathBuf::from(DEFAULT_TO_EXECUTOR),
            from_executor: PathBuf::from(DEFAULT_FROM_EXECUTOR),
        }
    }
}

impl ChannelConfig {
    /// Both conduits under `dir`, with the default file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            to_executor: dir.join(DEFAULT_TO_EXECUTOR),
            from_executor: dir.join(DEFAULT_FROM_EXECUTOR),
        }
    }

    /// Check structural invariants: non-empty, distinct paths.
    ///
    /// A shared path would collapse the two directions into one pipe
    /// and deadlock the first exchange.
    pub fn validate(&self) -> Result<(), ChannelError> {
        if self.to_executor.as_os_str().is_empty() || self.from_executor.as_os_str().is_empty() {
            return Err(ChannelError::InvalidConfig {
                reason: "conduit path is empty".to_string(),
            });
        }
        if self.to_executor == self.from_executor {
            return Err(ChannelError::InvalidConfig {
                reason: format!(
                    "both conduits share the path {}",
                    self.to_executor.display()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ChannelConfig::default().validate().is_ok());
    }

    #[test]
    fn in_dir_prefixes_both_paths() {
        let config = ChannelConfig::in_dir("/tmp/run");
        assert_eq!(config.to_executor, Path::new("/tmp/run/to-executor"));
        assert_eq!(config.from_executor, Path::new("/tmp/run/from-executor"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn shared_path_is_rejected() {
        let config = ChannelConfig {
            to_executor: PathBuf::from("pipe"),
            from_executor: PathBuf::from("pipe"),
        };
        assert!(matches!(
            config.validate(),
            Err(ChannelError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn empty_path_is_rejected() {
        let config = ChannelConfig {
            to_executor: PathBuf::new(),
            from_executor: PathBuf::from("pipe"),
        };
        assert!(matches!(
            config.validate(),
            Err(ChannelError::InvalidConfig { .. })
        ));
    }
}
