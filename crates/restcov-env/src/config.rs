//! Environment configuration and validation.

use restcov_core::WIRE_ACTION_SAFE_LIMIT;

use crate::error::EnvError;

/// Ceiling on each per-operation success counter.
///
/// Counters saturate here instead of overflowing; a further success on
/// a saturated operation truncates the episode. The observation dtype
/// is `u8`, so values up to 255 would fit — 20 is the exploration
/// budget, not a storage limit.
pub const OBS_MAX: u8 = 20;

/// Tunables of the coverage environment.
///
/// The defaults reproduce the reference behavior; both knobs exist so
/// tests can exercise the edges cheaply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    /// Per-operation success-counter ceiling. Default: [`OBS_MAX`].
    pub obs_max: u8,
    /// Action-space size above which construction warns that the
    /// 4-digit wire budget is under pressure. Default: 999.
    pub wire_warn_limit: u32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            obs_max: OBS_MAX,
            wire_warn_limit: WIRE_ACTION_SAFE_LIMIT,
        }
    }
}

impl EnvConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.obs_max == 0 {
            return Err(EnvError::InvalidConfig {
                reason: "obs_max must be at least 1".to_string(),
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
        let config = EnvConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.obs_max, 20);
        assert_eq!(config.wire_warn_limit, 999);
    }

    #[test]
    fn zero_obs_max_is_rejected() {
        let config = EnvConfig {
            obs_max: 0,
            ..EnvConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EnvError::InvalidConfig { .. })
        ));
    }
}
