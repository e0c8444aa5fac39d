//! Per-episode exploration counters.

/// Counters accumulated across the steps of one episode.
///
/// Reset together with the observation vector. Consumers (the training
/// driver's report, progress printing) read them from the environment
/// between episodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeMetrics {
    /// Steps taken since the last reset.
    pub steps: u64,
    /// Steps whose outcome was a 2xx success.
    pub successes: u64,
    /// Steps whose outcome was anything else.
    pub failures: u64,
    /// Operations confirmed for the first time this episode.
    pub first_coverage_events: u64,
    /// Operations currently covered (counter > 0).
    pub covered: u32,
    /// Sum of rewards since the last reset.
    pub cumulative_reward: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = EpisodeMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.successes, 0);
        assert_eq!(m.failures, 0);
        assert_eq!(m.first_coverage_events, 0);
        assert_eq!(m.covered, 0);
        assert_eq!(m.cumulative_reward, 0.0);
    }
}
