//! Rollout length computation.

/// Steps per rollout for an action space of `action_count` operations.
///
/// `multiplier × action_count`, rounded **up** to the next multiple of
/// `minibatch`; exact multiples are left unchanged. The minibatch is
/// the learner's, so every rollout splits into whole minibatches.
pub fn rollout_steps(action_count: u32, multiplier: u32, minibatch: u32) -> u64 {
    let steps = u64::from(multiplier) * u64::from(action_count);
    let remainder = steps % u64::from(minibatch);
    if remainder == 0 {
        steps
    } else {
        steps - remainder + u64::from(minibatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_the_next_minibatch() {
        // 3 operations: 60 raw steps round up to 64.
        assert_eq!(rollout_steps(3, 20, 64), 64);
        // 50 operations: 1000 raw steps round up to 1024.
        assert_eq!(rollout_steps(50, 20, 64), 1024);
    }

    #[test]
    fn exact_multiples_are_unchanged() {
        // 16 operations: 320 = 5 × 64 stays put.
        assert_eq!(rollout_steps(16, 20, 64), 320);
    }

    #[test]
    fn small_spaces_get_at_least_one_minibatch() {
        assert_eq!(rollout_steps(1, 20, 64), 64);
    }
}
