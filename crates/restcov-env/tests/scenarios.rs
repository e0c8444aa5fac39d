//! Episode-level scenarios over a scripted executor.

use proptest::prelude::*;

use restcov_core::ActionId;
use restcov_env::{CoverageEnv, EnvConfig, OBS_MAX};
use restcov_test_utils::ScriptedLink;

fn connect(link: ScriptedLink) -> CoverageEnv<ScriptedLink> {
    CoverageEnv::connect(link, EnvConfig::default()).unwrap()
}

#[test]
fn full_coverage_in_order() {
    // Three operations, invoked 0, 1, 2, each succeeding: three
    // coverage bonuses, termination exactly on the last.
    let mut env = connect(ScriptedLink::new(3).with_outcomes([200, 200, 200]));
    env.reset(None);

    let mut rewards = Vec::new();
    let mut terminated = Vec::new();
    for a in 0..3 {
        let result = env.step(ActionId(a)).unwrap();
        rewards.push(result.reward);
        terminated.push(result.terminated);
        assert!(!result.truncated);
    }

    assert_eq!(rewards, vec![1000.0, 1000.0, 1000.0]);
    assert_eq!(terminated, vec![false, false, true]);
    assert_eq!(env.observation(), &[1, 1, 1]);
}

#[test]
fn stuck_exploitation_truncates_on_the_budget() {
    // Two operations; the agent hammers operation 0 with successes.
    // Bonus once, then penalties; the 21st success hits the saturated
    // counter and truncates. Operation 1 is never covered, so the
    // episode never terminates.
    let budget = u64::from(OBS_MAX);
    let mut env = connect(
        ScriptedLink::new(2).with_default_outcome(200),
    );
    env.reset(None);

    for step in 1..=budget + 1 {
        let result = env.step(ActionId(0)).unwrap();
        assert!(!result.terminated, "step {step}");
        if step == 1 {
            assert_eq!(result.reward, 1000.0);
            assert!(!result.truncated);
        } else if step <= budget {
            assert_eq!(result.reward, -100.0, "step {step}");
            assert!(!result.truncated, "step {step}");
        } else {
            assert!(result.truncated, "saturated step must truncate");
            assert_eq!(result.observation[0], OBS_MAX);
        }
    }
}

#[test]
fn failure_before_success_on_a_single_operation() {
    let mut env = connect(ScriptedLink::new(1).with_outcomes([500, 200]));
    env.reset(None);

    let result = env.step(ActionId(0)).unwrap();
    assert_eq!(result.reward, -1.0);
    assert!(!result.terminated);

    let result = env.step(ActionId(0)).unwrap();
    assert_eq!(result.reward, 1000.0);
    assert!(result.terminated);
}

#[test]
fn episodes_are_independent_after_reset() {
    let mut env = connect(ScriptedLink::new(2).with_default_outcome(200));
    env.reset(None);
    env.step(ActionId(0)).unwrap();
    env.step(ActionId(1)).unwrap();
    assert_eq!(env.observation(), &[1, 1]);

    let (obs, _) = env.reset(None);
    assert_eq!(obs, &[0, 0]);

    // Coverage bonuses pay out again in the fresh episode.
    let result = env.step(ActionId(0)).unwrap();
    assert_eq!(result.reward, 1000.0);
}

proptest! {
    /// Counters never decrease and never exceed the ceiling, whatever
    /// the executor reports.
    #[test]
    fn counters_are_monotone_and_bounded(
        outcomes in proptest::collection::vec(0i32..700, 1..200),
        actions in proptest::collection::vec(0u32..4, 1..200),
    ) {
        let steps = outcomes.len().min(actions.len());
        let link = ScriptedLink::new(4).with_outcomes(outcomes.iter().copied().take(steps));
        let mut env = connect(link);
        env.reset(None);

        let mut previous = env.observation().to_vec();
        for i in 0..steps {
            let action = ActionId(actions[i]);
            let result = env.step(action).unwrap();
            for (j, (&before, &after)) in
                previous.iter().zip(result.observation.iter()).enumerate()
            {
                prop_assert!(after >= before, "counter {j} decreased");
                prop_assert!(after <= OBS_MAX, "counter {j} exceeded the ceiling");
            }
            previous = result.observation.to_vec();
        }
    }
}
