//! Action and observation space descriptors.
//!
//! Shape metadata a generic training driver consumes to size its
//! policy inputs and outputs. The environment itself enforces the
//! bounds; these descriptors only describe them.

use restcov_core::ActionId;

/// Discrete action space: choose one of `n` operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrete {
    /// Number of invocable operations.
    pub n: u32,
}

impl Discrete {
    /// Whether `action` falls inside this space.
    pub fn contains(&self, action: ActionId) -> bool {
        action.0 < self.n
    }
}

/// Bounded counter-vector observation space.
///
/// `len` counters, each in `[0, high]`. The environment stores the
/// counters as `u8`; `high` never exceeds `u8::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterVector {
    /// Number of counters, equal to the action-space size.
    pub len: usize,
    /// Inclusive upper bound of each counter.
    pub high: u8,
}

impl CounterVector {
    /// Whether `observation` is a valid member of this space.
    pub fn contains(&self, observation: &[u8]) -> bool {
        observation.len() == self.len && observation.iter().all(|&c| c <= self.high)
    }
}
