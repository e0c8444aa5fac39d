//! Strongly-typed identifiers for actions and invocation outcomes.

use std::fmt;

/// Identifies one invocable API operation.
///
/// Actions are indices into the executor's operation table, assigned
/// by the executor and valid in `[0, N)` where `N` is the action-space
/// size learned during the handshake. The index is fixed for the
/// lifetime of the executor process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub u32);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ActionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// HTTP-style status code reported by the executor for one invocation.
///
/// Any integer is accepted; no enumeration of codes is validated.
/// The only distinction the framework draws is success (`2xx`) versus
/// everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutcomeCode(pub i32);

impl OutcomeCode {
    /// Whether this outcome counts as a confirmed success (`2xx`).
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for OutcomeCode {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx_half_open() {
        assert!(!OutcomeCode(199).is_success());
        assert!(OutcomeCode(200).is_success());
        assert!(OutcomeCode(204).is_success());
        assert!(OutcomeCode(299).is_success());
        assert!(!OutcomeCode(300).is_success());
    }

    #[test]
    fn non_http_codes_are_accepted_and_unsuccessful() {
        assert!(!OutcomeCode(0).is_success());
        assert!(!OutcomeCode(-1).is_success());
        assert!(!OutcomeCode(1000).is_success());
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(ActionId(42).to_string(), "42");
        assert_eq!(OutcomeCode(404).to_string(), "404");
    }
}
