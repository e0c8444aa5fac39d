//! Wire encoding for the executor protocol.
//!
//! Messages are short ASCII texts exchanged over close-delimited
//! conduits. Actions travel as fixed-width zero-padded decimals; the
//! handshake and outcome payloads are plain decimals with surrounding
//! whitespace tolerated.

use crate::error::ChannelError;
use crate::id::{ActionId, OutcomeCode};

/// Width of the encoded action message, in ASCII digits.
pub const WIRE_ACTION_WIDTH: usize = 4;

/// Largest action-space size the fixed-width encoding handles without
/// pushing encoded values toward the 4-digit ceiling.
///
/// Larger spaces still encode (the formatter widens past 4 digits for
/// indices above 9999), but the peer may not expect the wider message.
/// Construction warns instead of failing; see `CoverageEnv::connect`.
pub const WIRE_ACTION_SAFE_LIMIT: u32 = 999;

/// Encode an action as a zero-padded decimal of [`WIRE_ACTION_WIDTH`]
/// digits.
pub fn encode_action(action: ActionId) -> String {
    format!("{:0width$}", action.0, width = WIRE_ACTION_WIDTH)
}

/// Decode an encoded action message back to an [`ActionId`].
///
/// Used by executor doubles in tests; the production executor does its
/// own decoding on the far side of the conduit.
pub fn decode_action(payload: &str) -> Result<ActionId, ChannelError> {
    parse_decimal(payload).map(ActionId)
}

/// Parse the handshake payload: the action-space size `N`.
pub fn parse_count(payload: &str) -> Result<u32, ChannelError> {
    parse_decimal(payload)
}

/// Parse an outcome payload: the HTTP-style status of one invocation.
pub fn parse_outcome(payload: &str) -> Result<OutcomeCode, ChannelError> {
    parse_decimal(payload).map(OutcomeCode)
}

fn parse_decimal<T: std::str::FromStr>(payload: &str) -> Result<T, ChannelError> {
    payload
        .trim()
        .parse()
        .map_err(|_| ChannelError::MalformedPayload {
            payload: payload.to_string(),
        })
}
