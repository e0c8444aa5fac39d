//! The transport seam between the environment and the executor.

use crate::error::ChannelError;
use crate::id::{ActionId, OutcomeCode};

/// Blocking, ordered message exchange with the executor process.
///
/// The protocol is a strict ping-pong: one handshake receive at
/// construction time, then exactly one [`send_action`] followed by one
/// [`recv_outcome`] per step. Implementations block indefinitely on a
/// silent peer; there is no timeout or cancellation. Exactly one
/// exchange may be in flight at a time.
///
/// The production implementation is `FifoLink` (named pipes) in
/// `restcov-channel`; tests substitute scripted or in-process links.
///
/// [`send_action`]: ExecutorLink::send_action
/// [`recv_outcome`]: ExecutorLink::recv_outcome
pub trait ExecutorLink {
    /// Block until the executor announces its action-space size.
    ///
    /// Called exactly once, before any step. A non-integer payload is
    /// fatal ([`ChannelError::MalformedPayload`]); the environment
    /// cannot proceed without `N`.
    fn recv_action_count(&mut self) -> Result<u32, ChannelError>;

    /// Send the chosen action, encoded as a fixed-width decimal.
    ///
    /// Blocks until the peer is ready to receive. The message boundary
    /// is the conduit close; no terminator is written.
    fn send_action(&mut self, action: ActionId) -> Result<(), ChannelError>;

    /// Block until the executor reports the outcome of the last action.
    fn recv_outcome(&mut self) -> Result<OutcomeCode, ChannelError>;
}
