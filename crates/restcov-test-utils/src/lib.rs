//! Test doubles for the executor link.
//!
//! Provides two substitutes for the production named-pipe link:
//! [`ScriptedLink`], a fully deterministic in-memory script of
//! outcomes, and [`PairLink`], an in-process channel pair whose far
//! end is driven by a real thread, exercising the blocking
//! send-then-receive protocol without touching the filesystem.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use crossbeam_channel::{unbounded, Receiver, Sender};

use restcov_core::{wire, ActionId, ChannelError, ExecutorLink, OutcomeCode};

/// Scripted executor link: replies with a queued outcome per step.
///
/// Records every action sent, in order, for assertions. When the
/// script runs dry the link falls back to `default_outcome` if one is
/// set, otherwise reports [`ChannelError::Disconnected`] — the same
/// thing a vanished peer produces.
#[derive(Debug)]
pub struct ScriptedLink {
    action_count: u32,
    outcomes: VecDeque<OutcomeCode>,
    default_outcome: Option<OutcomeCode>,
    /// Every action sent over this link, in send order.
    pub sent: Vec<ActionId>,
}

impl ScriptedLink {
    /// A link whose handshake announces `action_count` operations.
    pub fn new(action_count: u32) -> Self {
        Self {
            action_count,
            outcomes: VecDeque::new(),
            default_outcome: None,
            sent: Vec::new(),
        }
    }

    /// Queue outcomes to serve, one per subsequent step.
    pub fn with_outcomes<I>(mut self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.outcomes.extend(outcomes.into_iter().map(OutcomeCode));
        self
    }

    /// Outcome served once the queue is exhausted.
    pub fn with_default_outcome(mut self, code: i32) -> Self {
        self.default_outcome = Some(OutcomeCode(code));
        self
    }

    /// Append one outcome to the script.
    pub fn push_outcome(&mut self, code: i32) {
        self.outcomes.push_back(OutcomeCode(code));
    }
}

impl ExecutorLink for ScriptedLink {
    fn recv_action_count(&mut self) -> Result<u32, ChannelError> {
        Ok(self.action_count)
    }

    fn send_action(&mut self, action: ActionId) -> Result<(), ChannelError> {
        self.sent.push(action);
        Ok(())
    }

    fn recv_outcome(&mut self) -> Result<OutcomeCode, ChannelError> {
        match self.outcomes.pop_front().or(self.default_outcome) {
            Some(code) => Ok(code),
            None => Err(ChannelError::Disconnected),
        }
    }
}

/// Environment side of an in-process link pair.
///
/// Messages travel as the same close-delimited ASCII payloads the
/// named pipes carry, so wire parsing is exercised end to end.
pub struct PairLink {
    tx_actions: Sender<String>,
    rx_messages: Receiver<String>,
}

/// Executor side of an in-process link pair; drive it from a thread.
pub struct ExecutorEndpoint {
    rx_actions: Receiver<String>,
    tx_messages: Sender<String>,
}

/// Create a connected [`PairLink`] / [`ExecutorEndpoint`] pair.
pub fn link_pair() -> (PairLink, ExecutorEndpoint) {
    let (tx_actions, rx_actions) = unbounded();
    let (tx_messages, rx_messages) = unbounded();
    (
        PairLink {
            tx_actions,
            rx_messages,
        },
        ExecutorEndpoint {
            rx_actions,
            tx_messages,
        },
    )
}

impl ExecutorLink for PairLink {
    fn recv_action_count(&mut self) -> Result<u32, ChannelError> {
        let payload = self
            .rx_messages
            .recv()
            .map_err(|_| ChannelError::Disconnected)?;
        wire::parse_count(&payload)
    }

    fn send_action(&mut self, action: ActionId) -> Result<(), ChannelError> {
        self.tx_actions
            .send(wire::encode_action(action))
            .map_err(|_| ChannelError::Disconnected)
    }

    fn recv_outcome(&mut self) -> Result<OutcomeCode, ChannelError> {
        let payload = self
            .rx_messages
            .recv()
            .map_err(|_| ChannelError::Disconnected)?;
        wire::parse_outcome(&payload)
    }
}

impl ExecutorEndpoint {
    /// Announce the action-space size (the handshake).
    pub fn announce_action_count(&self, n: u32) {
        self.tx_messages
            .send(format!("{n}\n"))
            .expect("environment side dropped");
    }

    /// Block until the environment sends an action; returns the raw
    /// wire payload.
    pub fn recv_action_payload(&self) -> Option<String> {
        self.rx_actions.recv().ok()
    }

    /// Report the outcome of the last received action.
    pub fn send_outcome(&self, code: i32) {
        self.tx_messages
            .send(format!("{code}\n"))
            .expect("environment side dropped");
    }

    /// Send an arbitrary raw payload; for malformed-message tests.
    pub fn send_raw(&self, payload: &str) {
        self.tx_messages
            .send(payload.to_string())
            .expect("environment side dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_link_serves_outcomes_in_order() {
        let mut link = ScriptedLink::new(4).with_outcomes([200, 500]);
        assert_eq!(link.recv_action_count().unwrap(), 4);
        link.send_action(ActionId(1)).unwrap();
        assert_eq!(link.recv_outcome().unwrap(), OutcomeCode(200));
        link.send_action(ActionId(2)).unwrap();
        assert_eq!(link.recv_outcome().unwrap(), OutcomeCode(500));
        assert_eq!(link.sent, vec![ActionId(1), ActionId(2)]);
    }

    #[test]
    fn scripted_link_exhaustion_reads_as_disconnect() {
        let mut link = ScriptedLink::new(1);
        assert!(matches!(
            link.recv_outcome(),
            Err(ChannelError::Disconnected)
        ));
    }

    #[test]
    fn scripted_link_default_outcome_never_runs_dry() {
        let mut link = ScriptedLink::new(1).with_default_outcome(200);
        for _ in 0..50 {
            assert_eq!(link.recv_outcome().unwrap(), OutcomeCode(200));
        }
    }

    #[test]
    fn pair_link_round_trips_wire_payloads() {
        let (mut link, executor) = link_pair();
        executor.announce_action_count(7);
        assert_eq!(link.recv_action_count().unwrap(), 7);

        link.send_action(ActionId(5)).unwrap();
        assert_eq!(executor.recv_action_payload().unwrap(), "0005");
        executor.send_outcome(204);
        assert_eq!(link.recv_outcome().unwrap(), OutcomeCode(204));
    }

    #[test]
    fn dropped_executor_reads_as_disconnect() {
        let (mut link, executor) = link_pair();
        drop(executor);
        assert!(matches!(
            link.recv_action_count(),
            Err(ChannelError::Disconnected)
        ));
    }
}
