//! Named-pipe realization of [`ExecutorLink`].

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use nix::errno::Errno;
use nix::sys::stat::Mode;
use nix::unistd::mkfifo;

use restcov_core::{wire, ActionId, ChannelError, ExecutorLink, OutcomeCode};

use crate::config::ChannelConfig;

/// Blocking executor link over two named pipes.
///
/// Created with [`FifoLink::new`], which makes both pipes if they do
/// not already exist (pre-existing pipes are not an error — reruns
/// reuse them). One message per open/close cycle:
///
/// - receive: open the executor → environment pipe for reading (blocks
///   until the executor opens its write end), read to end-of-file.
/// - send: open the environment → executor pipe for writing (blocks
///   until the executor opens its read end), write, close.
///
/// The executor sees each sent action exactly once and in order, and
/// the link consumes exactly one outcome per action sent.
#[derive(Debug)]
pub struct FifoLink {
    config: ChannelConfig,
}

impl FifoLink {
    /// Validate the config and create both pipes if missing.
    pub fn new(config: ChannelConfig) -> Result<Self, ChannelError> {
        config.validate()?;
        create_fifo(&config.to_executor)?;
        create_fifo(&config.from_executor)?;
        Ok(Self { config })
    }

    /// The conduit paths this link operates on.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    fn recv_text(&self) -> Result<String, ChannelError> {
        // Open blocks until the executor opens its write end; EOF marks
        // the end of the message.
        let mut pipe = File::open(&self.config.from_executor)?;
        let mut payload = String::new();
        pipe.read_to_string(&mut payload)?;
        Ok(payload)
    }

    fn send_text(&self, payload: &str) -> Result<(), ChannelError> {
        // Open blocks until the executor opens its read end; the close
        // on drop is the message terminator.
        let mut pipe = OpenOptions::new()
            .write(true)
            .open(&self.config.to_executor)?;
        pipe.write_all(payload.as_bytes())?;
        pipe.flush()?;
        Ok(())
    }
}

impl ExecutorLink for FifoLink {
    fn recv_action_count(&mut self) -> Result<u32, ChannelError> {
        wire::parse_count(&self.recv_text()?)
    }

    fn send_action(&mut self, action: ActionId) -> Result<(), ChannelError> {
        self.send_text(&wire::encode_action(action))
    }

    fn recv_outcome(&mut self) -> Result<OutcomeCode, ChannelError> {
        wire::parse_outcome(&self.recv_text()?)
    }
}

/// `mkfifo(2)`, idempotent: an existing pipe at `path` is fine.
fn create_fifo(path: &Path) -> Result<(), ChannelError> {
    match mkfifo(path, Mode::from_bits_truncate(0o644)) {
        Ok(()) | Err(Errno::EEXIST) => Ok(()),
        Err(errno) => Err(ChannelError::Create {
            path: path.to_path_buf(),
            source: errno.into(),
        }),
    }
}
