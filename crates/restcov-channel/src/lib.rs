//! Synchronization channel between the environment and the executor.
//!
//! Two unidirectional named pipes connect the environment process to
//! the external test-executor process: one carries chosen actions, the
//! other carries the handshake and per-step outcome codes. Every
//! message is close-delimited — the writer opens the pipe, writes the
//! payload, and closes it; the reader reads to end-of-file.
//!
//! All operations block indefinitely. A hung or crashed executor
//! deadlocks the environment with no recovery path; this is a
//! documented limitation of the protocol, not a bug.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod fifo;

pub use config::ChannelConfig;
pub use fifo::FifoLink;
