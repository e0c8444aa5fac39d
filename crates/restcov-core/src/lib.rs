//! Core types and traits for the restcov coverage exploration framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the channel, environment, and
//! training crates: action and outcome identifiers, the wire encoding
//! used on the executor protocol, error types, and the [`ExecutorLink`]
//! trait that decouples the environment from the transport.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;
pub mod wire;

pub use error::ChannelError;
pub use id::{ActionId, OutcomeCode};
pub use traits::ExecutorLink;
pub use wire::{WIRE_ACTION_SAFE_LIMIT, WIRE_ACTION_WIDTH};
