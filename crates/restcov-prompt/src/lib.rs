//! Prompt templating and response parsing for parameter value
//! generation.
//!
//! The executor's request builder needs plausible values for HTTP
//! parameters; a language model produces them. This crate is the
//! stateless text layer on both sides of that call: build the prompt
//! from a parameter's schema facts, and parse the model's line-
//! oriented reply back into clean values. No model client lives here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod parse;
pub mod template;
pub mod values;

pub use parse::parse_response;
pub use template::{ParameterQuery, SYSTEM_PROMPT, VALUES_PER_PARAMETER};
pub use values::ValueTable;
