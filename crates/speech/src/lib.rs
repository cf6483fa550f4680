//! Speech output for the `ask` CLI.
//!
//! Hands the cleaned answer to the host text-to-speech command.

pub mod say;

pub use say::Synthesizer;
