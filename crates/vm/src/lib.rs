//! VM manager integration for the `ask` CLI.
//!
//! Resolves a named VM to the IPv4 address its model server listens on.
//! The address is recomputed on every invocation; nothing is cached.

pub mod manager;

pub use manager::VmManager;
