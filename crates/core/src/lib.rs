//! Ask Core Library
//!
//! This crate provides the foundational utilities for the `ask` CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Invocation configuration

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::AskConfig;
pub use error::{AppError, AppResult};
