//! Error types for the `ask` CLI.
//!
//! A single unified enum covers every failure the pipeline can hit.
//! Each variant is terminal: the process prints a diagnostic and exits
//! with status 1. Nothing is retried.

use thiserror::Error;

/// Unified error type for the `ask` CLI.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// Errors are propagated, never panicked on.
#[derive(Error, Debug)]
pub enum AppError {
    /// The invocation was malformed (no prompt supplied)
    #[error("Usage error: {0}")]
    Usage(String),

    /// The VM manager could not produce an address for the named VM
    #[error("VM resolution error: {0}")]
    VmResolution(String),

    /// Transport failure contacting the model server
    #[error("Request error: {0}")]
    Request(String),

    /// The model returned no usable text after sanitization
    #[error("Model returned no usable text")]
    EmptyResponse,

    /// The speech synthesizer could not be invoked
    #[error("Speech error: {0}")]
    Speech(String),

    /// Startup/bootstrap errors (logging, filters)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
