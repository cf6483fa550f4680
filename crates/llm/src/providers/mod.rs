//! Generation providers.

pub mod ollama;

pub use ollama::{OllamaClient, OLLAMA_PORT};
