//! Model server integration for the `ask` CLI.
//!
//! This crate holds the generation client abstraction, the Ollama
//! provider that implements it, and the sanitizer that removes
//! reasoning markup from model output.
//!
//! # Example
//! ```no_run
//! use ask_llm::{GenerateRequest, ModelClient, OllamaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::with_base_url("http://localhost:11434");
//! let request = GenerateRequest::new("deepseek-r1:8b", "Hello, world!");
//! let text = client.generate(&request).await?;
//! println!("{}", ask_llm::sanitize::strip_reasoning(&text));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod providers;
pub mod sanitize;

// Re-export main types
pub use client::{GenerateRequest, ModelClient};
pub use providers::OllamaClient;
