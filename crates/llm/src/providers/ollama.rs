//! Ollama provider implementation.
//!
//! Talks to an Ollama server over its generation API:
//! https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::client::{GenerateRequest, ModelClient};
use ask_core::{AppError, AppResult};
use serde::Deserialize;
use std::net::Ipv4Addr;

/// Port the model server listens on inside the VM.
pub const OLLAMA_PORT: u16 = 11434;

/// Response body from the generation API. Only `response` is consumed.
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Ollama generation client.
pub struct OllamaClient {
    /// Base URL for the Ollama API
    base_url: String,

    /// HTTP client. No timeout is configured; the call blocks until
    /// the server answers or the transport gives up.
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client for a server on the given host address, using
    /// the standard Ollama port.
    pub fn for_host(addr: Ipv4Addr) -> Self {
        Self::with_base_url(format!("http://{}:{}", addr, OLLAMA_PORT))
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ModelClient for OllamaClient {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<String> {
        let url = format!("{}/api/generate", self.base_url);
        tracing::info!("Sending generation request to {}", url);
        tracing::debug!("Request: {:?}", request);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Request(format!("Failed to reach model server: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Request(format!(
                "Model server error ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Request(format!("Failed to read response body: {}", e)))?;

        // A malformed body or a missing/null `response` field is not a
        // transport failure; it degrades to the empty answer and gets
        // reported downstream after sanitization.
        let parsed: GenerateResponse = serde_json::from_str(&body).unwrap_or_default();

        tracing::info!("Received generation response");
        Ok(parsed.response.unwrap_or_default())
    }
}
