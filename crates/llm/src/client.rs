//! Generation client abstraction and the request record.

use ask_core::AppResult;
use serde::Serialize;

/// A single generation request.
///
/// This is the exact wire shape the model server expects; it is
/// serialized as the POST body without translation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g., "deepseek-r1:8b")
    pub model: String,

    /// The prompt text to send
    pub prompt: String,

    /// Whether to stream the response. Always false here; the whole
    /// answer is needed before it can be sanitized and spoken.
    pub stream: bool,
}

impl GenerateRequest {
    /// Create a non-streaming generation request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Trait for generation providers.
///
/// Abstracts the model server behind one call so the dispatcher can be
/// exercised with a stub in tests.
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    /// Get the provider name (e.g., "ollama").
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the raw response text.
    ///
    /// Returns the empty string when the server answered but produced
    /// no usable `response` field; transport and HTTP-level failures
    /// are errors.
    async fn generate(&self, request: &GenerateRequest) -> AppResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_non_streaming() {
        let request = GenerateRequest::new("deepseek-r1:8b", "Hello");
        assert_eq!(request.model, "deepseek-r1:8b");
        assert_eq!(request.prompt, "Hello");
        assert!(!request.stream);
    }

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest::new("m", "p");
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"model": "m", "prompt": "p", "stream": false})
        );
    }
}
