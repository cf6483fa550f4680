//! The prompt dispatcher.
//!
//! Turns one prompt into one printed, spoken answer. The pipeline is
//! strictly linear: validate, resolve the VM address, generate,
//! sanitize, print, speak. Any failure ends the invocation.

use ask_core::{AppError, AppResult, AskConfig};
use ask_llm::{sanitize, GenerateRequest, ModelClient, OllamaClient};
use ask_speech::Synthesizer;
use ask_vm::VmManager;

/// Run the full ask pipeline for one invocation.
pub async fn run(config: &AskConfig) -> AppResult<()> {
    config.validate()?;

    let address = VmManager::new().resolve_address(&config.vm).await?;
    tracing::info!("Resolved VM '{}' to {}", config.vm, address);

    let client = OllamaClient::for_host(address);
    let answer = answer(&client, config).await?;

    println!("{}", answer);

    Synthesizer::new()
        .speak(&answer, config.voice.as_deref())
        .await
}

/// Ask the model and return the cleaned answer text.
async fn answer(client: &dyn ModelClient, config: &AskConfig) -> AppResult<String> {
    let request = GenerateRequest::new(&config.model, &config.prompt);
    let raw = client.generate(&request).await?;

    let cleaned = sanitize::strip_reasoning(&raw);
    if sanitize::is_empty_answer(&cleaned) {
        return Err(AppError::EmptyResponse);
    }

    Ok(cleaned)
}
