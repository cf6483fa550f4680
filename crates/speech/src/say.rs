//! Invokes the host `say` command.

use ask_core::{AppError, AppResult};
use tokio::process::Command;

/// Name of the text-to-speech binary.
const SAY_BIN: &str = "say";

/// Handle on the host speech synthesizer.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    command: String,
}

impl Synthesizer {
    /// Create a synthesizer handle using the standard `say` binary.
    pub fn new() -> Self {
        Self {
            command: SAY_BIN.to_string(),
        }
    }

    /// Speak `text` aloud, optionally with a named voice.
    ///
    /// Blocks until the synthesizer finishes. No voice argument is
    /// passed when `voice` is `None`, leaving the system default voice
    /// in effect.
    pub async fn speak(&self, text: &str, voice: Option<&str>) -> AppResult<()> {
        let args = build_args(voice, text);
        tracing::debug!("Invoking {} with voice {:?}", self.command, voice);

        let status = Command::new(&self.command)
            .args(&args)
            .status()
            .await
            .map_err(|e| AppError::Speech(format!("Failed to run {}: {}", self.command, e)))?;

        if !status.success() {
            return Err(AppError::Speech(format!(
                "{} exited with status {}",
                self.command, status
            )));
        }

        Ok(())
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the synthesizer argument vector.
///
/// Kept separate from the invocation so the voice contract can be
/// tested without spawning anything.
fn build_args(voice: Option<&str>, text: &str) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(voice) = voice {
        args.push("-v".to_string());
        args.push(voice.to_string());
    }
    args.push(text.to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_with_voice() {
        let args = build_args(Some("Kyoko"), "Hello world");
        assert_eq!(args, vec!["-v", "Kyoko", "Hello world"]);
    }

    #[test]
    fn test_args_without_voice() {
        let args = build_args(None, "Hello world");
        assert_eq!(args, vec!["Hello world"]);
    }

    #[test]
    fn test_text_is_one_argument() {
        // Multi-word answers must reach the synthesizer as a single
        // argument, not be re-split on whitespace.
        let args = build_args(Some("Kyoko"), "two words");
        assert_eq!(args.len(), 3);
        assert_eq!(args[2], "two words");
    }

    #[tokio::test]
    async fn test_speak_missing_synthesizer() {
        let synth = Synthesizer {
            command: "definitely-not-a-real-tts-command".to_string(),
        };
        let err = synth.speak("hello", None).await.unwrap_err();
        assert!(matches!(err, AppError::Speech(_)));
    }
}
