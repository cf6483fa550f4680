//! Invocation configuration for the `ask` CLI.
//!
//! One `AskConfig` value is assembled per invocation from defaults,
//! environment variables, and command-line flags (in that precedence
//! order), then handed to the dispatcher. Nothing is read from disk and
//! nothing outlives the invocation.

use crate::error::{AppError, AppResult};

/// VM queried when `--vm` is not given.
pub const DEFAULT_VM: &str = "primary";

/// Model requested when `--model` is not given.
pub const DEFAULT_MODEL: &str = "deepseek-r1:8b";

/// Configuration for a single `ask` invocation.
#[derive(Debug, Clone)]
pub struct AskConfig {
    /// Name of the VM hosting the model server
    pub vm: String,

    /// Model identifier sent with the generation request
    pub model: String,

    /// Voice for spoken output; `None` means the synthesizer default
    pub voice: Option<String>,

    /// The prompt text. Required; there is no default.
    pub prompt: String,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            vm: DEFAULT_VM.to_string(),
            model: DEFAULT_MODEL.to_string(),
            voice: None,
            prompt: String::new(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AskConfig {
    /// Apply CLI overrides to the configuration.
    ///
    /// Flags win over environment variables, which win over defaults;
    /// clap resolves the env layer, so every `Some` here is authoritative.
    pub fn with_overrides(
        mut self,
        vm: Option<String>,
        model: Option<String>,
        voice: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(vm) = vm {
            self.vm = vm;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(voice) = voice {
            self.voice = Some(voice);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Set the prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Validate the configuration before any work is done.
    ///
    /// A blank prompt is a usage error; the dispatcher must reject it
    /// before touching the VM manager or the network.
    pub fn validate(&self) -> AppResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(AppError::Usage("no prompt provided".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AskConfig::default();
        assert_eq!(config.vm, "primary");
        assert_eq!(config.model, "deepseek-r1:8b");
        assert!(config.voice.is_none());
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AskConfig::default().with_overrides(
            Some("sandbox".to_string()),
            Some("llama3.2".to_string()),
            Some("Kyoko".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(config.vm, "sandbox");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.voice.as_deref(), Some("Kyoko"));
        assert!(config.verbose);
        assert_eq!(config.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_validate_rejects_missing_prompt() {
        let config = AskConfig::default();
        assert!(matches!(config.validate(), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_validate_rejects_blank_prompt() {
        let config = AskConfig::default().with_prompt("   \n");
        assert!(matches!(config.validate(), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_validate_accepts_prompt() {
        let config = AskConfig::default().with_prompt("why is the sky blue");
        assert!(config.validate().is_ok());
    }
}
