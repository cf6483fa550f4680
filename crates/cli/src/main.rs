//! ask CLI
//!
//! Sends one prompt to a model server running inside a VM, prints the
//! cleaned answer, and speaks it aloud.

mod ask;

use ask_core::{logging, AppError, AskConfig};
use ask_llm::providers::OLLAMA_PORT;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

/// Ask a VM-hosted model a question and hear the answer
#[derive(Parser, Debug)]
#[command(name = "ask")]
#[command(about = "Ask a VM-hosted model a question and hear the answer", long_about = None)]
#[command(version)]
struct Cli {
    /// VM hosting the model server
    #[arg(long, env = "ASK_VM")]
    vm: Option<String>,

    /// Model identifier
    #[arg(short, long, env = "ASK_MODEL")]
    model: Option<String>,

    /// Voice for spoken output (synthesizer default when unset)
    #[arg(long, env = "ASK_VOICE")]
    voice: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    /// The prompt; every non-flag token is part of it
    prompt: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = AskConfig::default()
        .with_overrides(
            cli.vm,
            cli.model,
            cli.voice,
            cli.log_level,
            cli.verbose,
            cli.no_color,
        )
        .with_prompt(cli.prompt.join(" "));

    if let Err(e) = logging::init(config.log_level.as_deref(), config.no_color) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("ask starting");
    tracing::debug!("VM: {}", config.vm);
    tracing::debug!("Model: {}", config.model);

    match ask::run(&config).await {
        Ok(()) => {
            tracing::info!("ask completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("ask failed: {}", e);
            print_diagnostic(&config, &e);
            ExitCode::FAILURE
        }
    }
}

/// Print a human-readable diagnostic for a failed invocation.
///
/// Usage problems get the usage text; everything on the path to the
/// model gets a short checklist of the usual suspects.
fn print_diagnostic(config: &AskConfig, err: &AppError) {
    match err {
        AppError::Usage(msg) => {
            println!("{}", msg);
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
        }
        AppError::VmResolution(_) | AppError::Request(_) | AppError::EmptyResponse => {
            println!("{}", err);
            println!();
            println!("Check that:");
            println!("  - the VM '{}' is running (multipass list)", config.vm);
            println!(
                "  - the model server inside it is reachable on port {}",
                OLLAMA_PORT
            );
            println!("  - the model is present (ollama pull {})", config.model);
        }
        other => println!("{}", other),
    }
}
