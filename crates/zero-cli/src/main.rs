//! Zero CLI - development tooling for TypeScript services
//!
//! Main entry point for the `config-zero` binary.

use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use console::style;
use tracing::error;
use zero_core::ScriptOutcome;

use zero_cli::cli::Cli;
use zero_cli::error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    SpawnFailed = 127,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(&cli);
    init_colors(cli.color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    match runtime.block_on(run(cli)) {
        Ok(outcome) => outcome_exit_code(&outcome),
        Err(e) => {
            error!(code = e.code(), "{e}");
            eprintln!("{}", style(format!("Error: {e}")).red().for_stderr());
            if let Some(hint) = e.hint() {
                eprintln!("{}", style(format!("Hint: {hint}")).cyan().for_stderr());
            }
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<ScriptOutcome, CliError> {
    cli.execute().await
}

/// Forward the child's exit status as our own.
fn outcome_exit_code(outcome: &ScriptOutcome) -> ExitCode {
    ExitCode::from(outcome_exit_status(outcome))
}

/// Exit status for an outcome. Child codes are clamped to `1..=255` so a
/// failure never maps to 0.
fn outcome_exit_status(outcome: &ScriptOutcome) -> u8 {
    match outcome {
        ScriptOutcome::Success => Exit::Success as u8,
        ScriptOutcome::Failed { code: Some(code) } => (*code).clamp(1, 255) as u8,
        ScriptOutcome::Failed { code: None } => Exit::GeneralError as u8,
        ScriptOutcome::SpawnError { .. } => Exit::SpawnFailed as u8,
    }
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .init();
}

fn init_colors(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        ColorChoice::Auto => {}
    }
}
