//! Console output for script runs.

use console::style;
use serde::Serialize;
use zero_core::ScriptOutcome;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl OutputConfig {
    pub fn from_context(ctx: &CommandContext) -> Self {
        Self {
            format: ctx.format,
            quiet: ctx.quiet,
        }
    }
}

/// Machine-readable record of a script run.
#[derive(Debug, Serialize)]
pub struct ScriptReport<'a> {
    pub command: &'a str,
    #[serde(flatten)]
    pub outcome: Option<&'a ScriptOutcome>,
}

/// Main output handler
pub struct Output {
    config: OutputConfig,
}

impl Output {
    pub fn new(ctx: &CommandContext) -> Self {
        Self {
            config: OutputConfig::from_context(ctx),
        }
    }

    pub fn with_config(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the pre-run echo of a command, if any should be shown.
    pub fn render_echo(&self, heading: &str, command: &str) -> Option<String> {
        if self.config.quiet || self.config.format == OutputFormat::Json {
            return None;
        }
        Some(style(format!("{heading}\n {command}")).green().to_string())
    }

    /// Echo a command before it runs
    pub fn command_echo(&self, heading: &str, command: &str) {
        if let Some(line) = self.render_echo(heading, command) {
            println!("{line}");
        }
    }

    /// Print a warning on stderr (respects quiet mode)
    pub fn warning(&self, msg: &str) {
        if !self.config.quiet {
            eprintln!("{}", style(format!("Warning: {msg}")).yellow().for_stderr());
        }
    }

    /// Print a command that was not run
    pub fn dry_run(&self, command: &str) -> Result<(), CliError> {
        match self.config.format {
            OutputFormat::Json => self.print_json(&ScriptReport {
                command,
                outcome: None,
            }),
            OutputFormat::Text => {
                println!("{command}");
                Ok(())
            }
        }
    }

    /// Report how a script run ended
    pub fn outcome(&self, command: &str, outcome: &ScriptOutcome) -> Result<(), CliError> {
        if self.config.format == OutputFormat::Json {
            return self.print_json(&ScriptReport {
                command,
                outcome: Some(outcome),
            });
        }

        let message = outcome.message(command);
        if outcome.is_success() {
            if !self.config.quiet {
                println!("{}", style(message).green());
            }
        } else {
            eprintln!("{}", style(message).red().for_stderr());
        }
        Ok(())
    }

    /// Print as JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<(), CliError> {
        let json = serde_json::to_string(value)?;
        println!("{json}");
        Ok(())
    }
}
