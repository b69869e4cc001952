//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand, ValueHint};
use zero_core::{ScriptOutcome, ZeroConfig, ZeroContext};

use crate::commands::{DevCommand, FormatCommand, LintCommand, StartCommand, TestCommand};
use crate::error::CliError;

/// Zero CLI
///
/// Runs, builds, tests, formats and lints TypeScript services with a shared
/// zero-configuration toolchain.
#[derive(Debug, Parser)]
#[command(
    name = "config-zero",
    version,
    about = "Zero CLI",
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// When to use colors
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "When to use terminal colors"
    )]
    pub color: ColorChoice,

    /// Output format
    #[arg(
        long = "output",
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    /// Print the command instead of running it
    #[arg(long, global = true, env = "ZERO_DRY_RUN")]
    pub dry_run: bool,

    /// Directory to run in (defaults to the current directory)
    #[arg(
        long,
        global = true,
        env = "ZERO_CWD",
        value_hint = ValueHint::DirPath
    )]
    pub cwd: Option<PathBuf>,

    /// Directory holding the bundled dprint and eslint configs
    #[arg(
        long,
        global = true,
        env = "ZERO_CONFIG_DIR",
        hide = true,
        value_hint = ValueHint::DirPath
    )]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start development environment
    Dev(DevCommand),

    /// Build and start local development environment
    Start(StartCommand),

    /// Run tests
    Test(TestCommand),

    /// Format code
    Format(FormatCommand),

    /// Lint code
    Lint(LintCommand),
}

impl Cli {
    /// Build the execution context from global options.
    pub fn context(&self) -> Result<ZeroContext, CliError> {
        let mut config = ZeroConfig::default();
        if let Some(dir) = &self.config_dir {
            config = config.bundled_config_dir(dir);
        }

        Ok(ZeroContext::resolve(self.cwd.as_deref(), config)?)
    }

    /// Execute the selected command
    pub async fn execute(self) -> Result<ScriptOutcome, CliError> {
        let ctx = CommandContext {
            zero: self.context()?,
            format: self.format,
            quiet: self.quiet,
            dry_run: self.dry_run,
        };

        match self.command {
            Command::Dev(cmd) => cmd.execute(&ctx).await,
            Command::Start(cmd) => cmd.execute(&ctx).await,
            Command::Test(cmd) => cmd.execute(&ctx).await,
            Command::Format(cmd) => cmd.execute(&ctx).await,
            Command::Lint(cmd) => cmd.execute(&ctx).await,
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub zero: ZeroContext,
    pub format: OutputFormat,
    pub quiet: bool,
    pub dry_run: bool,
}
