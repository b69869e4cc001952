//! Format command implementation.

use std::path::PathBuf;

use clap::Parser;
use zero_core::ScriptOutcome;

use super::{builder, execute_script};
use crate::cli::CommandContext;
use crate::error::CliError;

/// Bundled dprint configuration file name.
const DPRINT_CONFIG: &str = "dprint.json";

/// Format code
#[derive(Debug, Parser)]
pub struct FormatCommand {
    /// Dprint command
    #[arg(default_value = "fmt")]
    pub command: String,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl FormatCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<ScriptOutcome, CliError> {
        let config = match &self.config {
            Some(path) => path.clone(),
            None => ctx.zero.config.bundled_config_path(DPRINT_CONFIG)?,
        };

        let script = builder(ctx).format(&self.command, &config.to_string_lossy());
        execute_script(ctx, &script, None).await
    }
}
