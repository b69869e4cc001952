//! Lint command implementation.

use std::path::PathBuf;

use clap::Parser;
use zero_core::ScriptOutcome;

use super::{builder, execute_script};
use crate::cli::CommandContext;
use crate::error::CliError;

/// Bundled eslint configuration file name.
const ESLINT_CONFIG: &str = "eslint.config.mjs";

/// Lint code
#[derive(Debug, Parser)]
pub struct LintCommand {
    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl LintCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<ScriptOutcome, CliError> {
        let config = match &self.config {
            Some(path) => path.clone(),
            None => ctx.zero.config.bundled_config_path(ESLINT_CONFIG)?,
        };

        let script = builder(ctx).lint(&config.to_string_lossy());
        execute_script(ctx, &script, None).await
    }
}
