//! Dev command implementation.

use clap::Parser;
use zero_core::ScriptOutcome;

use super::{builder, execute_script, RuntimeArgs};
use crate::cli::CommandContext;
use crate::error::CliError;

/// Start development environment
#[derive(Debug, Parser)]
pub struct DevCommand {
    /// Entry file
    #[arg(long, default_value = "src/index.ts")]
    pub entry_file: String,

    #[command(flatten)]
    pub runtime: RuntimeArgs,
}

impl DevCommand {
    /// Render the dev command for this invocation.
    pub fn script(&self, ctx: &CommandContext) -> String {
        builder(ctx).dev(
            &self.entry_file,
            &self.runtime.init_tracer,
            &self.runtime.service_name(ctx),
            &self.runtime.env_file(),
        )
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<ScriptOutcome, CliError> {
        let script = self.script(ctx);
        execute_script(
            ctx,
            &script,
            Some("Starting development environment with command:"),
        )
        .await
    }
}
