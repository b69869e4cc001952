//! Start command implementation.

use clap::Parser;
use zero_core::ScriptOutcome;

use super::{builder, execute_script, RuntimeArgs};
use crate::cli::CommandContext;
use crate::error::CliError;

/// Build and start local development environment
#[derive(Debug, Parser)]
pub struct StartCommand {
    /// Distribution folder
    #[arg(long, default_value = "dist")]
    pub dist: String,

    #[command(flatten)]
    pub runtime: RuntimeArgs,
}

impl StartCommand {
    /// Render the compile-and-run command for this invocation.
    pub fn script(&self, ctx: &CommandContext) -> String {
        builder(ctx).start(
            &self.dist,
            &self.runtime.init_tracer,
            &self.runtime.service_name(ctx),
            &self.runtime.env_file(),
        )
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<ScriptOutcome, CliError> {
        let script = self.script(ctx);
        execute_script(ctx, &script, Some("Zero dev:")).await
    }
}
