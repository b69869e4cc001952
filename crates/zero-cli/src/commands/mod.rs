//! Command implementations.

mod dev;
mod format;
mod lint;
mod start;

pub use dev::DevCommand;
pub use format::FormatCommand;
pub use lint::LintCommand;
pub use start::StartCommand;
pub use test::TestCommand;

use clap::Args;
use tracing::{debug, info};
use zero_core::{
    read_service_name, CommandBuilder, EnvFile, ScriptOutcome, FALLBACK_SERVICE_NAME,
};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::Output;

/// Options shared by the commands that launch the node runtime.
#[derive(Debug, Clone, Args)]
pub struct RuntimeArgs {
    /// Module preloaded to initialize tracing
    #[arg(long, default_value = "./init-tracer.mjs")]
    pub init_tracer: String,

    /// Service name (defaults to the name in package.json)
    #[arg(long)]
    pub service_name: Option<String>,

    /// Environment file
    #[arg(long, default_value = ".env")]
    pub env_file: String,

    /// Do not use environment file
    #[arg(long, conflicts_with = "env_file")]
    pub no_env_file: bool,
}

impl RuntimeArgs {
    /// Environment file selection after `--no-env-file` is applied.
    pub fn env_file(&self) -> EnvFile {
        if self.no_env_file {
            EnvFile::Disabled
        } else {
            EnvFile::from(self.env_file.as_str())
        }
    }

    /// Explicit service name, or the manifest default.
    pub fn service_name(&self, ctx: &CommandContext) -> String {
        match &self.service_name {
            Some(name) => name.clone(),
            None => default_service_name(ctx),
        }
    }
}

/// Service name from package.json, or the fallback name with a console
/// warning that stays visible whatever the log filter is.
pub(crate) fn default_service_name(ctx: &CommandContext) -> String {
    match read_service_name(&ctx.zero) {
        Ok(name) => name,
        Err(e) => {
            debug!(path = %ctx.zero.manifest_path().display(), error = %e, "Manifest fallback");
            Output::new(ctx).warning(&e.fallback_message());
            FALLBACK_SERVICE_NAME.to_string()
        }
    }
}

/// Builder configured from the command context.
pub(crate) fn builder(ctx: &CommandContext) -> CommandBuilder {
    CommandBuilder::new(ctx.zero.config.clone())
}

/// Echo a built script under `heading`, then run it and report the outcome.
///
/// In dry-run mode the script is printed and reported as successful without
/// being spawned.
pub(crate) async fn execute_script(
    ctx: &CommandContext,
    script: &str,
    heading: Option<&str>,
) -> Result<ScriptOutcome, CliError> {
    let output = Output::new(ctx);

    if ctx.dry_run {
        output.dry_run(script)?;
        return Ok(ScriptOutcome::Success);
    }

    if let Some(heading) = heading {
        output.command_echo(heading, script);
    }

    info!("Running: {}", script);
    let outcome = zero_core::run(&ctx.zero, script).await;
    output.outcome(script, &outcome)?;

    Ok(outcome)
}
