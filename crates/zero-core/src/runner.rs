//! Script execution through the host shell.

use std::process::{ExitStatus, Stdio};

use serde::Serialize;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::context::ZeroContext;

/// How a script run ended.
///
/// Spawn failures and exit statuses are folded into one value so a run is
/// reported exactly once. A non-zero exit is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScriptOutcome {
    /// Process exited with code 0.
    Success,
    /// Process exited with a non-zero code, or was killed by a signal
    /// (`code` is `None`).
    Failed {
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },
    /// Process could not be spawned or waited on.
    SpawnError {
        /// OS error message.
        message: String,
    },
}

impl ScriptOutcome {
    /// Classify an exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => Self::Success,
            code => Self::Failed { code },
        }
    }

    /// Whether the script completed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Human-readable report line for this outcome.
    pub fn message(&self, script: &str) -> String {
        match self {
            Self::Success => format!("Script \"{script}\" completed successfully."),
            Self::Failed { code: Some(code) } => {
                format!("Script \"{script}\" failed with code {code}.")
            }
            Self::Failed { code: None } => format!("Script \"{script}\" failed with code null."),
            Self::SpawnError { message } => format!("Error running script: {message}"),
        }
    }
}

#[cfg(unix)]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(script);
    cmd
}

#[cfg(windows)]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(script);
    cmd
}

/// Run a script through the host shell in the context's working directory.
///
/// Stdio is inherited from the current process. There is no timeout and the
/// child is left running if the returned future is dropped.
#[instrument(skip(ctx), fields(working_dir = %ctx.working_dir.display()))]
pub async fn run(ctx: &ZeroContext, script: &str) -> ScriptOutcome {
    let mut cmd = shell_command(script);
    cmd.current_dir(&ctx.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!("Spawning script: {}", script);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            debug!("Spawn failed: {}", e);
            return ScriptOutcome::SpawnError {
                message: e.to_string(),
            };
        }
    };

    let outcome = match child.wait().await {
        Ok(status) => ScriptOutcome::from_status(status),
        Err(e) => ScriptOutcome::SpawnError {
            message: e.to_string(),
        },
    };

    debug!(?outcome, "Script finished");
    outcome
}
