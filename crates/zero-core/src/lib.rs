//! config-zero core - shell command assembly and execution.
//!
//! This crate holds the two pieces the `config-zero` binary is made of:
//!
//! - [`command`] - pure builders that render the shell command for each
//!   development task (dev server, start, test, format, lint)
//! - [`runner`] - spawns a built command through the host shell and
//!   resolves to a single [`ScriptOutcome`]
//!
//! Process-wide state (working directory, bundled config location) is read
//! once into a [`ZeroContext`] and passed explicitly.

#![warn(missing_docs)]

pub mod command;
pub mod context;
pub mod error;
pub mod manifest;
pub mod runner;

// Re-exports
pub use command::{
    build_dev_command, build_format_command, build_lint_command, build_start_command,
    build_test_command, env_file_flag, CommandBuilder, EnvFile,
};
pub use context::{ZeroConfig, ZeroContext};
pub use error::{ZeroError, ZeroResult};
pub use manifest::{
    read_service_name, resolve_default_service_name, ManifestError, PackageManifest,
    FALLBACK_SERVICE_NAME,
};
pub use runner::{run, ScriptOutcome};
