//! Shell command rendering for each development task.
//!
//! Every builder is a pure function of its arguments and the tool
//! invocations in [`ZeroConfig`]. Segments are joined with single spaces and
//! empty optional segments are dropped, so disabling a flag never leaves
//! stray whitespace in the command.

use crate::context::ZeroConfig;

/// Environment file handed to the runtime via `--env-file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    /// No environment file is loaded.
    Disabled,
    /// Path passed verbatim to `--env-file`.
    Path(String),
}

impl Default for EnvFile {
    fn default() -> Self {
        Self::Path(".env".to_string())
    }
}

impl From<&str> for EnvFile {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for EnvFile {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// Render the `--env-file` flag, or an empty string when disabled.
///
/// The path is not escaped and not checked for existence; a bad path
/// surfaces as a failure of the spawned runtime.
pub fn env_file_flag(env_file: &EnvFile) -> String {
    match env_file {
        EnvFile::Disabled => String::new(),
        EnvFile::Path(path) => format!("--env-file={path}"),
    }
}

fn service_name_assignment(service_name: &str) -> String {
    format!("SERVICE_NAME={service_name}")
}

fn join_segments<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders commands using a set of tool invocations.
#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    config: ZeroConfig,
}

impl CommandBuilder {
    /// Create a builder for the given tool configuration.
    pub fn new(config: ZeroConfig) -> Self {
        Self { config }
    }

    /// Tool configuration in use.
    pub fn config(&self) -> &ZeroConfig {
        &self.config
    }

    /// `SERVICE_NAME=<name> FASTIFY_AUTOLOAD_TYPESCRIPT=true <runtime> --import=<loader>`
    fn ts_loader(&self, service_name: &str) -> String {
        join_segments([
            service_name_assignment(service_name),
            "FASTIFY_AUTOLOAD_TYPESCRIPT=true".to_string(),
            self.config.runtime.clone(),
            format!("--import={}", self.config.ts_loader),
        ])
    }

    /// Command that runs the TypeScript entry file in watch mode.
    pub fn dev(
        &self,
        entry_file: &str,
        init_tracer: &str,
        service_name: &str,
        env_file: &EnvFile,
    ) -> String {
        join_segments([
            "development=true".to_string(),
            self.ts_loader(service_name),
            format!("--import={init_tracer}"),
            env_file_flag(env_file),
            "--watch".to_string(),
            entry_file.to_string(),
        ])
    }

    /// Command that compiles the project, then runs the compiled output.
    pub fn start(
        &self,
        dist: &str,
        init_tracer: &str,
        service_name: &str,
        env_file: &EnvFile,
    ) -> String {
        join_segments([
            self.config.compile_step.clone(),
            "&&".to_string(),
            service_name_assignment(service_name),
            self.config.runtime.clone(),
            format!("--import={init_tracer}"),
            env_file_flag(env_file),
            dist.to_string(),
        ])
    }

    /// Command that runs the node test runner, optionally scoped to a file.
    pub fn test(&self, service_name: &str, file: Option<&str>) -> String {
        join_segments([
            self.ts_loader(service_name),
            "--test".to_string(),
            file.unwrap_or_default().to_string(),
        ])
    }

    /// Command that invokes dprint.
    pub fn format(&self, subcommand: &str, config: &str) -> String {
        join_segments(["dprint", subcommand, "--config", config])
    }

    /// Command that invokes eslint.
    pub fn lint(&self, config: &str) -> String {
        join_segments(["eslint", "--config", config])
    }
}

/// Build the dev command with the default tool configuration.
pub fn build_dev_command(
    entry_file: &str,
    init_tracer: &str,
    service_name: &str,
    env_file: &EnvFile,
) -> String {
    CommandBuilder::default().dev(entry_file, init_tracer, service_name, env_file)
}

/// Build the start command with the default tool configuration.
pub fn build_start_command(
    dist: &str,
    init_tracer: &str,
    service_name: &str,
    env_file: &EnvFile,
) -> String {
    CommandBuilder::default().start(dist, init_tracer, service_name, env_file)
}

/// Build the test command with the default tool configuration.
pub fn build_test_command(service_name: &str, file: Option<&str>) -> String {
    CommandBuilder::default().test(service_name, file)
}

/// Build the format command.
pub fn build_format_command(subcommand: &str, config: &str) -> String {
    CommandBuilder::default().format(subcommand, config)
}

/// Build the lint command.
pub fn build_lint_command(config: &str) -> String {
    CommandBuilder::default().lint(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_flag() {
        assert_eq!(env_file_flag(&EnvFile::Disabled), "");
        assert_eq!(
            env_file_flag(&EnvFile::from("custom.env")),
            "--env-file=custom.env"
        );
        assert_eq!(env_file_flag(&EnvFile::default()), "--env-file=.env");
    }

    #[test]
    fn test_env_file_flag_is_verbatim() {
        let env_file = EnvFile::from("config/my env.local");
        assert_eq!(env_file_flag(&env_file), "--env-file=config/my env.local");
    }

    #[test]
    fn test_dev_command() {
        let command = build_dev_command(
            "src/index.ts",
            "./init-tracer.mjs",
            "api",
            &EnvFile::default(),
        );
        assert_eq!(
            command,
            "development=true SERVICE_NAME=api FASTIFY_AUTOLOAD_TYPESCRIPT=true \
             node --enable-source-maps --import=tsx/esm --import=./init-tracer.mjs \
             --env-file=.env --watch src/index.ts"
        );
    }

    #[test]
    fn test_dev_command_without_env_file() {
        let command = build_dev_command(
            "src/index.ts",
            "./init-tracer.mjs",
            "api",
            &EnvFile::Disabled,
        );
        assert!(!command.contains("--env-file"));
        assert!(command.contains("--watch src/index.ts"));
        assert!(!command.contains("  "));
    }

    #[test]
    fn test_dev_command_has_one_service_name() {
        for service in ["api", "my-svc", "@scope/pkg", "SERVICE_NAME"] {
            for env_file in [EnvFile::Disabled, EnvFile::from(".env.local")] {
                let command = build_dev_command("src/main.ts", "./t.mjs", service, &env_file);
                assert_eq!(command.matches("SERVICE_NAME=").count(), 1, "{command}");
                assert!(command.contains(&format!("SERVICE_NAME={service} ")));
            }
        }
    }

    #[test]
    fn test_start_command() {
        let command = build_start_command("dist", "./init-tracer.mjs", "api", &EnvFile::from(".env"));
        assert_eq!(
            command,
            "pnpm tsc && SERVICE_NAME=api node --enable-source-maps --import=./init-tracer.mjs --env-file=.env dist"
        );
    }

    #[test]
    fn test_start_command_without_env_file() {
        let command = build_start_command("build", "./tracer.mjs", "web", &EnvFile::Disabled);
        assert_eq!(
            command,
            "pnpm tsc && SERVICE_NAME=web node --enable-source-maps --import=./tracer.mjs build"
        );
    }

    #[test]
    fn test_test_command() {
        assert_eq!(
            build_test_command("api", Some("src/user.test.ts")),
            "SERVICE_NAME=api FASTIFY_AUTOLOAD_TYPESCRIPT=true node --enable-source-maps \
             --import=tsx/esm --test src/user.test.ts"
        );
        assert!(build_test_command("api", None).ends_with("--import=tsx/esm --test"));
    }

    #[test]
    fn test_format_and_lint_commands() {
        assert_eq!(
            build_format_command("fmt", "/opt/zero/dprint.json"),
            "dprint fmt --config /opt/zero/dprint.json"
        );
        assert_eq!(
            build_format_command("check", "dprint.json"),
            "dprint check --config dprint.json"
        );
        assert_eq!(
            build_lint_command("/opt/zero/eslint.config.mjs"),
            "eslint --config /opt/zero/eslint.config.mjs"
        );
    }

    #[test]
    fn test_custom_runtime() {
        let config = ZeroConfig {
            runtime: "bun".to_string(),
            compile_step: "bun run build".to_string(),
            ..ZeroConfig::default()
        };
        let builder = CommandBuilder::new(config);
        assert_eq!(
            builder.start("out", "./t.mjs", "svc", &EnvFile::Disabled),
            "bun run build && SERVICE_NAME=svc bun --import=./t.mjs out"
        );
    }
}
