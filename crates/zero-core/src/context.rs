//! Execution context for building and running commands.

use std::path::{Path, PathBuf};

use crate::error::{ZeroError, ZeroResult};

/// Runtime invocation shared by every node-based command.
pub const DEFAULT_RUNTIME: &str = "node --enable-source-maps";

/// Compile step run before `start`.
pub const DEFAULT_COMPILE_STEP: &str = "pnpm tsc";

/// Loader module that lets node run TypeScript sources directly.
pub const DEFAULT_TS_LOADER: &str = "tsx/esm";

/// Tool invocations used when rendering commands.
#[derive(Debug, Clone)]
pub struct ZeroConfig {
    /// Runtime executable plus its fixed flags.
    pub runtime: String,
    /// Command that compiles the project.
    pub compile_step: String,
    /// Module passed to `--import` to load TypeScript.
    pub ts_loader: String,
    /// Directory holding the bundled formatter and linter configs.
    /// When unset, the directory of the running executable is used.
    pub bundled_config_dir: Option<PathBuf>,
}

impl Default for ZeroConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            compile_step: DEFAULT_COMPILE_STEP.to_string(),
            ts_loader: DEFAULT_TS_LOADER.to_string(),
            bundled_config_dir: None,
        }
    }
}

impl ZeroConfig {
    /// Set the bundled config directory.
    pub fn bundled_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundled_config_dir = Some(dir.into());
        self
    }

    /// Path of a bundled config file, e.g. `dprint.json`.
    pub fn bundled_config_path(&self, file: &str) -> ZeroResult<PathBuf> {
        let dir = match &self.bundled_config_dir {
            Some(dir) => dir.clone(),
            None => executable_dir()?,
        };
        Ok(dir.join(file))
    }
}

fn executable_dir() -> ZeroResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ZeroError::BundledConfigDir {
        message: e.to_string(),
    })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ZeroError::BundledConfigDir {
            message: format!("{} has no parent directory", exe.display()),
        })
}

/// Context passed to the manifest lookup and the runner.
#[derive(Debug, Clone)]
pub struct ZeroContext {
    /// Directory the manifest is read from and the child runs in.
    pub working_dir: PathBuf,
    /// Tool configuration.
    pub config: ZeroConfig,
}

impl ZeroContext {
    /// Create a new context with defaults.
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            config: ZeroConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(working_dir: PathBuf, config: ZeroConfig) -> Self {
        Self {
            working_dir,
            config,
        }
    }

    /// Create a context rooted at the process working directory, or at
    /// `dir` when given. The directory must exist.
    pub fn resolve(dir: Option<&Path>, config: ZeroConfig) -> ZeroResult<Self> {
        let working_dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };

        if !working_dir.is_dir() {
            return Err(ZeroError::WorkingDirNotFound { path: working_dir });
        }

        Ok(Self::with_config(working_dir, config))
    }

    /// Path of the package manifest for this context.
    pub fn manifest_path(&self) -> PathBuf {
        self.working_dir.join("package.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ZeroConfig::default();
        assert_eq!(config.runtime, "node --enable-source-maps");
        assert_eq!(config.compile_step, "pnpm tsc");
        assert_eq!(config.ts_loader, "tsx/esm");
        assert!(config.bundled_config_dir.is_none());
    }

    #[test]
    fn test_bundled_config_path_override() {
        let config = ZeroConfig::default().bundled_config_dir("/opt/zero");
        let path = config.bundled_config_path("dprint.json").unwrap();
        assert_eq!(path, PathBuf::from("/opt/zero/dprint.json"));
    }

    #[test]
    fn test_bundled_config_path_defaults_to_executable_dir() {
        let path = ZeroConfig::default()
            .bundled_config_path("eslint.config.mjs")
            .unwrap();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(path, exe_dir.join("eslint.config.mjs"));
    }

    #[test]
    fn test_resolve_missing_dir() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope");
        let err = ZeroContext::resolve(Some(&missing), ZeroConfig::default()).unwrap_err();
        assert!(matches!(err, ZeroError::WorkingDirNotFound { .. }));
    }

    #[test]
    fn test_resolve_existing_dir() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = ZeroContext::resolve(Some(temp.path()), ZeroConfig::default()).unwrap();
        assert_eq!(ctx.working_dir, temp.path());
        assert_eq!(ctx.manifest_path(), temp.path().join("package.json"));
    }
}
