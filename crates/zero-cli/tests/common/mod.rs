//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Bundled config directory used by tests that rely on the default paths.
pub const BUNDLED_DIR: &str = "/opt/config-zero";

/// Test context with temporary project directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub bin_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let bin_dir = temp_dir.path().join("bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        Self { temp_dir, bin_dir }
    }

    /// Write a package.json into the project directory
    pub fn with_manifest(self, manifest: &str) -> Self {
        std::fs::write(self.path().join("package.json"), manifest)
            .expect("Failed to write package.json");
        self
    }

    /// Install a fake executable that runs `body` with `/bin/sh`
    #[cfg(unix)]
    pub fn with_tool(self, name: &str, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod tool");
        self
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("config-zero").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1") // Disable colors for predictable output
            .env("ZERO_CONFIG_DIR", BUNDLED_DIR)
            .env_remove("ZERO_CWD")
            .env_remove("ZERO_DRY_RUN")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Command whose PATH resolves tools from the context's bin dir first
    pub fn command_with_tools(&self) -> Command {
        let mut cmd = self.command();
        cmd.env("PATH", format!("{}:/usr/bin:/bin", self.bin_dir.display()));
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn stdout_text(&self) -> String;
    fn assert_stderr_contains(&self, text: &str);
}

impl OutputAssertions for Output {
    fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    fn assert_stderr_contains(&self, text: &str) {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(text),
            "stderr did not contain '{}'\nstderr: {}",
            text,
            stderr
        );
    }
}
