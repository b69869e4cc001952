//! CLI error handling.

use std::io;
use std::process::ExitCode;

use thiserror::Error;
use zero_core::ZeroError;

/// CLI error type with context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<std::path::PathBuf>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Other(_) => "E999",
        }
    }

    /// Get the exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Other(_) => 1,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: None,
        }
    }

    /// Create a config error with hint
    pub fn config_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: Some(hint.into()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::anyhow!("JSON serialization failed: {err}"))
    }
}

impl From<ZeroError> for CliError {
    fn from(err: ZeroError) -> Self {
        match err {
            ZeroError::WorkingDirNotFound { path } => Self::Config {
                message: format!("Working directory not found: {}", path.display()),
                source: None,
                hint: Some("Check the --cwd option or the ZERO_CWD variable".to_string()),
            },
            ZeroError::BundledConfigDir { .. } => Self::Config {
                message: err.to_string(),
                source: Some(Box::new(err)),
                hint: Some("Pass --config or set ZERO_CONFIG_DIR".to_string()),
            },
            ZeroError::Io(source) => Self::Io {
                message: source.to_string(),
                source,
                path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_cwd_maps_to_config_error() {
        let err: CliError = ZeroError::WorkingDirNotFound {
            path: PathBuf::from("/no/such/dir"),
        }
        .into();
        assert_eq!(err.code(), "E001");
        assert_eq!(err.exit_status(), 2);
        assert!(err.to_string().contains("/no/such/dir"));
        assert!(err.hint().is_some_and(|h| h.contains("--cwd")));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: CliError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.code(), "E002");
        assert_eq!(err.exit_status(), 3);
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_config_with_hint() {
        let err = CliError::config_with_hint("bad value", "try again");
        assert_eq!(err.to_string(), "bad value");
        assert_eq!(err.hint(), Some("try again"));
        assert_eq!(CliError::config("x").hint(), None);
    }
}
