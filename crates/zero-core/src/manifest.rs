//! Package manifest lookup for the default service name.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::context::ZeroContext;

/// Service name used when the manifest can't supply one.
pub const FALLBACK_SERVICE_NAME: &str = "config-zero";

/// The subset of `package.json` config-zero reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Declared package name.
    pub name: Option<String>,
}

impl PackageManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Reasons a manifest could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// File missing or unreadable.
    #[error("could not read manifest: {0}")]
    Read(#[from] std::io::Error),

    /// File is not valid JSON or has the wrong shape.
    #[error("could not parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// Manifest has no `name` field.
    #[error("manifest has no name")]
    MissingName,
}

impl ManifestError {
    /// Warning shown when the fallback service name is used.
    pub fn fallback_message(&self) -> String {
        let reason = match self {
            Self::Read(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Could not find package.json"
            }
            Self::Read(_) => "Could not read package.json",
            Self::Parse(_) => "Could not parse package.json",
            Self::MissingName => "package.json has no name",
        };
        format!("{reason}. Returning default name \"{FALLBACK_SERVICE_NAME}\"")
    }
}

/// Read the declared service name from `package.json` in the context's
/// working directory.
pub fn read_service_name(ctx: &ZeroContext) -> Result<String, ManifestError> {
    let path = ctx.manifest_path();
    let name = PackageManifest::load(&path)
        .and_then(|manifest| manifest.name.ok_or(ManifestError::MissingName))?;

    debug!("Service name from {}: {}", path.display(), name);
    Ok(name)
}

/// Resolve the default service name from `package.json` in the context's
/// working directory.
///
/// Falls back to [`FALLBACK_SERVICE_NAME`] with a warning on any failure.
pub fn resolve_default_service_name(ctx: &ZeroContext) -> String {
    match read_service_name(ctx) {
        Ok(name) => name,
        Err(e) => {
            warn!(
                path = %ctx.manifest_path().display(),
                error = %e,
                "{}",
                e.fallback_message()
            );
            FALLBACK_SERVICE_NAME.to_string()
        }
    }
}
