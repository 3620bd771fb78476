//! # Manifest Loader
//!
//! Reads plugin manifests from disk. The format follows the file extension.
//! Contents are decoded as-is; nothing is validated beyond the record shape.

use crate::error::CliError;
use reginald_core::Manifest;
use std::path::{Path, PathBuf};

/// Maximum manifest file size (1 MB).
///
/// Manifests are small; anything larger is almost certainly the wrong file.
const MAX_MANIFEST_FILE_SIZE: u64 = 1024 * 1024;

/// Encoding of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ManifestFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ManifestFormat::Toml),
            _ => Err(CliError::Manifest(format!(
                "Unsupported manifest file '{}': expected .json or .toml",
                path.display()
            ))),
        }
    }
}

/// Resolve a manifest path and make sure it is a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, CliError> {
    let canonical = path.canonicalize().map_err(|e| {
        CliError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(CliError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

fn validate_file_size(path: &Path, max_size: u64) -> Result<(), CliError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| CliError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(CliError::Manifest(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Decode a manifest document.
pub fn parse_manifest(text: &str, format: ManifestFormat) -> Result<Manifest, CliError> {
    match format {
        ManifestFormat::Json => {
            serde_json::from_str(text).map_err(|e| CliError::Manifest(e.to_string()))
        }
        ManifestFormat::Toml => toml::from_str(text).map_err(|e| CliError::Manifest(e.to_string())),
    }
}

/// Load a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest, CliError> {
    let format = ManifestFormat::from_path(path)?;
    let path = validate_file_path(path)?;
    validate_file_size(&path, MAX_MANIFEST_FILE_SIZE)?;

    tracing::info!("Loading manifest from {:?} (format: {:?})", path, format);

    let text = std::fs::read_to_string(&path)
        .map_err(|e| CliError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;
    let manifest = parse_manifest(&text, format)?;

    tracing::debug!(
        "Manifest {:?}: {} config entries, {} commands, {} tasks",
        manifest.name,
        manifest.config.len(),
        manifest.commands.len(),
        manifest.tasks.len()
    );

    Ok(manifest)
}
