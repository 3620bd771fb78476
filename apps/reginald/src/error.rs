//! Error type for the application layer.

use reginald_core::LevelError;
use thiserror::Error;

/// Errors surfaced by the CLI.
///
/// The core only fails on malformed levels; everything else here comes from
/// files, the environment or decoding manifests.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Level(#[from] LevelError),
}
