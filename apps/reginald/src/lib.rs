//! # Reginald
//!
//! Application layer over `reginald-core`: the CLI, layered configuration,
//! logging setup and the plugin manifest loader.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;

pub use config::{AppConfig, ConfigLayer, LogFormat};
pub use error::CliError;
