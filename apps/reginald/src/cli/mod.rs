//! # Reginald CLI Module
//!
//! This module implements the CLI interface for Reginald.
//!
//! ## Available Commands
//!
//! - `level encode` - Print the canonical string of a numeric level
//! - `level parse` - Parse a level string and print its value
//! - `level bands` - List the named levels
//! - `manifest` - Load a plugin manifest and summarize it

mod commands;

use crate::config::LogFormat;
use crate::error::CliError;
use clap::{Parser, Subcommand};
use reginald_core::Level;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Reginald - plugin host tooling
///
/// Inspect log levels and plugin manifests shared between the host and its
/// plugins.
#[derive(Parser, Debug)]
#[command(name = "reginald")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Minimum level to log, e.g. "debug" or "INFO+2"
    #[arg(short = 'l', long, global = true)]
    pub log_level: Option<Level>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with log levels
    Level {
        #[command(subcommand)]
        action: LevelAction,
    },

    /// Load a plugin manifest and print a summary
    Manifest {
        /// Path to the manifest (.json or .toml)
        file: PathBuf,
    },
}

/// Level subcommands.
#[derive(Subcommand, Debug)]
pub enum LevelAction {
    /// Print the canonical string of a numeric level
    Encode {
        /// Numeric level value
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Parse a level string and print its value
    Parse {
        /// Level string, e.g. "warn+2"
        text: String,
    },

    /// List the named levels and their values
    Bands,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Run a command and return what it prints.
pub fn run(command: &Commands, json_mode: bool) -> Result<String, CliError> {
    match command {
        Commands::Level { action } => match action {
            LevelAction::Encode { value } => Ok(cmd_level_encode(*value, json_mode)),
            LevelAction::Parse { text } => cmd_level_parse(text, json_mode),
            LevelAction::Bands => Ok(cmd_level_bands(json_mode)),
        },
        Commands::Manifest { file } => cmd_manifest(file, json_mode),
    }
}

/// Execute the CLI with parsed arguments.
pub fn execute(cli: &Cli) -> Result<(), CliError> {
    let output = run(&cli.command, cli.json_mode)?;
    println!("{}", output);
    Ok(())
}
