//! # Reginald
//!
//! Command-line tooling for the Reginald plugin host.
//!
//! ## Usage
//!
//! ```bash
//! # Level tools
//! reginald level encode -6             # TRACE+2
//! reginald level parse error-8         # value 0, canonical INFO
//! reginald level bands
//!
//! # Plugin manifests
//! reginald manifest plugins/sh/manifest.toml
//! reginald --json-mode manifest plugins/sh/manifest.json
//!
//! # Logging
//! REGINALD_LOG_FORMAT=json reginald --log-level debug level bands
//! ```

use clap::Parser;
use reginald::{AppConfig, cli, logging};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Logging is not up yet, so configuration errors go straight to stderr.
    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    logging::init(&config);
    tracing::debug!(
        "Logging at {} ({:?} format)",
        config.log_level,
        config.log_format
    );

    if let Err(e) = cli::execute(&cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
