//! # Logging Setup
//!
//! Installs the global `tracing` subscriber. Output goes to stderr so that
//! command output on stdout stays machine-readable.

use crate::config::{AppConfig, LogFormat};
use reginald_core::{Anchor, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a level to the `tracing` filter of its band.
///
/// Levels between anchors keep the filter of the band they fall in, so
/// `INFO+3` still lets INFO events through.
#[must_use]
pub fn level_filter(level: Level) -> LevelFilter {
    match level.anchor() {
        Anchor::Trace => LevelFilter::TRACE,
        Anchor::Debug => LevelFilter::DEBUG,
        Anchor::Info => LevelFilter::INFO,
        Anchor::Warn => LevelFilter::WARN,
        Anchor::Error => LevelFilter::ERROR,
    }
}

/// Filter directive used when `RUST_LOG` is not set.
#[must_use]
pub fn default_directive(level: Level) -> String {
    format!("reginald={}", level_filter(level))
}

/// Initialize tracing. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.log_level)));

    match config.log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
