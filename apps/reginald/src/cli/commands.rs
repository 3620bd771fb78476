//! # CLI Command Implementations
//!
//! Each command returns the text it prints, so callers decide where it goes.

use crate::error::CliError;
use crate::manifest::load_manifest;
use reginald_core::{Anchor, Level, Manifest};
use std::path::Path;

// =============================================================================
// LEVEL COMMANDS
// =============================================================================

/// JSON description of a level.
fn level_report(level: Level) -> serde_json::Value {
    serde_json::json!({
        "value": level.value(),
        "level": level,
        "anchor": level.anchor().name(),
        "offset": level.offset(),
    })
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Print the canonical string of a numeric level.
pub fn cmd_level_encode(value: i32, json_mode: bool) -> String {
    let level = Level::new(value);
    tracing::debug!("Encoding level {} as {}", value, level);

    if json_mode {
        return pretty(&level_report(level));
    }
    level.encode()
}

/// Parse a level string and print its value and canonical form.
pub fn cmd_level_parse(text: &str, json_mode: bool) -> Result<String, CliError> {
    let level = Level::parse(text)?;
    if level.encode() != text {
        tracing::debug!("Level {:?} normalized to {}", text, level);
    }

    if json_mode {
        return Ok(pretty(&level_report(level)));
    }
    Ok(format!("value:     {}\ncanonical: {}", level.value(), level))
}

/// List the named levels.
pub fn cmd_level_bands(json_mode: bool) -> String {
    if json_mode {
        let bands: Vec<_> = Anchor::ALL
            .into_iter()
            .map(|anchor| serde_json::json!({ "name": anchor.name(), "value": anchor.value() }))
            .collect();
        return pretty(&serde_json::Value::Array(bands));
    }

    Anchor::ALL
        .into_iter()
        .map(|anchor| format!("{:<6}{:>3}", anchor.name(), anchor.value()))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// MANIFEST COMMAND
// =============================================================================

/// Load a manifest and summarize it.
pub fn cmd_manifest(path: &Path, json_mode: bool) -> Result<String, CliError> {
    let manifest = load_manifest(path)?;
    Ok(render_manifest(&manifest, json_mode))
}

fn names<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Render a manifest summary.
pub fn render_manifest(manifest: &Manifest, json_mode: bool) -> String {
    if json_mode {
        return pretty(&serde_json::json!({
            "name": manifest.name,
            "domain": manifest.domain,
            "executable": manifest.executable,
            "config_count": manifest.config.len(),
            "commands": manifest.commands.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "tasks": manifest.tasks.iter().map(|t| t.task_type.as_str()).collect::<Vec<_>>(),
        }));
    }

    let mut out = String::new();
    out.push_str("Plugin Manifest\n");
    out.push_str("===============\n");
    out.push_str(&format!("Name:       {}\n", manifest.name));
    out.push_str(&format!("Domain:     {}\n", manifest.domain));
    out.push_str(&format!("Executable: {}\n", manifest.executable));
    if !manifest.description.is_empty() {
        out.push_str(&format!("About:      {}\n", manifest.description));
    }
    out.push_str(&format!("Config:     {} entries\n", manifest.config.len()));
    out.push_str(&format!(
        "Commands:   {}\n",
        names(manifest.commands.iter().map(|c| c.name.as_str()))
    ));
    out.push_str(&format!(
        "Tasks:      {}",
        names(manifest.tasks.iter().map(|t| t.task_type.as_str()))
    ));
    out
}
