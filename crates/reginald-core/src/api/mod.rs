//! # Plugin Manifest Records
//!
//! The program representation of a plugin manifest. These are plain records:
//! the manifest loader and the CLI flag/config binder in the host consume
//! them, and nothing here checks that their contents make sense.
//!
//! Field names on the wire are the ones given in the `serde` attributes.

use serde::{Deserialize, Serialize};

// =============================================================================
// MANIFEST
// =============================================================================

/// A Manifest is the program representation of a plugin manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Manifest {
    pub name: String,
    /// The command-line namespace of the plugin. Plugin commands are given as
    /// subcommands of the domain.
    pub domain: String,
    #[serde(default)]
    pub description: String,
    /// Path to the plugin executable, as written in the manifest.
    pub executable: String,
    /// Config entries supported by the plugin as a whole.
    #[serde(default)]
    pub config: Vec<ConfigEntry>,
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

// =============================================================================
// COMMAND
// =============================================================================

/// A plugin command defined in the manifest.
///
/// Commands are meant for utilities; state changes go through tasks. On the
/// command line a command is a subcommand of the plugin domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Command {
    /// Name of the command as the user types it.
    pub name: String,
    /// One-line usage shown in help output, without the plugin domain.
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub config: Vec<ConfigEntry>,
}

// =============================================================================
// TASK
// =============================================================================

/// A task type the plugin can run, with the defaults for its config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Task {
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub config: Vec<KeyValue>,
}

// =============================================================================
// FLAG
// =============================================================================

/// A command-line flag bound to a [`ConfigEntry`].
///
/// When the user passes the flag, its value becomes the value of the entry
/// and reaches the plugin through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Flag {
    /// Long name, written as `--name`. When empty, the key of the owning
    /// config entry is used.
    #[serde(default)]
    pub name: String,
    /// One-letter short name, written as `-e`. Empty for none.
    #[serde(default)]
    pub shorthand: String,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// KEY / VALUE
// =============================================================================

/// The closed set of value types a config value can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Bool,
    Int,
    #[default]
    String,
}

/// A config value. Stored untagged, so it reads and writes as a bare
/// boolean, integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl ConfigValue {
    /// The value type matching this value's variant.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            ConfigValue::Bool(_) => ValueType::Bool,
            ConfigValue::Int(_) => ValueType::Int,
            ConfigValue::String(_) => ValueType::String,
        }
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::String(String::new())
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

/// A typed key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyValue {
    pub key: String,
    pub value: ConfigValue,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

impl KeyValue {
    /// Create a pair whose type tag follows the value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        let value = value.into();
        Self {
            key: key.into(),
            value_type: value.value_type(),
            value,
        }
    }
}

// =============================================================================
// CONFIG ENTRY
// =============================================================================

/// A config value supported by the plugin or one of its commands.
///
/// For each entry the host adds a key to the config file, creates a flag and
/// checks an environment variable. The optional fields override those
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigEntry {
    #[serde(flatten)]
    pub kv: KeyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<Flag>,
    /// Name of the environment variable to read instead of the default one.
    #[serde(default, rename = "env", skip_serializing_if = "Option::is_none")]
    pub env_override: Option<String>,
    /// Only the flag sets this entry; the config file and environment are not
    /// consulted.
    #[serde(default, rename = "flagOnly")]
    pub flag_only: bool,
}

impl ConfigEntry {
    #[must_use]
    pub fn new(kv: KeyValue) -> Self {
        Self {
            kv,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_type_follows_value() {
        assert_eq!(KeyValue::new("force", true).value_type, ValueType::Bool);
        assert_eq!(KeyValue::new("jobs", 4i64).value_type, ValueType::Int);
        assert_eq!(KeyValue::new("dir", "~").value_type, ValueType::String);
    }

    #[test]
    fn config_entry_flattens_key_value() {
        let entry = ConfigEntry::new(KeyValue::new("jobs", 4i64));
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(json["key"], "jobs");
        assert_eq!(json["value"], 4);
        assert_eq!(json["type"], "int");
        assert_eq!(json["flagOnly"], false);
        assert!(json.get("flag").is_none());
        assert!(json.get("env").is_none());
    }

    #[test]
    fn untagged_value_reads_bare_scalars() {
        let value: ConfigValue = serde_json::from_str("true").expect("bool");
        assert_eq!(value, ConfigValue::Bool(true));
        let value: ConfigValue = serde_json::from_str("-3").expect("int");
        assert_eq!(value, ConfigValue::Int(-3));
        let value: ConfigValue = serde_json::from_str("\"x\"").expect("string");
        assert_eq!(value, ConfigValue::String("x".to_string()));
    }
}
