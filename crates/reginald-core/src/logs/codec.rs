//! Serialization hooks for [`Level`].
//!
//! Two pairs of entry points, both thin wrappers over [`Level::encode`] and
//! [`Level::parse`]:
//!
//! - structured data: the canonical string as a JSON string literal
//! - plain text: the canonical string as raw bytes, unquoted
//!
//! The serde impls use the same canonical string, so a `Level` embedded in
//! any serde record (JSON message, TOML config) reads and writes the same way.

use super::{Level, LevelError};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Level {
    /// Encode the level as a quoted JSON string, e.g. `"WARN+2"`.
    #[must_use]
    pub fn marshal_json(self) -> Vec<u8> {
        serde_json::Value::String(self.encode())
            .to_string()
            .into_bytes()
    }

    /// Decode a quoted JSON string and parse its contents.
    ///
    /// Anything that is not a single JSON string literal fails with
    /// [`LevelError::Format`] before the level text is looked at.
    pub fn unmarshal_json(data: &[u8]) -> Result<Self, LevelError> {
        let text: String =
            serde_json::from_slice(data).map_err(|e| LevelError::Format(e.to_string()))?;
        Self::parse(&text)
    }

    /// Append the canonical bytes to `buf`, leaving existing content intact.
    pub fn append_text(self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.encode().as_bytes());
    }

    #[must_use]
    pub fn marshal_text(self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.append_text(&mut buf);
        buf
    }

    /// Parse raw level bytes. No quoting is expected.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD and then rejected by the parser
    /// like any other unknown name or malformed offset.
    pub fn unmarshal_text(data: &[u8]) -> Result<Self, LevelError> {
        Self::parse(&String::from_utf8_lossy(data))
    }
}

// =============================================================================
// SERDE
// =============================================================================

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(LevelVisitor)
    }
}

struct LevelVisitor;

impl Visitor<'_> for LevelVisitor {
    type Value = Level;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level string such as \"INFO\" or \"WARN+2\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Level, E>
    where
        E: de::Error,
    {
        Level::parse(v).map_err(E::custom)
    }
}
