//! # Log Levels
//!
//! The severity scale shared by the host and its plugins.
//!
//! A [`Level`] is an integer rank. Higher is more severe. Five named
//! [`Anchor`]s split the integer line into bands, and every level has a single
//! canonical string: the name of its band, followed by a signed offset when
//! the level is not exactly on the anchor.
//!
//! ```
//! use reginald_core::Level;
//!
//! assert_eq!(Level::WARN.to_string(), "WARN");
//! assert_eq!((Level::WARN - 1).to_string(), "INFO+3");
//! assert_eq!((Level::TRACE - 2).to_string(), "TRACE-2");
//!
//! // Parsing ignores case and accepts any anchor + offset spelling.
//! assert_eq!("error-8".parse::<Level>().unwrap(), Level::INFO);
//! ```
//!
//! Encoding always re-derives the band from the numeric value, so only
//! encode → parse → encode is guaranteed to reproduce its input.

mod codec;

use crate::primitives::{
    ANCHOR_NAMES, DEBUG_VALUE, ERROR_VALUE, INFO_VALUE, OFFSET_SIGNS, TRACE_VALUE, WARN_VALUE,
};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ANCHOR
// =============================================================================

/// One of the five named reference points on the level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Anchor {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Anchor {
    /// All anchors in ascending order of value.
    pub const ALL: [Anchor; 5] = [
        Anchor::Trace,
        Anchor::Debug,
        Anchor::Info,
        Anchor::Warn,
        Anchor::Error,
    ];

    /// The integer value the anchor sits on.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Anchor::Trace => TRACE_VALUE,
            Anchor::Debug => DEBUG_VALUE,
            Anchor::Info => INFO_VALUE,
            Anchor::Warn => WARN_VALUE,
            Anchor::Error => ERROR_VALUE,
        }
    }

    /// The upper-case name used in canonical level strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        ANCHOR_NAMES[self as usize]
    }

    /// The level exactly on this anchor.
    #[must_use]
    pub const fn level(self) -> Level {
        Level(self.value())
    }

    /// Returns the anchor whose band contains `value`.
    ///
    /// Thresholds are checked in ascending order, so the result is the
    /// greatest anchor that does not exceed `value`, with everything below
    /// DEBUG falling to TRACE.
    #[must_use]
    pub const fn containing(value: i32) -> Self {
        if value < DEBUG_VALUE {
            Anchor::Trace
        } else if value < INFO_VALUE {
            Anchor::Debug
        } else if value < WARN_VALUE {
            Anchor::Info
        } else if value < ERROR_VALUE {
            Anchor::Warn
        } else {
            Anchor::Error
        }
    }

    /// Looks up an anchor by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|anchor| anchor.name() == upper)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// LEVEL
// =============================================================================

/// The importance or severity of a log event.
///
/// The higher the level, the more severe the event. Values between or beyond
/// the named anchors are valid and keep their exact numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    pub const TRACE: Level = Level(TRACE_VALUE);
    pub const DEBUG: Level = Level(DEBUG_VALUE);
    pub const INFO: Level = Level(INFO_VALUE);
    pub const WARN: Level = Level(WARN_VALUE);
    pub const ERROR: Level = Level(ERROR_VALUE);

    /// Create a level with the given numeric value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The anchor whose band contains this level.
    #[must_use]
    pub const fn anchor(self) -> Anchor {
        Anchor::containing(self.0)
    }

    /// The signed distance from this level's anchor.
    ///
    /// Never overflows: the lowest band is TRACE at -8, so even `i32::MIN`
    /// has an offset that fits.
    #[must_use]
    pub const fn offset(self) -> i32 {
        self.0 - self.anchor().value()
    }

    #[must_use]
    pub const fn checked_add(self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    #[must_use]
    pub const fn checked_sub(self, delta: i32) -> Option<Self> {
        match self.0.checked_sub(delta) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the canonical string for this level.
    ///
    /// Same as the `Display` output: the band name alone when the level is on
    /// an anchor, otherwise the name followed by an explicitly signed offset.
    #[must_use]
    pub fn encode(self) -> String {
        self.to_string()
    }

    /// Parse a level string.
    ///
    /// The text before the first `+` or `-` is the name and is matched
    /// case-insensitively; the rest, sign included, is a decimal offset added
    /// to the named anchor. The offset is checked before the name.
    pub fn parse(s: &str) -> Result<Self, LevelError> {
        let (name, offset) = match s.find(OFFSET_SIGNS) {
            Some(i) => {
                let (name, digits) = s.split_at(i);
                let offset = digits
                    .parse::<i32>()
                    .map_err(|e| LevelError::offset(s, e))?;
                (name, offset)
            }
            None => (s, 0),
        };

        let anchor =
            Anchor::from_name(name).ok_or_else(|| LevelError::UnknownName(name.to_string()))?;

        anchor
            .level()
            .checked_add(offset)
            .ok_or_else(|| LevelError::Parse {
                input: s.to_string(),
                reason: OffsetError::OutOfRange,
            })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.anchor().name();
        match self.offset() {
            0 => f.write_str(name),
            offset => write!(f, "{}{:+}", name, offset),
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl From<Anchor> for Level {
    fn from(anchor: Anchor) -> Self {
        anchor.level()
    }
}

impl Add<i32> for Level {
    type Output = Level;

    fn add(self, rhs: i32) -> Level {
        Level(self.0 + rhs)
    }
}

impl Sub<i32> for Level {
    type Output = Level;

    fn sub(self, rhs: i32) -> Level {
        Level(self.0 - rhs)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors from decoding a level.
///
/// Every failure is a deterministic result of malformed input; nothing is
/// retried and no partially decoded level is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The name segment matched none of the anchor names.
    #[error("level has unknown name: {0:?}")]
    UnknownName(String),

    /// The offset segment is not a usable signed decimal integer.
    #[error("level string {input:?}: {reason}")]
    Parse {
        input: String,
        #[source]
        reason: OffsetError,
    },

    /// The structured-data envelope is not a valid quoted string.
    #[error("level is not a quoted string: {0}")]
    Format(String),
}

/// Why the offset segment of a level string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffsetError {
    #[error("invalid syntax: {0}")]
    InvalidSyntax(ParseIntError),

    /// The offset, or the level it produces, does not fit in an `i32`.
    #[error("value out of range")]
    OutOfRange,
}

impl LevelError {
    fn offset(input: &str, err: ParseIntError) -> Self {
        let reason = match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OffsetError::OutOfRange,
            _ => OffsetError::InvalidSyntax(err),
        };
        LevelError::Parse {
            input: input.to_string(),
            reason,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
