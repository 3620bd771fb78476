//! # reginald-core
//!
//! Value types shared between the Reginald host and its out-of-process
//! plugins - THE LOGIC.
//!
//! ## Modules
//!
//! - `primitives` → anchor values of the level scale
//! - `logs` → the [`Level`] type, its canonical string codec and its
//!   serialization hooks
//! - `api` → plugin manifest records
//!
//! ## Architectural Constraints
//!
//! The core:
//! - Has NO async, NO I/O and does no logging of its own
//! - Only holds immutable values; every operation is a pure function of its
//!   arguments and is safe to call from any thread

// =============================================================================
// MODULES
// =============================================================================

pub mod api;
pub mod logs;
pub mod primitives;

// =============================================================================
// RE-EXPORTS: Levels
// =============================================================================

pub use logs::{Anchor, Level, LevelError, OffsetError};

// =============================================================================
// RE-EXPORTS: Manifest records
// =============================================================================

pub use api::{Command, ConfigEntry, ConfigValue, Flag, KeyValue, Manifest, Task, ValueType};
