//! # Level Primitives
//!
//! Hardcoded anchor values for the log [`Level`](crate::Level) scale.
//!
//! The scale is a plain integer line. Five named anchors split it into
//! half-open bands; a level belongs to the band of the greatest anchor that
//! does not exceed it. The anchors are spaced so that levels between two
//! names can still be expressed as an offset from the lower one.

/// Anchor value of the TRACE band.
///
/// Every level below [`DEBUG_VALUE`] is in this band, however far below it is.
pub const TRACE_VALUE: i32 = -8;

/// Anchor value of the DEBUG band.
pub const DEBUG_VALUE: i32 = -4;

/// Anchor value of the INFO band. This is also the default level.
pub const INFO_VALUE: i32 = 0;

/// Anchor value of the WARN band.
pub const WARN_VALUE: i32 = 4;

/// Anchor value of the ERROR band.
///
/// The band is unbounded above.
pub const ERROR_VALUE: i32 = 8;

// =============================================================================
// CANONICAL NAMES
// =============================================================================

/// Upper-case names of the anchors, in ascending order of value.
pub const ANCHOR_NAMES: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Characters that start the offset segment of a level string.
pub const OFFSET_SIGNS: [char; 2] = ['+', '-'];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_strictly_increase() {
        let values = [TRACE_VALUE, DEBUG_VALUE, INFO_VALUE, WARN_VALUE, ERROR_VALUE];
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn info_is_zero() {
        assert_eq!(INFO_VALUE, 0);
    }
}
