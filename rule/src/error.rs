// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Validation errors raised while constructing a rule.

use crate::frequency::Frequency;

/// Error raised during rule construction.
///
/// Once a [`crate::Rule`] exists it is valid for its whole lifetime; no
/// variant of this type is ever produced by iteration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The parts record contains keys that are not RFC 5545 rule parts.
    #[error("unknown rule parts: {parts}")]
    UnknownParts {
        /// Comma-separated list of the offending keys.
        parts: String,
    },

    /// The same rule part was given more than once.
    #[error("duplicate rule part '{part}'")]
    DuplicatePart {
        /// The repeated key.
        part: String,
    },

    /// The required FREQ part is missing.
    #[error("missing required rule part 'FREQ'")]
    MissingFrequency,

    /// A part value failed to parse.
    #[error("invalid value '{value}' for rule part '{part}'")]
    InvalidValue {
        /// The rule part the value was given for.
        part: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A numeric part value lies outside its RFC 5545 range.
    #[error("value {value} out of range for rule part '{part}' (expected {range})")]
    OutOfRange {
        /// The rule part the value was given for.
        part: &'static str,
        /// The rejected value.
        value: i64,
        /// Human-readable description of the accepted range.
        range: &'static str,
    },

    /// COUNT and UNTIL were both given.
    #[error("rule parts 'COUNT' and 'UNTIL' are mutually exclusive")]
    CountUntilExclusive,

    /// A BY part was combined with a frequency RFC 5545 forbids it for.
    #[error("rule part '{part}' cannot be used with FREQ={freq}")]
    IncompatibleFrequency {
        /// The offending rule part.
        part: &'static str,
        /// The rule's frequency.
        freq: Frequency,
    },

    /// A prefixed BYDAY entry was combined with BYWEEKNO.
    #[error("prefixed 'BYDAY' entries cannot be combined with 'BYWEEKNO'")]
    NthByDayWithWeekNo,

    /// BYSETPOS was given without any other BY part.
    #[error("'BYSETPOS' requires at least one other BY rule part")]
    BySetPosWithoutByParts,
}
