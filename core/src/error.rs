// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Error raised by query operations on a valid rule.
///
/// Iteration itself never fails: a rule that stops making progress within
/// the Gregorian cycle bound simply ends its sequence.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    /// The rule has neither COUNT nor UNTIL, so enumerating all of its
    /// occurrences would not terminate.
    #[error("rule is unbounded (neither COUNT nor UNTIL is set)")]
    Unbounded,
}
