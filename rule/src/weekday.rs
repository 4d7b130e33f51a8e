// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Weekday tokens and prefixed BYDAY entries.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use jiff::civil::Weekday;

use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE,
};

/// The RFC 5545 two-letter token for a weekday.
#[must_use]
pub const fn weekday_token(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => KW_DAY_MO,
        Weekday::Tuesday => KW_DAY_TU,
        Weekday::Wednesday => KW_DAY_WE,
        Weekday::Thursday => KW_DAY_TH,
        Weekday::Friday => KW_DAY_FR,
        Weekday::Saturday => KW_DAY_SA,
        Weekday::Sunday => KW_DAY_SU,
    }
}

/// A BYDAY entry carrying a numeric prefix, e.g. `1MO` (first Monday) or
/// `-2TH` (second-to-last Thursday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthWeekday {
    /// Occurrence index within the enclosing month or year, never zero.
    pub nth: i8,

    /// Day of the week.
    pub weekday: Weekday,
}

impl NthWeekday {
    /// Creates a prefixed BYDAY entry.
    #[must_use]
    pub const fn new(nth: i8, weekday: Weekday) -> Self {
        Self { nth, weekday }
    }
}

impl Display for NthWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.nth, weekday_token(self.weekday))
    }
}

// The ordering is only used to canonicalize the rule's BY sets.
impl Ord for NthWeekday {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.nth, self.weekday.to_monday_zero_offset())
            .cmp(&(other.nth, other.weekday.to_monday_zero_offset()))
    }
}

impl PartialOrd for NthWeekday {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
