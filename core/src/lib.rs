// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence expansion engine for RFC 5545 rules.
//!
//! The engine walks a rule's intervals at day granularity: per year it
//! precomputes calendar masks, per interval it generates a dayset, runs the
//! BY-filter cascade over it, crosses the survivors with the timeset, and
//! emits the results in order, with O(1) amortized work per occurrence and
//! without ever materializing an infinite sequence.

mod error;
mod iter;
mod recurrence;

pub use crate::{error::LogicError, iter::Occurrences, recurrence::Recurrence};

pub use cadence_rule::{
    Frequency, NthWeekday, PartValue, Rule, RuleParts, ValidationError, Weekday,
};
