// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence expansion: masks, daysets, filters, and the iterator driver.

mod counter;
mod iterinfo;
mod masks;
mod monthinfo;
mod pos_list;
mod rule_iter;
mod yearinfo;

pub(crate) mod filters;
pub(crate) mod utils;

use cadence_rule::Frequency;

pub(crate) use iterinfo::IterInfo;
pub use rule_iter::Occurrences;

/// Interval ceilings derived from the 28-year Gregorian sub-cycle: a rule
/// that produces nothing within this many intervals never will, so the
/// driver ends the sequence instead of spinning.
pub(crate) const fn repeat_cycles(freq: Frequency) -> i32 {
    match freq {
        Frequency::Yearly => 28,
        Frequency::Monthly => 336,
        Frequency::Weekly => 1461,
        Frequency::Daily => 10_227,
        Frequency::Hourly => 24,
        Frequency::Minutely => 1440,
        Frequency::Secondly => 86_400,
    }
}
