// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rule::{Frequency, Rule};

use crate::iter::utils::pymod;
use crate::iter::yearinfo::YearInfo;

/// Mask of the yeardays selected by prefixed BYDAY entries, rebuilt whenever
/// the iterator's (year, month) changes.
#[derive(Debug)]
pub(crate) struct MonthInfo {
    pub year: i16,
    pub month: i8,
    /// Indexed by yearday; empty when the frequency carries no ranges.
    pub nth_weekday_mask: Vec<bool>,
}

impl MonthInfo {
    pub fn new(year_info: &YearInfo, month: i8, rule: &Rule) -> Self {
        Self {
            year: year_info.year,
            month,
            nth_weekday_mask: Self::build_mask(year_info, month, rule),
        }
    }

    fn build_mask(year_info: &YearInfo, month: i8, rule: &Rule) -> Vec<bool> {
        let month_span = |m: usize| {
            let first = i32::from(year_info.month_range[m - 1]);
            let last = i32::from(year_info.month_range[m]) - 1;
            (first, last)
        };

        // The ranges the entries index into: the whole year or each chosen
        // month for yearly rules, the current month for monthly ones.
        let mut ranges = Vec::new();
        match rule.freq {
            Frequency::Yearly => {
                if rule.by_month.is_empty() {
                    ranges.push((0, year_info.year_len - 1));
                } else {
                    for &m in &rule.by_month {
                        ranges.push(month_span(m as usize));
                    }
                }
            }
            Frequency::Monthly => ranges.push(month_span(month as usize)),
            _ => {}
        }
        if ranges.is_empty() {
            return Vec::new();
        }

        let mut mask = vec![false; year_info.year_len as usize];
        for (first, last) in ranges {
            for nth in &rule.by_nth_weekday {
                let weekday = i32::from(nth.weekday.to_monday_zero_offset());
                let n = i32::from(nth.nth);
                let i = if n > 0 {
                    let i = first + (n - 1) * 7;
                    if i > last {
                        continue;
                    }
                    i + pymod(7 - year_info.weekday_at(i) + weekday, 7)
                } else {
                    let i = last + (n + 1) * 7;
                    if i < first {
                        continue;
                    }
                    i - pymod(year_info.weekday_at(i) - weekday, 7)
                };
                if first <= i && i <= last {
                    mask[i as usize] = true;
                }
            }
        }
        mask
    }
}
