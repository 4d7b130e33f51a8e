// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rule::{Frequency, Rule};
use jiff::civil;

use crate::iter::monthinfo::MonthInfo;
use crate::iter::yearinfo::YearInfo;

/// The mask context the iterator reads: a [`YearInfo`] plus, when the rule
/// has prefixed BYDAY entries, a [`MonthInfo`]. Rebuilt lazily as the
/// iterator's calendar position moves.
#[derive(Debug)]
pub(crate) struct IterInfo<'r> {
    rule: &'r Rule,
    year_info: YearInfo,
    month_info: Option<MonthInfo>,
}

impl<'r> IterInfo<'r> {
    pub fn new(rule: &'r Rule, year: i16, month: i8) -> Self {
        let year_info = YearInfo::new(year, rule);
        let month_info = (!rule.by_nth_weekday.is_empty())
            .then(|| MonthInfo::new(&year_info, month, rule));
        Self {
            rule,
            year_info,
            month_info,
        }
    }

    pub fn rebuild(&mut self, year: i16, month: i8) {
        if year != self.year_info.year {
            self.year_info = YearInfo::new(year, self.rule);
        }
        if !self.rule.by_nth_weekday.is_empty()
            && self
                .month_info
                .as_ref()
                .is_none_or(|info| info.year != year || info.month != month)
        {
            self.month_info = Some(MonthInfo::new(&self.year_info, month, self.rule));
        }
    }

    pub fn rule(&self) -> &'r Rule {
        self.rule
    }

    pub fn year_info(&self) -> &YearInfo {
        &self.year_info
    }

    pub fn month_info(&self) -> Option<&MonthInfo> {
        self.month_info.as_ref()
    }

    /// The 0-based yeardays covered by the interval at (year, month, day).
    ///
    /// Weekly daysets run from the current day to the day before the next
    /// week start, without backtracking: the driver aligned the start day to
    /// WKST before the first pass.
    pub fn day_set(&self, year: i16, month: i8, day: i8) -> Vec<i32> {
        match self.rule.freq {
            Frequency::Yearly => (0..self.year_info.year_len).collect(),
            Frequency::Monthly => {
                let first = i32::from(self.year_info.month_range[month as usize - 1]);
                let last = i32::from(self.year_info.month_range[month as usize]);
                (first..last).collect()
            }
            Frequency::Weekly => {
                let mut i = i32::from(civil::date(year, month, day).day_of_year()) - 1;
                let wkst = i32::from(self.rule.wkst.to_monday_zero_offset());
                let mut days = Vec::with_capacity(7);
                for _ in 0..7 {
                    days.push(i);
                    i += 1;
                    if self.year_info.weekday_at(i) == wkst {
                        break;
                    }
                }
                days
            }
            _ => vec![i32::from(civil::date(year, month, day).day_of_year()) - 1],
        }
    }

    /// The (hour, minute, second) triples of the current interval.
    pub fn time_set(&self, hour: i8, minute: i8, second: i8) -> Vec<(i8, i8, i8)> {
        match self.rule.freq {
            Frequency::Hourly => {
                let mut times =
                    Vec::with_capacity(self.rule.by_minute.len() * self.rule.by_second.len());
                for &minute in &self.rule.by_minute {
                    for &second in &self.rule.by_second {
                        times.push((hour, minute, second));
                    }
                }
                times
            }
            Frequency::Minutely => self
                .rule
                .by_second
                .iter()
                .map(|&second| (hour, minute, second))
                .collect(),
            Frequency::Secondly => vec![(hour, minute, second)],
            _ => self.rule.timeset.clone(),
        }
    }
}
