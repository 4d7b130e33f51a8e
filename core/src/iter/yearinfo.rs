// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rule::Rule;
use jiff::civil;

use crate::iter::masks::{
    MONTH_DAY_MASK_COMMON, MONTH_DAY_MASK_LEAP, MONTH_MASK_COMMON, MONTH_MASK_LEAP,
    MONTH_RANGE_COMMON, MONTH_RANGE_LEAP, NEG_MONTH_DAY_MASK_COMMON, NEG_MONTH_DAY_MASK_LEAP,
    WEEKDAY_MASK,
};
use crate::iter::utils::{is_leap_year, pymod, year_length};

/// Per-year mask context, rebuilt whenever the iterator rolls into a new
/// year.
#[derive(Debug)]
pub(crate) struct YearInfo {
    pub year: i16,
    pub year_len: i32,
    pub next_year_len: i32,
    /// Weekday of January 1st, 0 = Monday.
    pub weekday_of_jan1: i32,
    pub month_mask: &'static [i8],
    pub month_day_mask: &'static [i8],
    pub neg_month_day_mask: &'static [i8],
    /// Yearday -> weekday, including the next-year overhang.
    pub weekday_mask: &'static [i8],
    pub month_range: &'static [u16; 13],
    /// Yeardays belonging to a requested ISO week, present iff BYWEEKNO is.
    pub week_no_mask: Option<Vec<bool>>,
}

impl YearInfo {
    /// Builds the context for `year`. The year is known to be in civil range
    /// because it was read back from a civil date.
    pub fn new(year: i16, rule: &Rule) -> Self {
        let leap = is_leap_year(i32::from(year));
        let jan1 = civil::date(year, 1, 1);
        let weekday_of_jan1 = i32::from(jan1.weekday().to_monday_zero_offset());

        let mut info = YearInfo {
            year,
            year_len: if leap { 366 } else { 365 },
            next_year_len: year_length(i32::from(year) + 1),
            weekday_of_jan1,
            month_mask: if leap { &MONTH_MASK_LEAP } else { &MONTH_MASK_COMMON },
            month_day_mask: if leap {
                &MONTH_DAY_MASK_LEAP
            } else {
                &MONTH_DAY_MASK_COMMON
            },
            neg_month_day_mask: if leap {
                &NEG_MONTH_DAY_MASK_LEAP
            } else {
                &NEG_MONTH_DAY_MASK_COMMON
            },
            weekday_mask: &WEEKDAY_MASK[weekday_of_jan1 as usize..],
            month_range: if leap { &MONTH_RANGE_LEAP } else { &MONTH_RANGE_COMMON },
            week_no_mask: None,
        };
        if !rule.by_week_no.is_empty() {
            info.week_no_mask = Some(info.build_week_no_mask(rule));
        }
        info
    }

    /// Weekday (0 = Monday) at a 0-based yearday, overhang included.
    pub fn weekday_at(&self, year_day: i32) -> i32 {
        i32::from(self.weekday_mask[year_day as usize])
    }

    /// Marks every yearday covered by a requested ISO week number.
    ///
    /// A week belongs to the year that holds at least four of its days
    /// (ISO 8601). Week #1 may start in the previous December, the last
    /// requested week may spill a few days into this year's January, and the
    /// trailing days of December may belong to next year's week #1.
    fn build_week_no_mask(&self, rule: &Rule) -> Vec<bool> {
        let mut mask = vec![false; (self.year_len + 7) as usize];
        let wkst = i32::from(rule.wkst.to_monday_zero_offset());

        let first_wkst = pymod(7 - self.weekday_of_jan1 + wkst, 7);
        let (no1_wkst, week_year_len) = if first_wkst >= 4 {
            // Week #1 began last year and contributes its days to this one.
            (0, self.year_len + pymod(self.weekday_of_jan1 - wkst, 7))
        } else {
            (first_wkst, self.year_len - first_wkst)
        };
        let num_weeks = week_year_len / 7 + (week_year_len % 7) / 4;

        let mut mark_week = |mut i: i32| {
            for _ in 0..7 {
                let Some(slot) = mask.get_mut(i as usize) else {
                    break;
                };
                *slot = true;
                i += 1;
                if self.weekday_at(i) == wkst {
                    break;
                }
            }
        };

        for &n in &rule.by_week_no {
            let mut n = i32::from(n);
            if n < 0 {
                n += num_weeks + 1;
            }
            if n <= 0 || n > num_weeks {
                continue;
            }
            let i = if n > 1 {
                let mut i = no1_wkst + (n - 1) * 7;
                if no1_wkst != first_wkst {
                    i -= 7 - first_wkst;
                }
                i
            } else {
                no1_wkst
            };
            mark_week(i);
        }

        if rule.by_week_no.contains(&1) {
            // Week #1 of the next year may claim this year's trailing days.
            let mut i = no1_wkst + num_weeks * 7;
            if no1_wkst != first_wkst {
                i -= 7 - first_wkst;
            }
            if i < self.year_len {
                mark_week(i);
            }
        }

        if no1_wkst > 0 {
            // The days before week #1 belong to the previous year's last
            // week; mark them when that week number was requested.
            let requested = rule.by_week_no.contains(&-1)
                || self
                    .last_week_of_previous_year(wkst, no1_wkst)
                    .is_some_and(|last| {
                        rule.by_week_no.iter().any(|&n| i32::from(n) == last)
                    });
            if requested {
                for slot in mask.iter_mut().take(no1_wkst as usize) {
                    *slot = true;
                }
            }
        }

        mask
    }

    fn last_week_of_previous_year(&self, wkst: i32, no1_wkst: i32) -> Option<i32> {
        let prev_year = i32::from(self.year) - 1;
        let prev_jan1 = civil::Date::new(self.year.checked_sub(1)?, 1, 1).ok()?;
        let prev_weekday = i32::from(prev_jan1.weekday().to_monday_zero_offset());
        let prev_no1_wkst = pymod(7 - prev_weekday + wkst, 7);
        let last = if prev_no1_wkst >= 4 {
            52 + pymod(year_length(prev_year) + pymod(prev_weekday - wkst, 7), 7) / 4
        } else {
            52 + pymod(self.year_len - no1_wkst, 7) / 4
        };
        Some(last)
    }
}
