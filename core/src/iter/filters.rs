// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::iter::iterinfo::IterInfo;

/// Whether a yearday is discarded by the rule's BY parts.
///
/// The checks run in cascade order: month, week number, yearday, month day,
/// weekday, then prefixed weekday; the first miss discards the day. A
/// yearday at or past `year_len` is an overhang day belonging to the next
/// year, which the yearday check normalizes against the next year's length.
pub(crate) fn is_filtered(info: &IterInfo<'_>, year_day: i32) -> bool {
    let rule = info.rule();
    let year = info.year_info();
    let i = year_day as usize;

    if !rule.by_month.is_empty() && !rule.by_month.contains(&year.month_mask[i]) {
        return true;
    }

    if let Some(mask) = &year.week_no_mask {
        if !mask[i] {
            return true;
        }
    }

    if !rule.by_year_day.is_empty() {
        let matches = if year_day < year.year_len {
            rule.by_year_day.contains(&((year_day + 1) as i16))
                || rule.by_year_day.contains(&((year_day - year.year_len) as i16))
        } else {
            rule.by_year_day
                .contains(&((year_day + 1 - year.year_len) as i16))
                || rule
                    .by_year_day
                    .contains(&((year_day - year.year_len - year.next_year_len) as i16))
        };
        if !matches {
            return true;
        }
    }

    if !(rule.by_month_day.is_empty() && rule.by_n_month_day.is_empty())
        && !rule.by_month_day.contains(&year.month_day_mask[i])
        && !rule.by_n_month_day.contains(&year.neg_month_day_mask[i])
    {
        return true;
    }

    if !rule.by_weekday.is_empty() {
        let weekday = year.weekday_mask[i];
        if !rule
            .by_weekday
            .iter()
            .any(|w| w.to_monday_zero_offset() == weekday)
        {
            return true;
        }
    }

    if !rule.by_nth_weekday.is_empty() {
        let in_mask = info
            .month_info()
            .is_some_and(|month| month.nth_weekday_mask.get(i).copied().unwrap_or(false));
        if !in_mask {
            return true;
        }
    }

    false
}
