// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rule::Rule;
use jiff::civil;

use crate::iter::utils::{civil_time, date_from_year_day};

/// Projects BYSETPOS onto the interval's filtered (dayset x timeset) grid.
///
/// The grid is ordered lexicographically by (day, time); position `p` maps
/// to index `p - 1`, negative positions count from the end. Out-of-range
/// positions are skipped, duplicates collapse, and the result is sorted so
/// emission stays monotonic.
pub(crate) fn build_pos_list(
    rule: &Rule,
    day_set: &[i32],
    time_set: &[(i8, i8, i8)],
    year: i16,
) -> Vec<civil::DateTime> {
    let n_days = day_set.len() as i64;
    let n_times = time_set.len() as i64;
    let total = n_days * n_times;

    let mut list = Vec::with_capacity(rule.by_set_pos.len());
    for &pos in &rule.by_set_pos {
        let index = if pos > 0 {
            i64::from(pos) - 1
        } else {
            total + i64::from(pos)
        };
        if index < 0 || index >= total {
            continue;
        }
        let day = day_set[(index / n_times) as usize];
        let (hour, minute, second) = time_set[(index % n_times) as usize];
        if let Some(date) = date_from_year_day(year, day) {
            list.push(civil::DateTime::from_parts(
                date,
                civil_time(hour, minute, second),
            ));
        }
    }
    list.sort_unstable();
    list.dedup();
    list
}
