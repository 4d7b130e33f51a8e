// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Hourly, minutely, and secondly expansion, including the forward scan to
//! the first legal time and day-level filtering of sub-day frequencies.

use crate::common::{dt, recurrence};

#[test]
fn hourly_every_three_hours() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=HOURLY;INTERVAL=3;COUNT=4");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 9, 0, 0),
            dt(1997, 9, 2, 12, 0, 0),
            dt(1997, 9, 2, 15, 0, 0),
            dt(1997, 9, 2, 18, 0, 0),
        ]
    );
}

#[test]
fn hourly_crosses_midnight() {
    let rule = recurrence("DTSTART=19970902T220000;FREQ=HOURLY;INTERVAL=3;COUNT=3");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 22, 0, 0),
            dt(1997, 9, 3, 1, 0, 0),
            dt(1997, 9, 3, 4, 0, 0),
        ]
    );
}

#[test]
fn hourly_with_byhour_skips_to_listed_hours() {
    // DTSTART's own hour is not in BYHOUR, so the first timeset is empty
    // and the scan jumps forward to the first legal hour.
    let rule = recurrence("DTSTART=19970902T110000;FREQ=HOURLY;BYHOUR=9,15;COUNT=3");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 15, 0, 0),
            dt(1997, 9, 3, 9, 0, 0),
            dt(1997, 9, 3, 15, 0, 0),
        ]
    );
}

#[test]
fn minutely_with_long_interval() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=MINUTELY;INTERVAL=90;COUNT=3");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 9, 0, 0),
            dt(1997, 9, 2, 10, 30, 0),
            dt(1997, 9, 2, 12, 0, 0),
        ]
    );
}

#[test]
fn secondly_carries_across_midnight() {
    let rule = recurrence("DTSTART=19971231T235958;FREQ=SECONDLY;COUNT=4");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 12, 31, 23, 59, 58),
            dt(1997, 12, 31, 23, 59, 59),
            dt(1998, 1, 1, 0, 0, 0),
            dt(1998, 1, 1, 0, 0, 1),
        ]
    );
}

#[test]
fn hourly_respects_day_filters() {
    // Only Tuesdays qualify; the scan skips the dead days hour block by
    // hour block via the midnight pre-advance.
    let rule = recurrence("DTSTART=19970902T220000;FREQ=HOURLY;INTERVAL=12;BYDAY=TU;COUNT=3");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 22, 0, 0),
            dt(1997, 9, 9, 10, 0, 0),
            dt(1997, 9, 9, 22, 0, 0),
        ]
    );
}

#[test]
fn minutely_with_byhour_window() {
    // Every 20 minutes, but only inside the 09:00 and 10:00 hours.
    let rule = recurrence(
        "DTSTART=19970902T090000;FREQ=MINUTELY;INTERVAL=20;BYHOUR=9,10;COUNT=5",
    );
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 9, 0, 0),
            dt(1997, 9, 2, 9, 20, 0),
            dt(1997, 9, 2, 9, 40, 0),
            dt(1997, 9, 2, 10, 0, 0),
            dt(1997, 9, 2, 10, 20, 0),
        ]
    );
}
