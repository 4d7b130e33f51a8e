// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Vectors derived from the RFC 5545 Section 3.8.5.3 examples.

use crate::common::{dates, dt, recurrence};

#[test]
fn daily_until_is_inclusive() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;UNTIL=19970905T090000");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 9, 2), (1997, 9, 3), (1997, 9, 4), (1997, 9, 5)]
    );
}

#[test]
fn daily_until_excludes_later_times() {
    // UNTIL lies one second before the would-be fourth occurrence.
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;UNTIL=19970905T085959");
    assert_eq!(rule.all().unwrap().len(), 3);
}

#[test]
fn every_other_day() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;INTERVAL=2;COUNT=4");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 9, 2), (1997, 9, 4), (1997, 9, 6), (1997, 9, 8)]
    );
}

#[test]
fn biweekly_tuesday_thursday() {
    let rule = recurrence("DTSTART=20260106T100000;FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TH;COUNT=8");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![
            (2026, 1, 6),
            (2026, 1, 8),
            (2026, 1, 20),
            (2026, 1, 22),
            (2026, 2, 3),
            (2026, 2, 5),
            (2026, 2, 17),
            (2026, 2, 19),
        ]
    );
}

#[test]
fn yearly_by_month_and_month_day() {
    let rule = recurrence("DTSTART=20260615T120000;FREQ=YEARLY;BYMONTH=6;BYMONTHDAY=15;COUNT=4");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(2026, 6, 15), (2027, 6, 15), (2028, 6, 15), (2029, 6, 15)]
    );
}

#[test]
fn leap_day_only_fires_in_leap_years() {
    let rule = recurrence("DTSTART=20240229T080000;FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=29;COUNT=3");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(2024, 2, 29), (2028, 2, 29), (2032, 2, 29)]
    );
}

#[test]
fn quarterly_by_interval() {
    let rule = recurrence("DTSTART=20260315T090000;FREQ=MONTHLY;INTERVAL=3;COUNT=5");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![
            (2026, 3, 15),
            (2026, 6, 15),
            (2026, 9, 15),
            (2026, 12, 15),
            (2027, 3, 15),
        ]
    );
}

#[test]
fn monthly_on_the_thirty_first_skips_short_months() {
    let rule = recurrence("DTSTART=19970131T090000;FREQ=MONTHLY;COUNT=5");
    // February, April and June have no 31st; those months produce nothing.
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![
            (1997, 1, 31),
            (1997, 3, 31),
            (1997, 5, 31),
            (1997, 7, 31),
            (1997, 8, 31),
        ]
    );
}

#[test]
fn last_weekday_of_month() {
    let rule = recurrence(
        "DTSTART=20260130T170000;FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1;COUNT=6",
    );
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![
            (2026, 1, 30),
            (2026, 2, 27),
            (2026, 3, 31),
            (2026, 4, 30),
            (2026, 5, 29),
            (2026, 6, 30),
        ]
    );
}

#[test]
fn second_tuesday_of_january_and_june() {
    let rule =
        recurrence("DTSTART=20260113T140000;FREQ=MONTHLY;BYMONTH=1,6;BYDAY=TU;BYSETPOS=2;COUNT=4");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(2026, 1, 13), (2026, 6, 9), (2027, 1, 12), (2027, 6, 8)]
    );
}

#[test]
fn yearly_by_year_day_both_signs() {
    let rule = recurrence("DTSTART=19970101T090000;FREQ=YEARLY;BYYEARDAY=1,100,200,-1;COUNT=5");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![
            (1997, 1, 1),
            (1997, 4, 10),
            (1997, 7, 19),
            (1997, 12, 31),
            (1998, 1, 1),
        ]
    );
}

#[test]
fn yearly_negative_week_number() {
    // The last ISO week of 1997 is week 52 (December 22-28); 1998 has 53
    // weeks and its last one starts December 28.
    let rule = recurrence("DTSTART=19970101T090000;FREQ=YEARLY;BYWEEKNO=-1;BYDAY=MO;COUNT=2");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 12, 22), (1998, 12, 28)]
    );
}

#[test]
fn civil_times_pass_through_dst_gaps() {
    // 2021-03-14 02:30 does not exist on the America/New_York wall clock;
    // the civil engine emits it anyway and leaves zone resolution to the
    // host.
    let rule = recurrence("DTSTART=20210313T023000;FREQ=DAILY;COUNT=3");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(2021, 3, 13, 2, 30, 0),
            dt(2021, 3, 14, 2, 30, 0),
            dt(2021, 3, 15, 2, 30, 0),
        ]
    );
}

#[test]
fn expanding_time_sets_multiply_days() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;BYHOUR=9,13;BYMINUTE=0,30;COUNT=6");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 9, 0, 0),
            dt(1997, 9, 2, 9, 30, 0),
            dt(1997, 9, 2, 13, 0, 0),
            dt(1997, 9, 2, 13, 30, 0),
            dt(1997, 9, 3, 9, 0, 0),
            dt(1997, 9, 3, 9, 30, 0),
        ]
    );
}
