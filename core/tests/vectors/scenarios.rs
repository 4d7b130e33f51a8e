// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core expansion scenarios covering each frequency gear of the engine:
//! plain daily counting, yearly month filters, nth-weekday masks, negative
//! month days, positional selection, ISO week numbers, and WKST-sensitive
//! bi-weekly pairing.

use crate::common::{dates, dt, recurrence};

#[test]
fn daily_count_three() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;COUNT=3");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1997, 9, 2, 9, 0, 0),
            dt(1997, 9, 3, 9, 0, 0),
            dt(1997, 9, 4, 9, 0, 0),
        ]
    );
}

#[test]
fn yearly_in_january_february_march() {
    // DTSTART itself satisfies September only; the first six matches fall in
    // the following two years, on DTSTART's day-of-month.
    let rule = recurrence("DTSTART=19970902T090000;FREQ=YEARLY;BYMONTH=1,2,3;COUNT=6");
    assert_eq!(
        rule.all().unwrap(),
        vec![
            dt(1998, 1, 2, 9, 0, 0),
            dt(1998, 2, 2, 9, 0, 0),
            dt(1998, 3, 2, 9, 0, 0),
            dt(1999, 1, 2, 9, 0, 0),
            dt(1999, 2, 2, 9, 0, 0),
            dt(1999, 3, 2, 9, 0, 0),
        ]
    );
}

#[test]
fn yearly_first_and_last_monday_of_january() {
    let rule = recurrence("DTSTART=19970101T090000;FREQ=YEARLY;BYMONTH=1;BYDAY=1MO,-1MO;COUNT=4");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 1, 6), (1997, 1, 27), (1998, 1, 5), (1998, 1, 26)]
    );
}

#[test]
fn monthly_last_day_of_month() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=MONTHLY;BYMONTHDAY=-1;COUNT=3");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 9, 30), (1997, 10, 31), (1997, 11, 30)]
    );
}

#[test]
fn monthly_third_of_tuesday_wednesday_thursday() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=MONTHLY;BYDAY=TU,WE,TH;BYSETPOS=3;COUNT=3");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 9, 4), (1997, 10, 7), (1997, 11, 6)]
    );
}

#[test]
fn yearly_monday_of_week_twenty() {
    let rule = recurrence("DTSTART=19970101T090000;FREQ=YEARLY;BYWEEKNO=20;BYDAY=MO;COUNT=3");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 5, 12), (1998, 5, 11), (1999, 5, 17)]
    );
}

#[test]
fn biweekly_wkst_decides_interval_pairing() {
    // With WKST=SU, Tuesday and the following Thursday share a week, so the
    // pair lands in the same on-interval; the next pair is two weeks out.
    let rule =
        recurrence("DTSTART=19970902T090000;FREQ=WEEKLY;INTERVAL=2;WKST=SU;BYDAY=TU,TH;COUNT=4");
    assert_eq!(
        dates(&rule.all().unwrap()),
        vec![(1997, 9, 2), (1997, 9, 4), (1997, 9, 16), (1997, 9, 18)]
    );
}

#[test]
fn biweekly_wkst_monday_versus_sunday() {
    // RFC 5545's WKST example: the same rule flips pairs when the week
    // start moves from Monday to Sunday.
    let monday =
        recurrence("DTSTART=19970805T090000;FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=MO");
    assert_eq!(
        dates(&monday.all().unwrap()),
        vec![(1997, 8, 5), (1997, 8, 10), (1997, 8, 19), (1997, 8, 24)]
    );

    let sunday =
        recurrence("DTSTART=19970805T090000;FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=SU");
    assert_eq!(
        dates(&sunday.all().unwrap()),
        vec![(1997, 8, 5), (1997, 8, 17), (1997, 8, 19), (1997, 8, 31)]
    );
}
