// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! DTSTART/UNTIL/COUNT bounds and termination behavior.

use cadence_core::LogicError;

use crate::common::{dt, recurrence};
use crate::invariants::SAMPLE_RULES;

#[test]
fn occurrences_never_precede_dtstart() {
    for src in SAMPLE_RULES {
        let rule = recurrence(src);
        let start = rule.rule().dt_start;
        assert!(
            rule.all().unwrap().iter().all(|&dt| dt >= start),
            "occurrence before DTSTART for {src}"
        );
    }
}

#[test]
fn occurrences_never_exceed_until() {
    for src in SAMPLE_RULES {
        let rule = recurrence(src);
        let Some(until) = rule.rule().until else {
            continue;
        };
        assert!(
            rule.all().unwrap().iter().all(|&dt| dt <= until),
            "occurrence after UNTIL for {src}"
        );
    }
}

#[test]
fn count_is_exact_when_candidates_exist() {
    for src in SAMPLE_RULES {
        let rule = recurrence(src);
        let Some(count) = rule.rule().count else {
            continue;
        };
        assert_eq!(
            rule.all().unwrap().len(),
            count as usize,
            "COUNT not saturated for {src}"
        );
    }
}

#[test]
fn dtstart_opens_the_sequence_when_it_matches() {
    let cases = [
        "DTSTART=19970902T090000;FREQ=DAILY;COUNT=3",
        "DTSTART=19970902T090000;FREQ=WEEKLY;BYDAY=TU;COUNT=3",
        "DTSTART=19970930T090000;FREQ=MONTHLY;BYMONTHDAY=-1;COUNT=3",
    ];
    for src in cases {
        let rule = recurrence(src);
        assert_eq!(
            rule.all().unwrap().first(),
            Some(&rule.rule().dt_start),
            "DTSTART missing from {src}"
        );
    }
}

#[test]
fn all_refuses_unbounded_rules() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY");
    assert_eq!(rule.all(), Err(LogicError::Unbounded));
    // The lazy iterator still works.
    assert_eq!(rule.occurrences().next(), Some(dt(1997, 9, 2, 9, 0, 0)));
}

#[test]
fn impossible_rules_end_cleanly() {
    // April has 30 days; the rule can never fire, and the Gregorian cycle
    // guard ends the sequence instead of spinning.
    let rule = recurrence("DTSTART=19970902T090000;FREQ=YEARLY;BYMONTH=4;BYMONTHDAY=31;COUNT=1");
    assert!(rule.all().unwrap().is_empty());
}

#[test]
fn until_before_dtstart_yields_nothing() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;UNTIL=19970801T090000");
    assert!(rule.all().unwrap().is_empty());
}
