// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Emission order and the equivalence of the query surfaces.

use crate::common::recurrence;
use crate::invariants::SAMPLE_RULES;

#[test]
fn occurrences_are_monotonic() {
    for src in SAMPLE_RULES {
        let rule = recurrence(src);
        let all = rule.all().unwrap();
        assert!(
            all.windows(2).all(|pair| pair[0] <= pair[1]),
            "out-of-order emission for {src}: {all:?}"
        );
    }
}

#[test]
fn lazy_iteration_matches_all() {
    for src in SAMPLE_RULES {
        let rule = recurrence(src);
        let all = rule.all().unwrap();
        let lazy: Vec<_> = rule.occurrences().take(all.len() + 5).collect();
        assert_eq!(lazy, all, "iterator and all() disagree for {src}");
    }
}

#[test]
fn between_equals_filtered_iteration() {
    for src in SAMPLE_RULES {
        let rule = recurrence(src);
        let all = rule.all().unwrap();
        if all.len() < 3 {
            continue;
        }
        let begin = all[1];
        let end = all[all.len() - 2];
        let expected: Vec<_> = all
            .iter()
            .copied()
            .filter(|&dt| dt >= begin && dt <= end)
            .collect();
        assert_eq!(rule.between(begin, end), expected, "for {src}");
    }
}

#[test]
fn between_is_inclusive_on_both_ends() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;COUNT=5");
    let all = rule.all().unwrap();
    assert_eq!(rule.between(all[0], all[4]), all);
}

#[test]
fn independent_iterators_share_one_rule() {
    let rule = recurrence("DTSTART=19970902T090000;FREQ=DAILY;COUNT=5");
    let mut first = rule.occurrences();
    let mut second = rule.occurrences();
    first.next();
    first.next();
    // The second iterator is unaffected by the first one's progress.
    assert_eq!(second.next(), Some(jiff::civil::datetime(1997, 9, 2, 9, 0, 0, 0)));
}
