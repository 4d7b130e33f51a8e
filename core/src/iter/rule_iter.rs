// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::iter::FusedIterator;

use cadence_rule::{Frequency, Rule};
use jiff::Span;
use jiff::civil;

use crate::iter::counter::Counter;
use crate::iter::iterinfo::IterInfo;
use crate::iter::pos_list::build_pos_list;
use crate::iter::utils::{civil_time, date_from_year_day, pymod};
use crate::iter::{filters, repeat_cycles};

/// Lazy, possibly infinite sequence of a rule's occurrences.
///
/// Occurrences come out in non-decreasing order, each at least DTSTART and
/// at most UNTIL when one is set. The iterator owns all traversal state;
/// the borrowed [`Rule`] is never mutated, so any number of iterators can
/// run over one rule independently.
#[derive(Debug)]
pub struct Occurrences<'r> {
    rule: &'r Rule,
    counter: Counter,
    info: IterInfo<'r>,
    timeset: Vec<(i8, i8, i8)>,
    buffer: VecDeque<civil::DateTime>,
    remaining: Option<u32>,
    finished: bool,
}

impl<'r> Occurrences<'r> {
    pub(crate) fn new(rule: &'r Rule) -> Self {
        let mut start = rule.dt_start;
        let mut finished = false;

        // Weekly iteration walks wkst-aligned weeks, so the first dayset
        // must begin at the week start on or before DTSTART. Days between
        // the aligned start and DTSTART are generated and then skipped by
        // the before-DTSTART check.
        if rule.freq == Frequency::Weekly {
            let back = pymod(
                i32::from(start.weekday().to_monday_zero_offset())
                    - i32::from(rule.wkst.to_monday_zero_offset()),
                7,
            );
            if back > 0 {
                match start.checked_sub(Span::new().days(i64::from(back))) {
                    Ok(aligned) => start = aligned,
                    Err(_) => finished = true,
                }
            }
        }

        let counter = Counter::from(start);
        let info = IterInfo::new(rule, counter.year as i16, counter.month as i8);

        // For sub-day frequencies the first timeset is empty when DTSTART's
        // own time misses the BY time sets, which forces the first advance
        // to scan forward to the first legal time.
        let timeset = if rule.freq <= Frequency::Hourly {
            let (hour, minute, second) =
                (rule.dt_start.hour(), rule.dt_start.minute(), rule.dt_start.second());
            let misses = (!rule.by_hour.is_empty() && !rule.by_hour.contains(&hour))
                || (rule.freq <= Frequency::Minutely
                    && !rule.by_minute.is_empty()
                    && !rule.by_minute.contains(&minute))
                || (rule.freq <= Frequency::Secondly
                    && !rule.by_second.is_empty()
                    && !rule.by_second.contains(&second));
            if misses {
                Vec::new()
            } else {
                info.time_set(hour, minute, second)
            }
        } else {
            rule.timeset.clone()
        };

        Self {
            rule,
            counter,
            info,
            timeset,
            buffer: VecDeque::new(),
            remaining: rule.count,
            finished,
        }
    }

    /// Offers a candidate to the buffer. Returns `true` when iteration must
    /// stop: the candidate passed UNTIL, or it consumed the last COUNT slot.
    /// Candidates before DTSTART are dropped silently; the first pass
    /// produces them for high frequencies and for the weekly pre-alignment.
    fn offer(
        rule: &Rule,
        buffer: &mut VecDeque<civil::DateTime>,
        remaining: &mut Option<u32>,
        candidate: civil::DateTime,
    ) -> bool {
        if matches!(rule.until, Some(until) if candidate > until) {
            // Candidates arrive sorted, so everything after is out too.
            return true;
        }
        if candidate >= rule.dt_start {
            buffer.push_back(candidate);
            if let Some(remaining) = remaining {
                *remaining -= 1;
                if *remaining == 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Runs intervals until the buffer holds at least one occurrence.
    /// Returns `true` when the sequence is over.
    fn generate(&mut self) -> bool {
        if self.finished {
            return true;
        }
        if matches!(self.remaining, Some(0)) {
            return true;
        }

        let rule = self.rule;
        let max_cycles = repeat_cycles(rule.freq.max(Frequency::Daily));
        let mut cycles = 0;

        while self.buffer.is_empty() {
            cycles += 1;
            if cycles > max_cycles {
                tracing::debug!(
                    freq = %rule.freq,
                    max_cycles,
                    "no occurrence within the Gregorian cycle bound, ending sequence"
                );
                return true;
            }

            let day_set: Vec<i32> = self
                .info
                .day_set(
                    self.counter.year as i16,
                    self.counter.month as i8,
                    self.counter.day as i8,
                )
                .into_iter()
                .filter(|&day| !filters::is_filtered(&self.info, day))
                .collect();

            if !rule.by_set_pos.is_empty() && !self.timeset.is_empty() {
                let selected = build_pos_list(
                    rule,
                    &day_set,
                    &self.timeset,
                    self.counter.year as i16,
                );
                for candidate in selected {
                    if Self::offer(rule, &mut self.buffer, &mut self.remaining, candidate) {
                        return true;
                    }
                }
            } else {
                for &day in &day_set {
                    let Some(date) = date_from_year_day(self.counter.year as i16, day) else {
                        return true;
                    };
                    for &(hour, minute, second) in &self.timeset {
                        let candidate = civil::DateTime::from_parts(
                            date,
                            civil_time(hour, minute, second),
                        );
                        if Self::offer(rule, &mut self.buffer, &mut self.remaining, candidate) {
                            return true;
                        }
                    }
                }
            }

            let day_set_empty = day_set.is_empty();
            if self.counter.increment(rule, day_set_empty).is_err() {
                return true;
            }
            if rule.freq <= Frequency::Hourly {
                self.timeset = self.info.time_set(
                    self.counter.hour as i8,
                    self.counter.minute as i8,
                    self.counter.second as i8,
                );
            }
            self.info
                .rebuild(self.counter.year as i16, self.counter.month as i8);
        }

        false
    }
}

impl Iterator for Occurrences<'_> {
    type Item = civil::DateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(dt) = self.buffer.pop_front() {
            return Some(dt);
        }
        if self.finished {
            return None;
        }
        self.finished = self.generate();
        self.buffer.pop_front()
    }
}

impl FusedIterator for Occurrences<'_> {}
