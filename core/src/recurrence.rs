// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use cadence_rule::{Frequency, Rule, RuleParts, ValidationError};
use jiff::Unit;
use jiff::civil;

use crate::error::LogicError;
use crate::iter::utils::pymod;
use crate::iter::{IterInfo, Occurrences, filters};

/// A validated rule bound to the expansion engine.
///
/// ```
/// use cadence_core::Recurrence;
///
/// let daily: Recurrence = "DTSTART=19970902T090000;FREQ=DAILY;COUNT=3"
///     .parse()
///     .unwrap();
/// let dates = daily.all().unwrap();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], jiff::civil::datetime(1997, 9, 2, 9, 0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    rule: Rule,
}

impl Recurrence {
    /// Validates a parts record and binds it to the engine.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending rule part.
    pub fn new(parts: RuleParts) -> Result<Self, ValidationError> {
        Ok(Self {
            rule: parts.into_rule()?,
        })
    }

    /// The underlying validated rule.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Lazily iterates the rule's occurrences, in order. The sequence is
    /// infinite when the rule has neither COUNT nor UNTIL.
    #[must_use]
    pub fn occurrences(&self) -> Occurrences<'_> {
        Occurrences::new(&self.rule)
    }

    /// Collects every occurrence of a bounded rule.
    ///
    /// # Errors
    ///
    /// [`LogicError::Unbounded`] when the rule has neither COUNT nor UNTIL.
    pub fn all(&self) -> Result<Vec<civil::DateTime>, LogicError> {
        if !self.rule.is_bounded() {
            return Err(LogicError::Unbounded);
        }
        Ok(self.occurrences().collect())
    }

    /// The occurrences within `[begin, end]`, inclusive on both ends.
    /// Monotonic emission lets this stop at the first occurrence past `end`.
    #[must_use]
    pub fn between(&self, begin: civil::DateTime, end: civil::DateTime) -> Vec<civil::DateTime> {
        self.occurrences()
            .skip_while(|&dt| dt < begin)
            .take_while(|&dt| dt <= end)
            .collect()
    }

    /// Whether `instant` is an occurrence of the rule.
    ///
    /// Runs a direct check (bounds, BY filters through the year masks, and
    /// the frequency/interval alignment) except when COUNT or BYSETPOS is
    /// set: those make membership a global property, so the answer comes
    /// from bounded enumeration instead.
    #[must_use]
    pub fn contains(&self, instant: civil::DateTime) -> bool {
        let rule = &self.rule;
        if instant < rule.dt_start {
            return false;
        }
        if matches!(rule.until, Some(until) if instant > until) {
            return false;
        }

        if rule.count.is_some() || !rule.by_set_pos.is_empty() {
            for occurrence in self.occurrences() {
                if occurrence == instant {
                    return true;
                }
                if occurrence > instant {
                    return false;
                }
            }
            return false;
        }

        if !rule.by_hour.is_empty() && !rule.by_hour.contains(&instant.hour()) {
            return false;
        }
        if !rule.by_minute.is_empty() && !rule.by_minute.contains(&instant.minute()) {
            return false;
        }
        if !rule.by_second.is_empty() && !rule.by_second.contains(&instant.second()) {
            return false;
        }

        let info = IterInfo::new(rule, instant.year(), instant.month());
        let year_day = i32::from(instant.date().day_of_year()) - 1;
        if filters::is_filtered(&info, year_day) {
            return false;
        }

        self.aligns_with_interval(instant)
    }

    /// The frequency/interval modular check: `instant` must fall a whole
    /// number of intervals after DTSTART, measured in the frequency's unit.
    fn aligns_with_interval(&self, instant: civil::DateTime) -> bool {
        let rule = &self.rule;
        let start = rule.dt_start;
        let interval = rule.interval;

        let day_diff = || {
            start
                .date()
                .until(instant.date())
                .map(|span| span.get_days())
        };

        match rule.freq {
            Frequency::Yearly => {
                (i32::from(instant.year()) - i32::from(start.year())) % interval == 0
            }
            Frequency::Monthly => {
                let months = (i32::from(instant.year()) - i32::from(start.year())) * 12
                    + (i32::from(instant.month()) - i32::from(start.month()));
                months % interval == 0
            }
            Frequency::Weekly => {
                let Ok(days) = day_diff() else { return false };
                let shift = pymod(
                    i32::from(start.weekday().to_monday_zero_offset())
                        - i32::from(rule.wkst.to_monday_zero_offset()),
                    7,
                );
                ((days + shift) / 7) % interval == 0
            }
            Frequency::Daily => {
                let Ok(days) = day_diff() else { return false };
                days % interval == 0
            }
            Frequency::Hourly => match start.until((Unit::Hour, instant)) {
                Ok(span) => span.get_hours() % i32::from(interval) == 0,
                Err(_) => false,
            },
            Frequency::Minutely => match start.until((Unit::Minute, instant)) {
                Ok(span) => span.get_minutes() % i64::from(interval) == 0,
                Err(_) => false,
            },
            Frequency::Secondly => match start.until((Unit::Second, instant)) {
                Ok(span) => span.get_seconds() % i64::from(interval) == 0,
                Err(_) => false,
            },
        }
    }
}

impl From<Rule> for Recurrence {
    fn from(rule: Rule) -> Self {
        Self { rule }
    }
}

impl FromStr for Recurrence {
    type Err = ValidationError;

    /// Parses the textual rule form, e.g.
    /// `DTSTART=19970902T090000;FREQ=WEEKLY;BYDAY=TU,TH;COUNT=4`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            rule: src.parse::<Rule>()?,
        })
    }
}
