// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The validated recurrence rule.

use std::str::FromStr;

use jiff::Zoned;
use jiff::civil::{self, Weekday};

use crate::error::ValidationError;
use crate::frequency::Frequency;
use crate::keyword::{
    KNOWN_PARTS, KW_BYDAY, KW_BYHOUR, KW_BYMINUTE, KW_BYMONTH, KW_BYMONTHDAY, KW_BYSECOND,
    KW_BYSETPOS, KW_BYWEEKNO, KW_BYYEARDAY, KW_COUNT, KW_DTSTART, KW_FREQ, KW_INTERVAL, KW_UNTIL,
    KW_WKST,
};
use crate::parser::{RawByDay, parse_by_day_list, parse_date_time, parse_int_list, parse_weekday};
use crate::parts::{PartValue, RuleParts};
use crate::weekday::NthWeekday;

/// A validated, immutable recurrence rule.
///
/// All BY sets are range-checked, sorted, and deduplicated; the
/// DTSTART-derived defaults of RFC 5545 Section 3.3.10 are already applied.
/// A `Rule` never changes after construction and may be shared freely
/// between iterators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// First instant of the recurrence; seeds the defaulted BY parts.
    pub dt_start: civil::DateTime,
    /// Recurrence frequency.
    pub freq: Frequency,
    /// Positive multiplier between consecutive intervals.
    pub interval: i32,
    /// Week start day, default Monday.
    pub wkst: Weekday,
    /// Inclusive upper bound, mutually exclusive with `count`.
    pub until: Option<civil::DateTime>,
    /// Maximum number of occurrences, mutually exclusive with `until`.
    pub count: Option<u32>,
    /// Months 1..=12.
    pub by_month: Vec<i8>,
    /// ISO week numbers, ±1..=53, only with FREQ=YEARLY.
    pub by_week_no: Vec<i8>,
    /// Days of the year, ±1..=366.
    pub by_year_day: Vec<i16>,
    /// Positive month days 1..=31.
    pub by_month_day: Vec<i8>,
    /// Negative month days -31..=-1, counted from the end of the month.
    pub by_n_month_day: Vec<i8>,
    /// Unprefixed BYDAY entries.
    pub by_weekday: Vec<Weekday>,
    /// Prefixed BYDAY entries, only with FREQ=MONTHLY or FREQ=YEARLY.
    pub by_nth_weekday: Vec<NthWeekday>,
    /// Hours 0..=23.
    pub by_hour: Vec<i8>,
    /// Minutes 0..=59.
    pub by_minute: Vec<i8>,
    /// Seconds 0..=60 (60 for a leap second).
    pub by_second: Vec<i8>,
    /// Positional selections per interval, ±1..=366.
    pub by_set_pos: Vec<i16>,
    /// Cartesian product hour x minute x second, cached for `freq >= Daily`.
    pub timeset: Vec<(i8, i8, i8)>,
}

impl Rule {
    /// Validates a parts record into a `Rule`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending rule part.
    pub fn new(parts: &RuleParts) -> Result<Self, ValidationError> {
        let unknown: Vec<&str> = parts
            .keys()
            .filter(|key| !KNOWN_PARTS.contains(key))
            .collect();
        if !unknown.is_empty() {
            return Err(ValidationError::UnknownParts {
                parts: unknown.join(", "),
            });
        }

        let freq = match parts.get(KW_FREQ) {
            Some(PartValue::Text(s)) => s.parse::<Frequency>()?,
            Some(value) => return Err(invalid(KW_FREQ, value)),
            None => return Err(ValidationError::MissingFrequency),
        };

        let interval = match parts.get(KW_INTERVAL) {
            None => 1,
            Some(value) => positive_int(KW_INTERVAL, value)?,
        };

        let wkst = match parts.get(KW_WKST) {
            None => Weekday::Monday,
            Some(PartValue::Text(s)) => {
                parse_weekday(s).ok_or_else(|| invalid(KW_WKST, s))?
            }
            Some(value) => return Err(invalid(KW_WKST, value)),
        };

        let dt_start = match parts.get(KW_DTSTART) {
            None => Zoned::now().datetime(),
            Some(value) => date_time_value(KW_DTSTART, value)?,
        };
        let until = match parts.get(KW_UNTIL) {
            None => None,
            Some(value) => Some(date_time_value(KW_UNTIL, value)?),
        };
        let count = match parts.get(KW_COUNT) {
            None => None,
            Some(value) => Some(positive_int(KW_COUNT, value)? as u32),
        };
        if count.is_some() && until.is_some() {
            return Err(ValidationError::CountUntilExclusive);
        }

        let mut by_month: Vec<i8> = ranged_set(parts, KW_BYMONTH, |v| (1..=12).contains(&v), "1..=12")?
            .into_iter()
            .map(|v: i64| v as i8)
            .collect();
        let by_week_no: Vec<i8> = ranged_set(
            parts,
            KW_BYWEEKNO,
            |v| v != 0 && v.abs() <= 53,
            "a nonzero value in +/-1..=53",
        )?
        .into_iter()
        .map(|v: i64| v as i8)
        .collect();
        let by_year_day: Vec<i16> = ranged_set(
            parts,
            KW_BYYEARDAY,
            |v| v != 0 && v.abs() <= 366,
            "a nonzero value in +/-1..=366",
        )?
        .into_iter()
        .map(|v: i64| v as i16)
        .collect();
        let by_set_pos: Vec<i16> = ranged_set(
            parts,
            KW_BYSETPOS,
            |v| v != 0 && v.abs() <= 366,
            "a nonzero value in +/-1..=366",
        )?
        .into_iter()
        .map(|v: i64| v as i16)
        .collect();

        // BYMONTHDAY splits into positive and negative buckets; a day matches
        // when either bucket does.
        let mut by_month_day = Vec::new();
        let mut by_n_month_day = Vec::new();
        for value in ranged_set(
            parts,
            KW_BYMONTHDAY,
            |v| v != 0 && v.abs() <= 31,
            "a nonzero value in +/-1..=31",
        )? {
            if value > 0 {
                by_month_day.push(value as i8);
            } else {
                by_n_month_day.push(value as i8);
            }
        }

        let mut by_hour: Vec<i8> = ranged_set(parts, KW_BYHOUR, |v| (0..=23).contains(&v), "0..=23")?
            .into_iter()
            .map(|v: i64| v as i8)
            .collect();
        let mut by_minute: Vec<i8> =
            ranged_set(parts, KW_BYMINUTE, |v| (0..=59).contains(&v), "0..=59")?
                .into_iter()
                .map(|v: i64| v as i8)
                .collect();
        let mut by_second: Vec<i8> =
            ranged_set(parts, KW_BYSECOND, |v| (0..=60).contains(&v), "0..=60")?
                .into_iter()
                .map(|v: i64| v as i8)
                .collect();

        let mut by_weekday = Vec::new();
        let mut by_nth_weekday = Vec::new();
        if let Some(value) = parts.get(KW_BYDAY) {
            let PartValue::Text(s) = value else {
                return Err(invalid(KW_BYDAY, value));
            };
            for entry in parse_by_day_list(s).ok_or_else(|| invalid(KW_BYDAY, s))? {
                match entry {
                    RawByDay::Every(weekday) => by_weekday.push(weekday),
                    RawByDay::Nth(nth, weekday) => {
                        if nth == 0 || nth.abs() > 53 {
                            return Err(ValidationError::OutOfRange {
                                part: KW_BYDAY,
                                value: nth,
                                range: "a nonzero prefix in +/-1..=53",
                            });
                        }
                        by_nth_weekday.push(NthWeekday::new(nth as i8, weekday));
                    }
                }
            }
        }

        // Cross-part constraints (RFC 5545 Section 3.3.10 notes).
        if !by_nth_weekday.is_empty() {
            if !matches!(freq, Frequency::Monthly | Frequency::Yearly) {
                return Err(ValidationError::IncompatibleFrequency {
                    part: KW_BYDAY,
                    freq,
                });
            }
            if freq == Frequency::Yearly && !by_week_no.is_empty() {
                return Err(ValidationError::NthByDayWithWeekNo);
            }
        }
        if freq == Frequency::Weekly && !(by_month_day.is_empty() && by_n_month_day.is_empty()) {
            return Err(ValidationError::IncompatibleFrequency {
                part: KW_BYMONTHDAY,
                freq,
            });
        }
        if matches!(
            freq,
            Frequency::Daily | Frequency::Weekly | Frequency::Monthly
        ) && !by_year_day.is_empty()
        {
            return Err(ValidationError::IncompatibleFrequency {
                part: KW_BYYEARDAY,
                freq,
            });
        }
        if freq != Frequency::Yearly && !by_week_no.is_empty() {
            return Err(ValidationError::IncompatibleFrequency {
                part: KW_BYWEEKNO,
                freq,
            });
        }
        if !by_set_pos.is_empty() {
            let has_other = [
                KW_BYSECOND,
                KW_BYMINUTE,
                KW_BYHOUR,
                KW_BYDAY,
                KW_BYMONTHDAY,
                KW_BYYEARDAY,
                KW_BYWEEKNO,
                KW_BYMONTH,
            ]
            .iter()
            .any(|key| parts.get(key).is_some());
            if !has_other {
                return Err(ValidationError::BySetPosWithoutByParts);
            }
        }

        // Defaults seeded from DTSTART when no day-selecting part is given.
        if by_week_no.is_empty()
            && by_year_day.is_empty()
            && by_month_day.is_empty()
            && by_n_month_day.is_empty()
            && by_weekday.is_empty()
            && by_nth_weekday.is_empty()
        {
            match freq {
                Frequency::Yearly => {
                    if by_month.is_empty() {
                        by_month.push(dt_start.month());
                    }
                    by_month_day.push(dt_start.day());
                }
                Frequency::Monthly => by_month_day.push(dt_start.day()),
                Frequency::Weekly => by_weekday.push(dt_start.weekday()),
                _ => {}
            }
        }
        if by_hour.is_empty() && freq > Frequency::Hourly {
            by_hour.push(dt_start.hour());
        }
        if by_minute.is_empty() && freq > Frequency::Minutely {
            by_minute.push(dt_start.minute());
        }
        if by_second.is_empty() && freq > Frequency::Secondly {
            by_second.push(dt_start.second());
        }

        let mut rule = Rule {
            dt_start,
            freq,
            interval,
            wkst,
            until,
            count,
            by_month,
            by_week_no,
            by_year_day,
            by_month_day,
            by_n_month_day,
            by_weekday,
            by_nth_weekday,
            by_hour,
            by_minute,
            by_second,
            by_set_pos,
            timeset: Vec::new(),
        };
        rule.canonicalize();
        Ok(rule)
    }

    /// Sorts and deduplicates every BY set, then caches the timeset for
    /// day-or-longer frequencies. Sorted sets make the emission order of an
    /// interval the enumeration order.
    fn canonicalize(&mut self) {
        self.by_month.sort_unstable();
        self.by_month.dedup();
        self.by_week_no.sort_unstable();
        self.by_week_no.dedup();
        self.by_year_day.sort_unstable();
        self.by_year_day.dedup();
        self.by_month_day.sort_unstable();
        self.by_month_day.dedup();
        self.by_n_month_day.sort_unstable();
        self.by_n_month_day.dedup();
        self.by_weekday
            .sort_unstable_by_key(|w| w.to_monday_zero_offset());
        self.by_weekday.dedup();
        self.by_nth_weekday.sort_unstable();
        self.by_nth_weekday.dedup();
        self.by_hour.sort_unstable();
        self.by_hour.dedup();
        self.by_minute.sort_unstable();
        self.by_minute.dedup();
        self.by_second.sort_unstable();
        self.by_second.dedup();
        self.by_set_pos.sort_unstable();
        self.by_set_pos.dedup();

        if self.freq >= Frequency::Daily {
            let mut timeset = Vec::with_capacity(
                self.by_hour.len() * self.by_minute.len() * self.by_second.len(),
            );
            for &hour in &self.by_hour {
                for &minute in &self.by_minute {
                    for &second in &self.by_second {
                        timeset.push((hour, minute, second));
                    }
                }
            }
            self.timeset = timeset;
        }
    }

    /// Whether the rule terminates on its own (COUNT or UNTIL is set).
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.count.is_some() || self.until.is_some()
    }
}

impl FromStr for Rule {
    type Err = ValidationError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        src.parse::<RuleParts>()?.into_rule()
    }
}

fn describe(value: &PartValue) -> String {
    match value {
        PartValue::Text(s) => s.clone(),
        PartValue::Int(n) => n.to_string(),
        PartValue::IntList(ns) => format!("{ns:?}"),
        PartValue::Timestamp(dt) => dt.to_string(),
    }
}

fn invalid(part: &'static str, value: &(impl ToInvalidValue + ?Sized)) -> ValidationError {
    ValidationError::InvalidValue {
        part,
        value: value.to_invalid_value(),
    }
}

trait ToInvalidValue {
    fn to_invalid_value(&self) -> String;
}

impl ToInvalidValue for str {
    fn to_invalid_value(&self) -> String {
        self.to_owned()
    }
}

impl ToInvalidValue for String {
    fn to_invalid_value(&self) -> String {
        self.clone()
    }
}

impl ToInvalidValue for PartValue {
    fn to_invalid_value(&self) -> String {
        describe(self)
    }
}

/// A strictly positive integer (INTERVAL, COUNT).
fn positive_int(part: &'static str, value: &PartValue) -> Result<i32, ValidationError> {
    let n = match value {
        PartValue::Int(n) => *n,
        PartValue::Text(s) => parse_int_list(s)
            .filter(|values| values.len() == 1)
            .map(|values| values[0])
            .ok_or_else(|| invalid(part, s.as_str()))?,
        _ => return Err(invalid(part, value)),
    };
    if n < 1 || i32::try_from(n).is_err() {
        return Err(ValidationError::OutOfRange {
            part,
            value: n,
            range: "a positive integer",
        });
    }
    Ok(n as i32)
}

fn date_time_value(
    part: &'static str,
    value: &PartValue,
) -> Result<civil::DateTime, ValidationError> {
    match value {
        PartValue::Timestamp(dt) => Ok(*dt),
        PartValue::Int(seconds) => jiff::Timestamp::from_second(*seconds)
            .map(|ts| ts.to_zoned(jiff::tz::TimeZone::UTC).datetime())
            .map_err(|_| invalid(part, value)),
        PartValue::Text(s) => parse_date_time(s).ok_or_else(|| invalid(part, s.as_str())),
        PartValue::IntList(_) => Err(invalid(part, value)),
    }
}

/// Reads an integer-set part, applying the part's range to every element.
fn ranged_set(
    parts: &RuleParts,
    part: &'static str,
    in_range: impl Fn(i64) -> bool,
    range: &'static str,
) -> Result<Vec<i64>, ValidationError> {
    let Some(value) = parts.get(part) else {
        return Ok(Vec::new());
    };
    let values = match value {
        PartValue::Int(n) => vec![*n],
        PartValue::IntList(ns) => ns.clone(),
        PartValue::Text(s) => parse_int_list(s).ok_or_else(|| invalid(part, s.as_str()))?,
        PartValue::Timestamp(_) => return Err(invalid(part, value)),
    };
    for &value in &values {
        if !in_range(value) {
            return Err(ValidationError::OutOfRange { part, value, range });
        }
    }
    Ok(values)
}
