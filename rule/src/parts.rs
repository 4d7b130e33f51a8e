// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The raw key-value record a rule is built from.

use std::collections::BTreeMap;
use std::str::FromStr;

use jiff::civil;

use crate::error::ValidationError;
use crate::rule::Rule;

/// A value supplied for a single rule part.
///
/// Hosts may hand over whatever shape they already have: RFC 5545 string
/// forms, plain integers, integer lists, or civil timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    /// String form, e.g. `"DAILY"`, `"1MO,-1MO"`, `"19970902T090000"`.
    Text(String),
    /// A single integer, e.g. an INTERVAL or a seconds-since-epoch DTSTART.
    Int(i64),
    /// An integer list for the numeric BY parts.
    IntList(Vec<i64>),
    /// A civil timestamp for DTSTART or UNTIL.
    Timestamp(civil::DateTime),
}

impl From<&str> for PartValue {
    fn from(value: &str) -> Self {
        PartValue::Text(value.to_owned())
    }
}

impl From<String> for PartValue {
    fn from(value: String) -> Self {
        PartValue::Text(value)
    }
}

impl From<i64> for PartValue {
    fn from(value: i64) -> Self {
        PartValue::Int(value)
    }
}

impl From<i32> for PartValue {
    fn from(value: i32) -> Self {
        PartValue::Int(i64::from(value))
    }
}

impl From<Vec<i64>> for PartValue {
    fn from(value: Vec<i64>) -> Self {
        PartValue::IntList(value)
    }
}

impl From<civil::DateTime> for PartValue {
    fn from(value: civil::DateTime) -> Self {
        PartValue::Timestamp(value)
    }
}

/// The raw rule record: uppercase RFC 5545 rule-part names mapped to values.
///
/// Build one with [`RuleParts::set`] or parse the textual
/// `KEY=VALUE;KEY=VALUE` form, then validate it into a [`Rule`]:
///
/// ```
/// use cadence_rule::{Rule, RuleParts};
///
/// let rule: Rule = "DTSTART=19970902T090000;FREQ=DAILY;COUNT=3"
///     .parse::<RuleParts>()
///     .and_then(RuleParts::into_rule)
///     .unwrap();
/// assert_eq!(rule.count, Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleParts {
    entries: BTreeMap<String, PartValue>,
}

impl RuleParts {
    /// Creates an empty parts record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a rule part, replacing any previous value. Keys are uppercased.
    #[must_use]
    pub fn set(mut self, key: impl AsRef<str>, value: impl Into<PartValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a rule part in place, replacing any previous value.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<PartValue>) {
        self.entries
            .insert(key.as_ref().to_ascii_uppercase(), value.into());
    }

    pub(crate) fn get(&self, key: &str) -> Option<&PartValue> {
        self.entries.get(key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Validates this record into an immutable [`Rule`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending rule part when any
    /// value is unparseable, out of range, or the cross-part constraints of
    /// RFC 5545 Section 3.3.10 are violated.
    pub fn into_rule(self) -> Result<Rule, ValidationError> {
        Rule::new(&self)
    }
}

impl FromStr for RuleParts {
    type Err = ValidationError;

    /// Parses the textual rule form, e.g.
    /// `DTSTART=19970902T090000;FREQ=WEEKLY;BYDAY=TU,TH`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let mut parts = RuleParts::new();
        for entry in src.split(';') {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                ValidationError::UnknownParts {
                    parts: entry.trim().to_owned(),
                }
            })?;
            let key = key.trim().to_ascii_uppercase();
            if parts.entries.contains_key(&key) {
                return Err(ValidationError::DuplicatePart { part: key });
            }
            parts
                .entries
                .insert(key, PartValue::Text(value.trim().to_owned()));
        }
        Ok(parts)
    }
}

impl TryFrom<RuleParts> for Rule {
    type Error = ValidationError;

    fn try_from(parts: RuleParts) -> Result<Self, Self::Error> {
        parts.into_rule()
    }
}
