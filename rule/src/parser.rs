// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsers for rule part values.
//!
//! These grammars cover the string forms a parts record may carry: weekday
//! tokens, prefixed BYDAY entries, signed integer lists, and the RFC 5545
//! basic date / date-time forms. Numeric tokens parse wide on purpose; the
//! validator applies the per-part ranges so an out-of-range value is
//! reported against its rule part rather than as a character-level failure.

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::prelude::*;
use jiff::civil;

use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE,
};

/// A BYDAY entry before range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawByDay {
    /// Unprefixed entry, e.g. `MO`.
    Every(civil::Weekday),
    /// Prefixed entry, e.g. `1MO` or `-2TH`; the prefix is unchecked.
    Nth(i64, civil::Weekday),
}

/// ```txt
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn weekday<'src, I, E>() -> impl Parser<'src, I, civil::Weekday, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just(KW_DAY_SU).to(civil::Weekday::Sunday),
        just(KW_DAY_MO).to(civil::Weekday::Monday),
        just(KW_DAY_TU).to(civil::Weekday::Tuesday),
        just(KW_DAY_WE).to(civil::Weekday::Wednesday),
        just(KW_DAY_TH).to(civil::Weekday::Thursday),
        just(KW_DAY_FR).to(civil::Weekday::Friday),
        just(KW_DAY_SA).to(civil::Weekday::Saturday),
    ))
}

fn is_positive<'src, I, E>() -> impl Parser<'src, I, bool, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|c| !matches!(c, Some('-')))
}

fn digit<'src, I, E>() -> impl Parser<'src, I, i64, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    select! { c @ '0'..='9' => i64::from(c as u8 - b'0') }
}

/// Unsigned integer, at most nine digits so the fold cannot overflow.
fn unsigned_int<'src, I, E>() -> impl Parser<'src, I, i64, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    digit().foldl(digit().repeated().at_most(8), |acc, d| acc * 10 + d)
}

/// ```txt
/// signed-int  = [plus / minus] 1*DIGIT
/// ```
fn signed_int<'src, I, E>() -> impl Parser<'src, I, i64, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    is_positive()
        .then(unsigned_int())
        .map(|(positive, n)| if positive { n } else { -n })
}

/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ```
fn weekday_num<'src, I, E>() -> impl Parser<'src, I, RawByDay, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    signed_int()
        .or_not()
        .then(weekday())
        .map(|(prefix, day)| match prefix {
            Some(n) => RawByDay::Nth(n, day),
            None => RawByDay::Every(day),
        })
}

/// ```txt
/// bywdaylist  = ( weekdaynum *("," weekdaynum) )
/// ```
fn by_day_list<'src, I, E>() -> impl Parser<'src, I, Vec<RawByDay>, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    weekday_num()
        .separated_by(just(','))
        .at_least(1)
        .collect()
        .then_ignore(end())
}

fn int_list<'src, I, E>() -> impl Parser<'src, I, Vec<i64>, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    signed_int()
        .separated_by(just(','))
        .at_least(1)
        .collect()
        .then_ignore(end())
}

/// ```txt
/// date-value  = date-fullyear date-month date-mday
/// ```
///
/// Digits parse freely; calendar validity is checked at materialization.
fn date<'src, I, E>() -> impl Parser<'src, I, (i16, i8, i8), E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    let year = digit()
        .then(digit())
        .then(digit())
        .then(digit())
        .map(|(((a, b), c), d)| (1000 * a + 100 * b + 10 * c + d) as i16);
    let two = digit().then(digit()).map(|(a, b)| (10 * a + b) as i8);

    year.then(two).then(two).map(|((y, m), d)| (y, m, d))
}

/// ```txt
/// date-time   = date ["T" time ["Z"]]
/// ```
///
/// A bare date reads as midnight. A trailing `Z` is tolerated and ignored:
/// this engine works on the civil timeline and leaves zone resolution to
/// the host.
fn date_time<'src, I, E>() -> impl Parser<'src, I, ((i16, i8, i8), (i8, i8, i8)), E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + chumsky::input::ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    let two = digit().then(digit()).map(|(a, b)| (10 * a + b) as i8);
    let time = two.then(two).then(two).map(|((h, m), s)| (h, m, s));

    date()
        .then(
            just('T')
                .ignore_then(time)
                .then_ignore(just('Z').or_not())
                .or_not(),
        )
        .then_ignore(end())
        .map(|(date, time)| (date, time.unwrap_or((0, 0, 0))))
}

/// Parses a WKST-style weekday token.
pub(crate) fn parse_weekday(src: &str) -> Option<civil::Weekday> {
    weekday::<_, extra::Default>()
        .then_ignore(end())
        .parse(src)
        .into_result()
        .ok()
}

/// Parses a comma-separated BYDAY list.
pub(crate) fn parse_by_day_list(src: &str) -> Option<Vec<RawByDay>> {
    by_day_list::<_, extra::Default>()
        .parse(src)
        .into_result()
        .ok()
}

/// Parses a comma-separated signed integer list.
pub(crate) fn parse_int_list(src: &str) -> Option<Vec<i64>> {
    int_list::<_, extra::Default>().parse(src).into_result().ok()
}

/// Parses a DTSTART/UNTIL value: the RFC 5545 basic forms `YYYYMMDD` and
/// `YYYYMMDDTHHMMSS[Z]`, or the ISO 8601 extended forms jiff understands.
pub(crate) fn parse_date_time(src: &str) -> Option<civil::DateTime> {
    if let Ok(((y, mo, d), (h, mi, s))) = date_time::<_, extra::Default>()
        .parse(src)
        .into_result()
    {
        let date = civil::Date::new(y, mo, d).ok()?;
        // Leap second: representable in the rule, clamped on the civil
        // timeline (RFC 5545 Section 3.3.12).
        let s = if s == 60 { 59 } else { s };
        let time = civil::Time::new(h, mi, s, 0).ok()?;
        return Some(civil::DateTime::from_parts(date, time));
    }

    src.parse::<civil::DateTime>()
        .ok()
        .or_else(|| {
            src.parse::<civil::Date>()
                .ok()
                .map(|d| d.to_datetime(civil::Time::midnight()))
        })
}
