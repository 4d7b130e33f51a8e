// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545 Section 3.3.10.

// Rule parts
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_FREQ: &str = "FREQ";
pub const KW_UNTIL: &str = "UNTIL";
pub const KW_COUNT: &str = "COUNT";
pub const KW_INTERVAL: &str = "INTERVAL";
pub const KW_BYSECOND: &str = "BYSECOND";
pub const KW_BYMINUTE: &str = "BYMINUTE";
pub const KW_BYHOUR: &str = "BYHOUR";
pub const KW_BYDAY: &str = "BYDAY";
pub const KW_BYMONTHDAY: &str = "BYMONTHDAY";
pub const KW_BYYEARDAY: &str = "BYYEARDAY";
pub const KW_BYWEEKNO: &str = "BYWEEKNO";
pub const KW_BYMONTH: &str = "BYMONTH";
pub const KW_BYSETPOS: &str = "BYSETPOS";
pub const KW_WKST: &str = "WKST";

/// Every rule part accepted by [`crate::RuleParts`], in RFC 5545 order.
pub const KNOWN_PARTS: [&str; 15] = [
    KW_DTSTART,
    KW_FREQ,
    KW_UNTIL,
    KW_COUNT,
    KW_INTERVAL,
    KW_BYSECOND,
    KW_BYMINUTE,
    KW_BYHOUR,
    KW_BYDAY,
    KW_BYMONTHDAY,
    KW_BYYEARDAY,
    KW_BYWEEKNO,
    KW_BYMONTH,
    KW_BYSETPOS,
    KW_WKST,
];

// Frequencies
pub const KW_FREQ_SECONDLY: &str = "SECONDLY";
pub const KW_FREQ_MINUTELY: &str = "MINUTELY";
pub const KW_FREQ_HOURLY: &str = "HOURLY";
pub const KW_FREQ_DAILY: &str = "DAILY";
pub const KW_FREQ_WEEKLY: &str = "WEEKLY";
pub const KW_FREQ_MONTHLY: &str = "MONTHLY";
pub const KW_FREQ_YEARLY: &str = "YEARLY";

// Weekdays
pub const KW_DAY_MO: &str = "MO";
pub const KW_DAY_TU: &str = "TU";
pub const KW_DAY_WE: &str = "WE";
pub const KW_DAY_TH: &str = "TH";
pub const KW_DAY_FR: &str = "FR";
pub const KW_DAY_SA: &str = "SA";
pub const KW_DAY_SU: &str = "SU";
