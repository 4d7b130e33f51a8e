// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence frequency.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::keyword::{
    KW_FREQ, KW_FREQ_DAILY, KW_FREQ_HOURLY, KW_FREQ_MINUTELY, KW_FREQ_MONTHLY, KW_FREQ_SECONDLY,
    KW_FREQ_WEEKLY, KW_FREQ_YEARLY,
};

/// Recurrence frequency, ordered from shortest to longest period.
///
/// The ordering is load-bearing: `freq >= Daily` selects the cached timeset,
/// `freq > Hourly` triggers the BYHOUR default, and the sub-day advancement
/// paths apply to `freq <= Hourly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(missing_docs)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// The RFC 5545 token for this frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Frequency::Secondly => KW_FREQ_SECONDLY,
            Frequency::Minutely => KW_FREQ_MINUTELY,
            Frequency::Hourly => KW_FREQ_HOURLY,
            Frequency::Daily => KW_FREQ_DAILY,
            Frequency::Weekly => KW_FREQ_WEEKLY,
            Frequency::Monthly => KW_FREQ_MONTHLY,
            Frequency::Yearly => KW_FREQ_YEARLY,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KW_FREQ_SECONDLY => Ok(Frequency::Secondly),
            KW_FREQ_MINUTELY => Ok(Frequency::Minutely),
            KW_FREQ_HOURLY => Ok(Frequency::Hourly),
            KW_FREQ_DAILY => Ok(Frequency::Daily),
            KW_FREQ_WEEKLY => Ok(Frequency::Weekly),
            KW_FREQ_MONTHLY => Ok(Frequency::Monthly),
            KW_FREQ_YEARLY => Ok(Frequency::Yearly),
            _ => Err(ValidationError::InvalidValue {
                part: KW_FREQ,
                value: value.to_owned(),
            }),
        }
    }
}
