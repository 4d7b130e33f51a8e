// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rule::{Frequency, Rule};
use jiff::civil;

use crate::iter::repeat_cycles;
use crate::iter::utils::days_in_month;

/// The counter left the supported civil range, or a sub-day scan exhausted
/// its cycle bound without finding an admissible time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CounterExhausted;

/// The iterator's mutable calendar position.
///
/// Fields are wide integers: advancement may push a field past its calendar
/// range (day 40, hour 30), after which the divmod cascades normalize back
/// into a real (year, month, day, hour, minute, second).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counter {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl From<civil::DateTime> for Counter {
    fn from(dt: civil::DateTime) -> Self {
        Self {
            year: i32::from(dt.year()),
            month: i32::from(dt.month()),
            day: i32::from(dt.day()),
            hour: i32::from(dt.hour()),
            minute: i32::from(dt.minute()),
            second: i32::from(dt.second()),
        }
    }
}

impl Counter {
    /// Advances to the start of the next interval.
    ///
    /// For sub-day frequencies this scans forward until the time satisfies
    /// the applicable BY time sets, bounded by the frequency's cycle count.
    /// `day_set_empty` signals that the whole current day was filtered out,
    /// letting the scan jump to the last cycle before midnight instead of
    /// stepping through a dead day.
    pub fn increment(&mut self, rule: &Rule, day_set_empty: bool) -> Result<(), CounterExhausted> {
        let interval = rule.interval;
        match rule.freq {
            Frequency::Yearly => {
                self.year += interval;
                self.check_year()?;
            }
            Frequency::Monthly => {
                self.month += interval;
                if self.month > 12 {
                    self.year += (self.month - 1) / 12;
                    self.month = (self.month - 1) % 12 + 1;
                    self.check_year()?;
                }
            }
            Frequency::Weekly => {
                self.day += interval * 7;
                self.normalize_day()?;
            }
            Frequency::Daily => {
                self.day += interval;
                self.normalize_day()?;
            }
            Frequency::Hourly => {
                if day_set_empty {
                    self.hour += (23 - self.hour) / interval * interval;
                }
                let mut cycles = 0;
                loop {
                    self.hour += interval;
                    self.carry_hours()?;
                    if rule.by_hour.is_empty() || rule.by_hour.contains(&(self.hour as i8)) {
                        break;
                    }
                    cycles += 1;
                    if cycles >= repeat_cycles(Frequency::Hourly) {
                        return Err(CounterExhausted);
                    }
                }
            }
            Frequency::Minutely => {
                if day_set_empty {
                    let of_day = self.hour * 60 + self.minute;
                    self.minute += (24 * 60 - 1 - of_day) / interval * interval;
                }
                let mut cycles = 0;
                loop {
                    self.minute += interval;
                    self.carry_minutes()?;
                    if (rule.by_hour.is_empty() || rule.by_hour.contains(&(self.hour as i8)))
                        && (rule.by_minute.is_empty()
                            || rule.by_minute.contains(&(self.minute as i8)))
                    {
                        break;
                    }
                    cycles += 1;
                    if cycles >= repeat_cycles(Frequency::Minutely) {
                        return Err(CounterExhausted);
                    }
                }
            }
            Frequency::Secondly => {
                if day_set_empty {
                    let of_day = (self.hour * 60 + self.minute) * 60 + self.second;
                    self.second += (24 * 60 * 60 - 1 - of_day) / interval * interval;
                }
                let mut cycles = 0;
                loop {
                    self.second += interval;
                    let carry = self.second.div_euclid(60);
                    if carry != 0 {
                        self.second = self.second.rem_euclid(60);
                        self.minute += carry;
                        self.carry_minutes()?;
                    }
                    if (rule.by_hour.is_empty() || rule.by_hour.contains(&(self.hour as i8)))
                        && (rule.by_minute.is_empty()
                            || rule.by_minute.contains(&(self.minute as i8)))
                        && (rule.by_second.is_empty()
                            || rule.by_second.contains(&(self.second as i8)))
                    {
                        break;
                    }
                    cycles += 1;
                    if cycles >= repeat_cycles(Frequency::Secondly) {
                        return Err(CounterExhausted);
                    }
                }
            }
        }
        Ok(())
    }

    fn carry_minutes(&mut self) -> Result<(), CounterExhausted> {
        let carry = self.minute.div_euclid(60);
        if carry != 0 {
            self.minute = self.minute.rem_euclid(60);
            self.hour += carry;
            self.carry_hours()?;
        }
        Ok(())
    }

    fn carry_hours(&mut self) -> Result<(), CounterExhausted> {
        let carry = self.hour.div_euclid(24);
        if carry != 0 {
            self.hour = self.hour.rem_euclid(24);
            self.day += carry;
            self.normalize_day()?;
        }
        Ok(())
    }

    /// Rolls an oversized day into the following months and years.
    fn normalize_day(&mut self) -> Result<(), CounterExhausted> {
        loop {
            self.check_year()?;
            let len = days_in_month(self.year, self.month);
            if self.day <= len {
                return Ok(());
            }
            self.day -= len;
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }
    }

    fn check_year(&self) -> Result<(), CounterExhausted> {
        // jiff's civil range ends at year 9999.
        if self.year > 9999 {
            Err(CounterExhausted)
        } else {
            Ok(())
        }
    }
}
