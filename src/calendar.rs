// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar ⇄ Julian Day conversion.
//!
//! [`CivilDateTime`] holds UTC calendar fields down to the millisecond.
//! Conversion to a Julian Day follows Meeus, *Astronomical Algorithms*
//! ch. 7: dates on or after 1582-10-15 are Gregorian, dates on or before
//! 1582-10-04 are Julian, and the ten days in between do not exist.
//!
//! All fields are UTC.  Callers holding local wall-clock time must
//! normalise it to UTC first (e.g. through `chrono`).

use chrono::{DateTime, Datelike, Timelike, Utc};
use qtty::Days;

use crate::error::{Result, SunTimesError};
use crate::JulianDate;

/// First civil JD (integer part at 0h) that uses the Gregorian rule: 1582-10-15.
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A civil calendar instant in UTC with millisecond resolution.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl CivilDateTime {
    /// Build a civil instant, validating every field.
    ///
    /// February 29 is accepted in Julian leap years up to 1582-10-04 and in
    /// Gregorian leap years afterwards.  Days inside the reform gap are
    /// accepted here and rejected by [`to_julian_day`](Self::to_julian_day).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SunTimesError::InvalidCivilDate(format!(
                "month {month} not in 1..=12"
            )));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(SunTimesError::InvalidCivilDate(format!(
                "day {day} not in 1..={last} for {year:04}-{month:02}"
            )));
        }
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(SunTimesError::InvalidCivilDate(format!(
                "time {hour:02}:{minute:02}:{second:02}.{millisecond:03} out of range"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Midnight UTC of the given date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// Julian Day of this instant.
    ///
    /// January and February are counted as months 13 and 14 of the previous
    /// year; the century term `B` is applied only from 1582-10-15 onwards.
    ///
    /// # Errors
    /// [`SunTimesError::InvalidDateRange`] for 1582-10-05 ..= 1582-10-14.
    pub fn to_julian_day(&self) -> Result<JulianDate> {
        let date = (self.year, self.month, self.day);
        let b = if date >= (1582, 10, 15) {
            let a = (self.shifted_year() as f64 / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        } else if date <= (1582, 10, 4) {
            0.0
        } else {
            return Err(SunTimesError::InvalidDateRange {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        };

        let (year, month) = (self.shifted_year() as f64, self.shifted_month() as f64);
        let day = self.day as f64 + self.day_fraction();
        let jd = (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b
            - 1524.5;
        Ok(JulianDate::new(jd))
    }

    /// Civil instant of a Julian Day, rounded to the nearest millisecond.
    ///
    /// Days before JD 2299160.5 (1582-10-15T00:00Z) come out on the Julian
    /// calendar, matching [`to_julian_day`](Self::to_julian_day).
    pub fn from_julian_day(jd: JulianDate) -> Self {
        // Rounding the whole count first lets a fraction of 23:59:59.9996
        // carry into the following day instead of producing 24:00:00.
        let total_ms = ((jd.value() + 0.5) * MILLIS_PER_DAY as f64).round() as i64;
        let z = total_ms.div_euclid(MILLIS_PER_DAY) as f64;
        let ms_of_day = total_ms.rem_euclid(MILLIS_PER_DAY);

        let a = if z >= GREGORIAN_START_JDN {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        } else {
            z
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = (b - d - (30.6001 * e).floor()) as u32;
        let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
        let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;

        let ms = ms_of_day as u32;
        Self {
            year,
            month,
            day,
            hour: ms / 3_600_000,
            minute: ms / 60_000 % 60,
            second: ms / 1_000 % 60,
            millisecond: ms % 1_000,
        }
    }

    /// Gregorian leap-year rule applied to the UTC year.
    pub fn is_leap_year(&self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    /// Ordinal day of the UTC year, 1 ..= 366.
    ///
    /// Counts the days of the preceding months explicitly; only the UTC
    /// date fields are read.
    pub fn day_of_year(&self) -> u32 {
        (1..self.month)
            .map(|m| days_in_month(self.year, m))
            .sum::<u32>()
            + self.day
    }

    /// Day of the week, 0 = Sunday ..= 6 = Saturday.
    pub fn day_of_week(&self) -> Result<u32> {
        Ok(self.to_julian_day()?.day_of_week())
    }

    /// Convert to a chrono UTC timestamp.
    ///
    /// Goes through the Julian Day, so Julian-calendar dates land on the
    /// proleptic Gregorian timestamp of the same physical day.  `None` inside
    /// the reform gap or outside chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.to_julian_day().ok()?.to_utc()
    }

    fn shifted_year(&self) -> i32 {
        if self.month <= 2 {
            self.year - 1
        } else {
            self.year
        }
    }

    fn shifted_month(&self) -> u32 {
        if self.month <= 2 {
            self.month + 12
        } else {
            self.month
        }
    }

    fn day_fraction(&self) -> f64 {
        let seconds = self.second as f64 + self.millisecond as f64 / 1_000.0;
        (self.hour as f64 + self.minute as f64 / 60.0 + seconds / 3_600.0) / 24.0
    }
}

impl From<DateTime<Utc>> for CivilDateTime {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            millisecond: datetime.timestamp_subsec_millis().min(999),
        }
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Gregorian rule: divisible by 4, except centuries not divisible by 400.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of a month, using the Julian leap rule before the 1582 reform.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = if year < 1582 {
                year.rem_euclid(4) == 0
            } else {
                is_gregorian_leap_year(year)
            };
            if leap {
                29
            } else {
                28
            }
        }
    }
}

/// Julian Day from Julian centuries since J2000.0: `JD = T·36525 + 2451545`.
pub fn julian_day_from_centuries(centuries: f64) -> JulianDate {
    JulianDate::J2000 + Days::new(centuries * JulianDate::JULIAN_CENTURY.value())
}
