// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar conversion and twilight scanning.
//!
//! Events that simply do not happen on a given day (polar day or night) are
//! not errors: the named accessors on [`SunTimes`](crate::SunTimes) return
//! `None` for those.

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SunTimesError>;

/// Error type for time-scale conversions and [`SunTimes`](crate::SunTimes) construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SunTimesError {
    /// The civil date lies in the 1582-10-05..=1582-10-14 reform gap, which
    /// exists in neither the Julian nor the Gregorian calendar.
    #[error(
        "date {year:04}-{month:02}-{day:02} is not defined in the Julian or Gregorian calendar"
    )]
    InvalidDateRange { year: i32, month: u32, day: u32 },

    /// A civil calendar field is out of range (e.g. month 13).
    #[error("invalid civil date/time: {0}")]
    InvalidCivilDate(String),

    /// The timezone identifier is not in the IANA database.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// The sweep step is not in `[1 ms, 1 day]`.
    #[error("scan step must lie between 0.001 s and 86400 s, got {0} s")]
    InvalidScanStep(f64),

    /// Altitude thresholds are not finite and strictly increasing.
    #[error("altitude thresholds must be finite and strictly increasing")]
    UnorderedThresholds,

    /// An instant cannot be represented by `chrono`.
    #[error("instant outside the representable date range")]
    OutOfRange,
}
