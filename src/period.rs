// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: generic half-open interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`
//! - [`UtcPeriod`]: alias for `Interval<DateTime<Utc>>`, the representation
//!   used by twilight intervals

use super::{Time, TimeInstant, TimeScale};
use chrono::{DateTime, Utc};
use qtty::Days;
use std::fmt;

/// Represents an interval `[start, end)` between two instants.
///
/// # Examples
///
/// ```
/// use suntimes::{Interval, ModifiedJulianDate};
///
/// let start = ModifiedJulianDate::new(59000.0);
/// let end = ModifiedJulianDate::new(59001.0);
/// let period = Interval::new(start, end);
///
/// assert_eq!(period.duration(), qtty::Days::new(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias: `Period<JD>`, `Period<MJD>`, ...
pub type Period<S> = Interval<Time<S>>;

/// UTC interval alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new period between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the period as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Convert both endpoints to UTC; `None` if either is out of chrono's range.
    pub fn to_utc(&self) -> Option<UtcPeriod> {
        Some(Interval::new(self.start.to_utc()?, self.end.to_utc()?))
    }

    /// Duration in days.
    pub fn duration_days(&self) -> Days {
        self.duration()
    }
}

impl Interval<DateTime<Utc>> {
    /// Whole seconds between the endpoints, each floored to its second.
    ///
    /// Adjacent intervals therefore add up to the whole-second length of
    /// their union even when boundaries fall between seconds.
    pub fn duration_seconds(&self) -> i64 {
        self.end.timestamp() - self.start.timestamp()
    }
}
