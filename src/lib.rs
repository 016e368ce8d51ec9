// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun times
//!
//! Sunrise, sunset, solar noon and the graduated twilight bands for an
//! observer and a local calendar day, built on a small Julian Date engine.
//!
//! # Core types
//!
//! - [`SunTimes`]: eager twilight partition of one local day, with named
//!   accessors such as [`SunTimes::sunrise`] and [`SunTimes::civil_dusk`].
//! - [`SunTimesOptions`]: date, location, timezone and [`ScanConfig`].
//! - [`Time<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`]: type alias for `Time<JD>`.
//! - [`CivilDateTime`]: civil UTC calendar fields with exact Julian Day
//!   conversion across the 1582 calendar reform.
//! - [`SolarPositionProvider`]: the ephemeris seam; [`LowPrecisionSun`] is
//!   the built-in implementation.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Day on the civil (UTC) axis |
//! | [`MJD`] | Modified Julian Date |
//! | [`TT`] | Terrestrial Time, `JD + ΔT` |
//! | [`UnixTime`] | Days since 1970-01-01T00:00Z |
//!
//! # ΔT (Delta T)
//!
//! **ΔT = TT − UT** follows the Espenak–Meeus polynomials and is applied by
//! the [`TT`] scale. The raw value is available from [`delta_t()`] or
//! [`Time::<JD>::delta_t()`](Time::delta_t).
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use suntimes::{FixedClock, SunTimes, SunTimesOptions};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2021, 6, 21, 12, 0, 0).unwrap());
//! let times = SunTimes::with_clock(SunTimesOptions::new(78.22, 15.65), &clock)?;
//!
//! // Midnight sun: one day-long block and no sunrise.
//! assert_eq!(times.day().map(|d| d.seconds), Some(86_400));
//! assert!(times.sunrise().is_none());
//! # Ok::<(), suntimes::SunTimesError>(())
//! ```

mod blocks;
mod calendar;
mod clock;
mod delta_t;
mod epoch;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod observer;
mod period;
mod position;
pub(crate) mod scales;
mod scanner;
mod sun_times;
mod twilight;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use blocks::{name_intervals, BlockName, NamedTimeBlock, Phase};
pub use calendar::{is_gregorian_leap_year, julian_day_from_centuries, CivilDateTime};
pub use clock::{Clock, FixedClock, SystemClock};
pub use delta_t::delta_t;
pub use epoch::Epoch;
pub use error::{Result, SunTimesError};
pub use instant::{Time, TimeInstant, TimeScale};
pub use observer::GeographicCoordinate;
pub use period::{Interval, Period, UtcPeriod};
pub use position::{LowPrecisionSun, SolarPositionProvider};
pub use scales::{UnixTime, JD, MJD, TT};
pub use scanner::{ScanConfig, TwilightInterval, TwilightScanner, DAY_SECONDS};
pub use sun_times::{SunTimeResult, SunTimes, SunTimesOptions, DEFAULT_TIMEZONE};
pub use twilight::{
    AltitudeThresholds, TwilightBand, ASTRONOMICAL_LIMIT, CIVIL_LIMIT, GOLDEN_HOUR_LIMIT,
    NAUTICAL_LIMIT, NIGHT_LIMIT, SUN_LIMIT,
};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date on the civil axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Julian Ephemeris Day, the dynamical day count used by solar formulas.
///
/// This is a type alias for [`Time<TT>`].
pub type JulianEphemerisDay = Time<TT>;

/// Modified Julian Date: `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
