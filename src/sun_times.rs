// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset and twilight times for one observer and one local day.
//!
//! [`SunTimes`] is computed eagerly: construction runs the full altitude
//! sweep and the solar-transit solution, and every accessor afterwards is a
//! lookup into the stored blocks. Times are rendered as RFC 3339 strings in
//! the observer's timezone (`Z` for UTC), truncated to whole seconds.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use suntimes::{SunTimes, SunTimesOptions};
//!
//! let options = SunTimesOptions::new(40.6676, -73.9851)
//!     .date(Utc.with_ymd_and_hms(1982, 5, 3, 0, 0, 0).unwrap())
//!     .timezone("America/New_York");
//! let times = SunTimes::new(options)?;
//!
//! let sunrise = times.sunrise().expect("the sun rises in Brooklyn");
//! assert!(sunrise.from.starts_with("1982-05-02T05:3"));
//! assert_eq!(times.total_seconds(), 86_400);
//! # Ok::<(), suntimes::SunTimesError>(())
//! ```

use chrono::{DateTime, Duration, NaiveTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use log::debug;
use qtty::Degrees;

use crate::blocks::{name_intervals, BlockName, NamedTimeBlock};
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, SunTimesError};
use crate::observer::GeographicCoordinate;
use crate::period::UtcPeriod;
use crate::position::{LowPrecisionSun, SolarPositionProvider};
use crate::scanner::{ScanConfig, TwilightInterval, TwilightScanner, DAY_SECONDS};
use crate::JulianDate;

/// Timezone used when none is given.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Inputs of a [`SunTimes`] computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunTimesOptions {
    /// Instant whose local calendar date is scanned; "now" when `None`.
    pub date: Option<DateTime<Utc>>,
    pub latitude: Degrees,
    pub longitude: Degrees,
    /// IANA timezone identifier; UTC when `None`.
    pub timezone: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scan: ScanConfig,
}

impl SunTimesOptions {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            date: None,
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
            timezone: None,
            scan: ScanConfig::default(),
        }
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn scan(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    pub fn observer(&self) -> GeographicCoordinate {
        GeographicCoordinate::new(self.latitude, self.longitude)
    }
}

/// A named block rendered in the observer's timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunTimeResult {
    pub from: String,
    pub to: String,
    pub seconds: i64,
}

/// Twilight partition and solar noon of one local day.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    instant: DateTime<Utc>,
    observer: GeographicCoordinate,
    timezone: Tz,
    window: UtcPeriod,
    bands: Vec<TwilightInterval>,
    blocks: Vec<NamedTimeBlock>,
    solar_noon: Option<DateTime<Utc>>,
}

impl SunTimes {
    /// Compute with the system clock and the built-in solar ephemeris.
    pub fn new(options: SunTimesOptions) -> Result<Self> {
        Self::with_clock(options, &SystemClock)
    }

    /// Compute with an explicit clock for the default date.
    pub fn with_clock<C: Clock + ?Sized>(options: SunTimesOptions, clock: &C) -> Result<Self> {
        Self::with_provider(options, clock, &LowPrecisionSun)
    }

    /// Compute with an explicit clock and solar position provider.
    pub fn with_provider<C, P>(options: SunTimesOptions, clock: &C, provider: &P) -> Result<Self>
    where
        C: Clock + ?Sized,
        P: SolarPositionProvider + ?Sized,
    {
        let scanner = TwilightScanner::new(options.scan)?;
        let timezone = parse_timezone(options.timezone.as_deref())?;
        let observer = options.observer();
        let instant = options.date.unwrap_or_else(|| clock.now());

        let local_date = instant.with_timezone(&timezone).date_naive();
        let local_midnight = local_date.and_time(NaiveTime::MIN);
        let start = timezone
            .from_local_datetime(&local_midnight)
            .earliest()
            // Zones that skip midnight on a DST change start the day an hour later.
            .or_else(|| {
                timezone
                    .from_local_datetime(&(local_midnight + Duration::hours(1)))
                    .earliest()
            })
            .ok_or(SunTimesError::OutOfRange)?
            .with_timezone(&Utc);
        let window = UtcPeriod::new(start, start + Duration::seconds(DAY_SECONDS));

        let bands = scanner.sweep(start, &observer, provider);
        let blocks = name_intervals(&bands, &timezone);

        let middle = JulianDate::from_utc(start + Duration::seconds(DAY_SECONDS / 2));
        let solar_noon = provider
            .solar_transit(middle, &observer)
            .and_then(|jd| jd.to_utc())
            .filter(|noon| window.contains(*noon));

        debug!(
            "{} blocks for {} at ({}, {}) in {}",
            blocks.len(),
            local_date,
            observer.latitude.value(),
            observer.longitude.value(),
            timezone.name()
        );

        Ok(Self {
            instant,
            observer,
            timezone,
            window,
            bands,
            blocks,
            solar_noon,
        })
    }

    /// The requested instant (or the clock reading used in its place).
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Julian Day of [`instant`](Self::instant).
    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_utc(self.instant)
    }

    pub fn observer(&self) -> &GeographicCoordinate {
        &self.observer
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The scanned day: local midnight plus 86 400 s.
    pub fn window(&self) -> UtcPeriod {
        self.window
    }

    /// Raw band intervals in sweep order.
    pub fn bands(&self) -> &[TwilightInterval] {
        &self.bands
    }

    /// All named blocks in chronological order.
    pub fn time_blocks(&self) -> &[NamedTimeBlock] {
        &self.blocks
    }

    /// First block carrying `name`.
    pub fn find(&self, name: BlockName) -> Option<&NamedTimeBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    /// Block containing `instant`; `None` outside the scanned day.
    pub fn block_at(&self, instant: DateTime<Utc>) -> Option<&NamedTimeBlock> {
        self.blocks
            .iter()
            .find(|block| block.interval.contains(instant))
    }

    pub fn total_seconds(&self) -> i64 {
        self.blocks.iter().map(|block| block.seconds).sum()
    }

    /// Render a UTC instant in the observer's timezone.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone)
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Block `name` rendered for display; `None` if it does not occur today.
    pub fn get(&self, name: BlockName) -> Option<SunTimeResult> {
        match self.find(name) {
            Some(block) if block.interval.start < block.interval.end => Some(SunTimeResult {
                from: self.format(block.interval.start),
                to: self.format(block.interval.end),
                seconds: block.seconds,
            }),
            _ => {
                debug!("no {} block on {}", name, self.window.start);
                None
            }
        }
    }

    pub fn midnight_to_astronomical_dawn(&self) -> Option<SunTimeResult> {
        self.get(BlockName::MIDNIGHT_TO_ASTRONOMICAL_DAWN)
    }

    pub fn astronomical_dawn(&self) -> Option<SunTimeResult> {
        self.get(BlockName::ASTRONOMICAL_DAWN)
    }

    pub fn nautical_dawn(&self) -> Option<SunTimeResult> {
        self.get(BlockName::NAUTICAL_DAWN)
    }

    pub fn civil_dawn(&self) -> Option<SunTimeResult> {
        self.get(BlockName::CIVIL_DAWN)
    }

    /// From the end of civil dawn until the Sun clears the horizon.
    pub fn sunrise(&self) -> Option<SunTimeResult> {
        self.get(BlockName::SUNRISE)
    }

    pub fn golden_hour_am(&self) -> Option<SunTimeResult> {
        self.get(BlockName::GOLDEN_HOUR_AM)
    }

    pub fn day(&self) -> Option<SunTimeResult> {
        self.get(BlockName::DAY)
    }

    pub fn golden_hour_pm(&self) -> Option<SunTimeResult> {
        self.get(BlockName::GOLDEN_HOUR_PM)
    }

    pub fn sunset(&self) -> Option<SunTimeResult> {
        self.get(BlockName::SUNSET)
    }

    pub fn civil_dusk(&self) -> Option<SunTimeResult> {
        self.get(BlockName::CIVIL_DUSK)
    }

    pub fn nautical_dusk(&self) -> Option<SunTimeResult> {
        self.get(BlockName::NAUTICAL_DUSK)
    }

    pub fn astronomical_dusk(&self) -> Option<SunTimeResult> {
        self.get(BlockName::ASTRONOMICAL_DUSK)
    }

    pub fn astronomical_dusk_to_midnight(&self) -> Option<SunTimeResult> {
        self.get(BlockName::ASTRONOMICAL_DUSK_TO_MIDNIGHT)
    }

    /// Instant of upper solar transit within [`window`](Self::window).
    pub fn solar_noon_utc(&self) -> Option<DateTime<Utc>> {
        self.solar_noon
    }

    pub fn solar_noon(&self) -> Option<String> {
        self.solar_noon.map(|noon| self.format(noon))
    }
}

fn parse_timezone(name: Option<&str>) -> Result<Tz> {
    let name = name.unwrap_or(DEFAULT_TIMEZONE);
    name.parse::<Tz>()
        .map_err(|_| SunTimesError::UnknownTimeZone(name.to_string()))
}
