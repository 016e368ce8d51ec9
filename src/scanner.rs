// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Linear sweep of solar altitude across one day.
//!
//! Starting at a given UTC instant (normally a local midnight), the scanner
//! samples the Sun's altitude every [`ScanConfig::step`], classifies each
//! sample into a [`TwilightBand`] and closes an interval whenever the band
//! changes. The last interval is closed exactly one day after the start, so
//! the result always tiles `[start, start + 86400 s)`.

use chrono::{DateTime, Duration, Utc};
use log::{debug, trace};
use qtty::Seconds;

use crate::error::{Result, SunTimesError};
use crate::observer::GeographicCoordinate;
use crate::period::UtcPeriod;
use crate::position::SolarPositionProvider;
use crate::twilight::{AltitudeThresholds, TwilightBand};
use crate::JulianDate;

/// Length of one scanned day.
pub const DAY_SECONDS: i64 = 86_400;

const MIN_STEP_SECONDS: f64 = 0.001;

/// Sweep parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanConfig {
    /// Time between altitude samples.
    pub step: Seconds,
    pub thresholds: AltitudeThresholds,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step: Seconds::new(1.0),
            thresholds: AltitudeThresholds::default(),
        }
    }
}

impl ScanConfig {
    pub fn with_step(mut self, step: Seconds) -> Self {
        self.step = step;
        self
    }

    pub fn with_thresholds(mut self, thresholds: AltitudeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Check the step range and the ordering of the threshold table.
    pub fn validate(&self) -> Result<()> {
        let step = self.step.value();
        if !(MIN_STEP_SECONDS..=DAY_SECONDS as f64).contains(&step) {
            return Err(SunTimesError::InvalidScanStep(step));
        }
        if !self.thresholds.is_increasing() {
            return Err(SunTimesError::UnorderedThresholds);
        }
        Ok(())
    }

    fn step_duration(&self) -> Duration {
        Duration::nanoseconds((self.step.value() * 1e9).round() as i64)
    }
}

/// One contiguous run of a single band.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwilightInterval {
    pub band: TwilightBand,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TwilightInterval {
    pub fn period(&self) -> UtcPeriod {
        UtcPeriod::new(self.from, self.to)
    }

    /// Whole seconds from `from` to `to`, both floored to the second, so the
    /// intervals of one sweep always sum to [`DAY_SECONDS`].
    pub fn seconds(&self) -> i64 {
        self.period().duration_seconds()
    }
}

/// Band sweeper over a validated [`ScanConfig`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwilightScanner {
    config: ScanConfig,
}

impl TwilightScanner {
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Partition `[start, start + 1 day)` into band intervals.
    ///
    /// The band at `start` opens the first interval; a transition is placed
    /// at the first sample whose band differs from the previous one.
    pub fn sweep<P>(
        &self,
        start: DateTime<Utc>,
        observer: &GeographicCoordinate,
        provider: &P,
    ) -> Vec<TwilightInterval>
    where
        P: SolarPositionProvider + ?Sized,
    {
        let end = start + Duration::seconds(DAY_SECONDS);
        let step = self.config.step_duration();
        let thresholds = &self.config.thresholds;
        let band_at = |t: DateTime<Utc>| {
            thresholds.classify(provider.altitude(JulianDate::from_utc(t), observer))
        };

        let mut intervals = Vec::new();
        let mut current = band_at(start);
        let mut opened = start;
        let mut t = start + step;
        while t < end {
            let band = band_at(t);
            if band != current {
                trace!("{} -> {} at {}", current, band, t);
                intervals.push(TwilightInterval {
                    band: current,
                    from: opened,
                    to: t,
                });
                current = band;
                opened = t;
            }
            t += step;
        }
        intervals.push(TwilightInterval {
            band: current,
            from: opened,
            to: end,
        });

        debug!(
            "scanned {} to {} every {} s: {} intervals",
            start,
            end,
            self.config.step.value(),
            intervals.len()
        );
        intervals
    }
}
