// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Twilight bands and the altitude table that separates them.

use qtty::Degrees;
use std::fmt;

/// Altitude below which the Sun is in astronomical night.
pub const NIGHT_LIMIT: Degrees = Degrees::new(-18.0);
/// Upper edge of astronomical twilight.
pub const ASTRONOMICAL_LIMIT: Degrees = Degrees::new(-12.0);
/// Upper edge of nautical twilight.
pub const NAUTICAL_LIMIT: Degrees = Degrees::new(-6.0);
/// Upper edge of civil twilight (start of the blue hour).
pub const CIVIL_LIMIT: Degrees = Degrees::new(-4.0);
/// Boundary between the near-horizon band and golden hour.
///
/// Slightly above the geometric horizon so that the Sun's disc is fully
/// clear before golden hour begins.
pub const SUN_LIMIT: Degrees = Degrees::new(0.1);
/// Upper edge of golden hour.
pub const GOLDEN_HOUR_LIMIT: Degrees = Degrees::new(6.0);

/// Solar altitude band, ordered by increasing altitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TwilightBand {
    Night,
    Astronomical,
    Nautical,
    Civil,
    /// Near-horizon band: the Sun is rising or setting.
    Sun,
    GoldenHour,
    Day,
}

impl TwilightBand {
    /// All bands from darkest to brightest.
    pub const ALL: [TwilightBand; 7] = [
        TwilightBand::Night,
        TwilightBand::Astronomical,
        TwilightBand::Nautical,
        TwilightBand::Civil,
        TwilightBand::Sun,
        TwilightBand::GoldenHour,
        TwilightBand::Day,
    ];

    /// Lowercase label used to build block names.
    pub const fn label(self) -> &'static str {
        match self {
            TwilightBand::Night => "night",
            TwilightBand::Astronomical => "astronomical",
            TwilightBand::Nautical => "nautical",
            TwilightBand::Civil => "civil",
            TwilightBand::Sun => "sun",
            TwilightBand::GoldenHour => "goldenhour",
            TwilightBand::Day => "day",
        }
    }
}

impl fmt::Display for TwilightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper altitude limits of each band below [`TwilightBand::Day`].
///
/// An altitude belongs to the first band whose limit it is strictly below;
/// anything at or above `golden_hour` is day. Limits are expected to be
/// increasing.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AltitudeThresholds {
    pub night: Degrees,
    pub astronomical: Degrees,
    pub nautical: Degrees,
    pub civil: Degrees,
    pub sun: Degrees,
    pub golden_hour: Degrees,
}

impl Default for AltitudeThresholds {
    fn default() -> Self {
        Self {
            night: NIGHT_LIMIT,
            astronomical: ASTRONOMICAL_LIMIT,
            nautical: NAUTICAL_LIMIT,
            civil: CIVIL_LIMIT,
            sun: SUN_LIMIT,
            golden_hour: GOLDEN_HOUR_LIMIT,
        }
    }
}

impl AltitudeThresholds {
    /// Band containing `altitude`.
    pub fn classify(&self, altitude: Degrees) -> TwilightBand {
        let a = altitude.value();
        if a < self.night.value() {
            TwilightBand::Night
        } else if a < self.astronomical.value() {
            TwilightBand::Astronomical
        } else if a < self.nautical.value() {
            TwilightBand::Nautical
        } else if a < self.civil.value() {
            TwilightBand::Civil
        } else if a < self.sun.value() {
            TwilightBand::Sun
        } else if a < self.golden_hour.value() {
            TwilightBand::GoldenHour
        } else {
            TwilightBand::Day
        }
    }

    /// Whether every limit is finite and strictly above the previous one.
    pub fn is_increasing(&self) -> bool {
        let limits = [
            self.night,
            self.astronomical,
            self.nautical,
            self.civil,
            self.sun,
            self.golden_hour,
        ];
        limits.iter().all(|l| l.value().is_finite())
            && limits.windows(2).all(|w| w[0].value() < w[1].value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(deg: f64) -> TwilightBand {
        AltitudeThresholds::default().classify(Degrees::new(deg))
    }

    #[test]
    fn default_table() {
        assert_eq!(classify(-40.0), TwilightBand::Night);
        assert_eq!(classify(-18.0), TwilightBand::Astronomical);
        assert_eq!(classify(-12.5), TwilightBand::Astronomical);
        assert_eq!(classify(-12.0), TwilightBand::Nautical);
        assert_eq!(classify(-6.0), TwilightBand::Civil);
        assert_eq!(classify(-4.0), TwilightBand::Sun);
        assert_eq!(classify(0.05), TwilightBand::Sun);
        assert_eq!(classify(0.1), TwilightBand::GoldenHour);
        assert_eq!(classify(5.99), TwilightBand::GoldenHour);
        assert_eq!(classify(6.0), TwilightBand::Day);
        assert_eq!(classify(90.0), TwilightBand::Day);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = TwilightBand::Night;
        for i in -900..=900 {
            let band = classify(i as f64 / 10.0);
            assert!(band >= previous);
            previous = band;
        }
    }

    #[test]
    fn custom_sun_limit() {
        let table = AltitudeThresholds {
            sun: Degrees::new(0.0),
            ..AltitudeThresholds::default()
        };
        assert_eq!(table.classify(Degrees::new(0.05)), TwilightBand::GoldenHour);
        assert!(table.is_increasing());
    }

    #[test]
    fn rejects_unordered_limits() {
        let table = AltitudeThresholds {
            civil: Degrees::new(-13.0),
            ..AltitudeThresholds::default()
        };
        assert!(!table.is_increasing());
        assert!(AltitudeThresholds::default().is_increasing());
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = TwilightBand::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(
            labels,
            ["night", "astronomical", "nautical", "civil", "sun", "goldenhour", "day"]
        );
    }
}
