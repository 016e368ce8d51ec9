// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent solar position for an observer.
//!
//! The scanner only needs two things from an ephemeris: the Sun's geometric
//! altitude at an instant and the instant of upper transit on a given day.
//! [`SolarPositionProvider`] captures exactly that, and [`LowPrecisionSun`]
//! implements it with the low-accuracy solar theory from Meeus,
//! *Astronomical Algorithms*, ch. 25 (about 0.01° in the 20th–21st centuries)
//! combined with the IAU 1982 mean sidereal time.

use qtty::Degrees;

use crate::epoch::Epoch;
use crate::observer::GeographicCoordinate;
use crate::{JulianDate, JulianEphemerisDay, TT};

/// Mean sidereal rotation rate in degrees per UT day.
const SIDEREAL_RATE: f64 = 360.985_647_366_29;

/// Number of hour-angle refinements when locating the transit.
const TRANSIT_ITERATIONS: usize = 3;

/// Source of solar altitudes and transit times.
///
/// Instants are Julian Days on the civil (UTC) axis.
pub trait SolarPositionProvider {
    /// Geometric altitude of the Sun's centre above the observer's horizon.
    fn altitude(&self, jd: JulianDate, observer: &GeographicCoordinate) -> Degrees;

    /// Upper transit of the Sun nearest `near`. `None` when the provider
    /// cannot determine it.
    fn solar_transit(
        &self,
        near: JulianDate,
        observer: &GeographicCoordinate,
    ) -> Option<JulianDate>;
}

/// Equatorial coordinates of the Sun, in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Equatorial {
    right_ascension: f64,
    declination: f64,
}

/// Low-precision analytic solar ephemeris.
///
/// Coordinates are evaluated on the TT axis (ΔT applied through
/// [`TT`]); Earth rotation uses the UT instant directly.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LowPrecisionSun;

impl LowPrecisionSun {
    pub const fn new() -> Self {
        Self
    }

    /// Apparent right ascension and declination of the Sun.
    fn equatorial(jd: JulianDate) -> Equatorial {
        let jde: JulianEphemerisDay = jd.to::<TT>();
        let t = JulianDate::new(jde.value())
            .centuries_since(Epoch::J2000)
            .value();

        let l0 = 280.466_46 + t * (36_000.769_83 + t * 0.000_303_2);
        let m = (357.529_11 + t * (35_999.050_29 - t * 0.000_153_7)).to_radians();
        let center = (1.914_602 - t * (0.004_817 + t * 0.000_014)) * m.sin()
            + (0.019_993 - t * 0.000_101) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();
        let omega = (125.04 - 1_934.136 * t).to_radians();
        let lambda = (l0 + center - 0.005_69 - 0.004_78 * omega.sin()).to_radians();

        let seconds = 21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813));
        let mean_obliquity = 23.0 + (26.0 + seconds / 60.0) / 60.0;
        let epsilon = (mean_obliquity + 0.002_56 * omega.cos()).to_radians();

        Equatorial {
            right_ascension: (epsilon.cos() * lambda.sin()).atan2(lambda.cos()),
            declination: (epsilon.sin() * lambda.sin()).asin(),
        }
    }

    /// Greenwich mean sidereal time in degrees (not normalised).
    fn greenwich_sidereal(jd: JulianDate) -> f64 {
        let d = (jd - JulianDate::J2000).value();
        let t = jd.centuries_since(Epoch::J2000).value();
        280.460_618_37 + SIDEREAL_RATE * d + t * t * (0.000_387_933 - t / 38_710_000.0)
    }

    /// Local hour angle of the Sun in degrees, wrapped to `[-180, 180)`.
    fn hour_angle(jd: JulianDate, longitude: f64, sun: &Equatorial) -> f64 {
        let h = Self::greenwich_sidereal(jd) + longitude - sun.right_ascension.to_degrees();
        (h + 180.0).rem_euclid(360.0) - 180.0
    }
}

impl SolarPositionProvider for LowPrecisionSun {
    fn altitude(&self, jd: JulianDate, observer: &GeographicCoordinate) -> Degrees {
        let sun = Self::equatorial(jd);
        let h = Self::hour_angle(jd, observer.longitude.value(), &sun).to_radians();
        let phi = observer.latitude.value().to_radians();
        let sin_alt = phi.sin() * sun.declination.sin()
            + phi.cos() * sun.declination.cos() * h.cos();
        Degrees::new(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
    }

    fn solar_transit(
        &self,
        near: JulianDate,
        observer: &GeographicCoordinate,
    ) -> Option<JulianDate> {
        let longitude = observer.longitude.value();
        let mut jd = near;
        for _ in 0..TRANSIT_ITERATIONS {
            let sun = Self::equatorial(jd);
            let h = Self::hour_angle(jd, longitude, &sun);
            jd -= qtty::Days::new(h / SIDEREAL_RATE);
        }
        jd.value().is_finite().then_some(jd)
    }
}
