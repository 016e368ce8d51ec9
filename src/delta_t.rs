// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): TT − UT1
//!
//! Piecewise polynomial expressions by Espenak & Meeus (NASA *Five Millennium
//! Canon of Solar Eclipses*, 2006).  Each range uses its own polynomial in a
//! locally shifted year variable derived from
//!
//! ```text
//! y = year + (month − 0.5) / 12
//! ```
//!
//! The expressions are not continuous across range boundaries; that is a
//! property of the published fit.
//!
//! ## Integration with Time Scales
//!
//! The correction is applied automatically by the [`TT`](crate::TT) marker:
//! `Time::<JD>::to::<TT>()` adds ΔT and the inverse removes it.
//!
//! ```rust
//! use suntimes::{delta_t, JulianDate, TT};
//!
//! let dt = delta_t(1982, 5);
//! println!("ΔT = {dt}");
//!
//! let jde = JulianDate::new(2_445_092.5).to::<TT>();
//! println!("{jde}");
//! ```

use super::calendar::CivilDateTime;
use super::JulianDate;
use qtty::Seconds;

/// Evaluate a polynomial with coefficients in ascending order of power.
#[inline]
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Long-term parabola `−20 + 32 u²`, `u = (y − 1820) / 100`.
#[inline]
fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Returns **ΔT** in seconds for a calendar year and month (1–12).
///
/// Valid from −1999 to +3000; outside the tabulated ranges the long-term
/// parabola is used.
pub fn delta_t(year: i32, month: u32) -> Seconds {
    let y = year as f64 + (month as f64 - 0.5) / 12.0;
    Seconds::new(delta_t_decimal_year(y))
}

#[rustfmt::skip]
fn delta_t_decimal_year(y: f64) -> f64 {
    match y {
        y if y < -500.0 => long_term(y),
        y if y < 500.0 => polynomial(
            &[10_583.6, -1_014.41, 33.783_11, -5.952_053, -0.179_845_2, 0.022_174_192, 0.009_031_652_1],
            y / 100.0,
        ),
        y if y < 1600.0 => polynomial(
            &[1_574.2, -556.01, 71.234_72, 0.319_781, -0.850_346_3, -0.005_050_998, 0.008_357_207_3],
            (y - 1000.0) / 100.0,
        ),
        y if y < 1700.0 => polynomial(
            &[120.0, -0.9808, -0.015_32, 1.0 / 7_129.0],
            y - 1600.0,
        ),
        y if y < 1800.0 => polynomial(
            &[8.83, 0.1603, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0],
            y - 1700.0,
        ),
        y if y < 1860.0 => polynomial(
            &[13.72, -0.332_447, 0.006_861_2, 0.004_111_6, -0.000_374_36, 0.000_012_127_2, -0.000_000_169_9, 0.000_000_000_875],
            y - 1800.0,
        ),
        y if y < 1900.0 => polynomial(
            &[7.62, 0.5737, -0.251_754, 0.016_806_68, -0.000_447_362_4, 1.0 / 233_174.0],
            y - 1860.0,
        ),
        y if y < 1920.0 => polynomial(
            &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197],
            y - 1900.0,
        ),
        y if y < 1941.0 => polynomial(
            &[21.20, 0.844_93, -0.076_100, 0.002_093_6],
            y - 1920.0,
        ),
        y if y < 1961.0 => polynomial(
            &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2_547.0],
            y - 1950.0,
        ),
        y if y < 1986.0 => polynomial(
            &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0],
            y - 1975.0,
        ),
        y if y < 2005.0 => polynomial(
            &[63.86, 0.3345, -0.060_374, 0.001_727_5, 0.000_651_814, 0.000_023_735_99],
            y - 2000.0,
        ),
        y if y < 2050.0 => polynomial(
            &[62.92, 0.322_17, 0.005_589],
            y - 2000.0,
        ),
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// ΔT for the civil calendar month containing `jd`.
#[inline]
pub(crate) fn delta_t_at(jd: JulianDate) -> Seconds {
    let civil = CivilDateTime::from_julian_day(jd);
    delta_t(civil.year(), civil.month())
}

impl JulianDate {
    /// Returns **ΔT = TT − UT** in seconds for this instant.
    ///
    /// The same correction is applied when converting to [`TT`](crate::TT).
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_at(*self)
    }
}
