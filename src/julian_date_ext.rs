// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;

use super::calendar::CivilDateTime;
use super::epoch::Epoch;
use super::instant::Time;
use super::scales::{JD, MJD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00Z (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// The named epoch this instant is measured from (nearest not after it).
    #[inline]
    pub fn epoch(&self) -> Epoch {
        Epoch::containing(*self)
    }

    /// Julian centuries `T` since the epoch returned by [`epoch`](Self::epoch).
    ///
    /// At 2000-01-01T12:00:00Z this is exactly zero.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        self.centuries_since(self.epoch())
    }

    /// Julian centuries elapsed since a specific epoch.
    ///
    /// Positional formulas referred to J2000.0 use `centuries_since(Epoch::J2000)`
    /// regardless of which epoch the instant falls after.
    #[inline]
    pub fn centuries_since(&self, epoch: Epoch) -> Centuries {
        Centuries::new(
            ((*self - epoch.julian_day()) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Julian years since J2000.0.
    #[inline]
    pub fn julian_years(&self) -> JulianYears {
        JulianYears::new(
            ((*self - Self::J2000) / Self::JULIAN_YEAR)
                .simplify()
                .value(),
        )
    }

    /// Day of the week, 0 = Sunday ..= 6 = Saturday: `⌊JD + 1.5⌋ mod 7`.
    #[inline]
    pub fn day_of_week(&self) -> u32 {
        ((self.value() + 1.5).floor() as i64).rem_euclid(7) as u32
    }

    /// Civil UTC calendar fields of this instant.
    #[inline]
    pub fn to_civil(&self) -> CivilDateTime {
        CivilDateTime::from_julian_day(*self)
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}
