// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a time scale and encodes how values in
//! that scale relate to the canonical **civil Julian Day** (UT axis).
//!
//! | Marker | Description | Offset from civil JD |
//! |--------|-------------|----------------------|
//! | [`JD`] | Julian Day (civil, UT) | 0 |
//! | [`MJD`] | Modified Julian Date | −2 400 000.5 d |
//! | [`UnixTime`] | Days since 1970-01-01T00:00Z | −2 440 587.5 d |
//! | [`TT`] | Terrestrial Time (Julian Ephemeris Day) | +ΔT |

use super::instant::{Time, TimeScale};
use qtty::{Day, Days};

/// Julian Day: the identity scale.
///
/// 2000-01-01T12:00:00Z is exactly `JD 2 451 545.0`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Date: JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

/// Unix time stored as **days** since 1970-01-01T00:00:00Z (leap seconds ignored).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

const UNIX_EPOCH: Days = Days::new(super::instant::UNIX_EPOCH_JD);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH
    }
}

/// Terrestrial Time, expressed as a Julian Ephemeris Day.
///
/// `TT = UT + ΔT`, with ΔT taken from the Espenak–Meeus polynomials for the
/// calendar year and month of the instant (see [`delta_t`](crate::delta_t)).
/// The inverse uses a three-iteration fixed-point solver.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";

    #[inline]
    fn to_jd(tt_value: Days) -> Days {
        // Solve ut + ΔT(ut) = tt; ΔT changes by well under a second per month,
        // so the iteration settles immediately.
        let mut ut = tt_value;
        for _ in 0..3 {
            let dt_days = super::delta_t::delta_t_at(Time::<JD>::from_days(ut)).to::<Day>();
            ut = tt_value - dt_days;
        }
        ut
    }

    #[inline]
    fn from_jd(jd: Days) -> Days {
        let dt_days = super::delta_t::delta_t_at(Time::<JD>::from_days(jd)).to::<Day>();
        jd + dt_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Second, Seconds};

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.to::<MJD>();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = mjd.to::<JD>();
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn unix_epoch_is_zero_days() {
        let unix_zero = Time::<UnixTime>::new(0.0);
        let jd: Time<JD> = unix_zero.to::<JD>();
        assert!((jd.quantity() - Days::new(2_440_587.5)).abs() < Days::new(1e-12));
    }

    #[test]
    fn tt_is_ahead_of_ut_by_delta_t() {
        let jd = Time::<JD>::new(2_451_545.0);
        let tt: Time<TT> = jd.to::<TT>();
        let offset = (tt.quantity() - jd.quantity()).to::<Second>();
        assert!(
            (offset - Seconds::new(63.87)).abs() < Seconds::new(0.5),
            "TT − UT = {} s, expected ~63.87 s",
            offset
        );
    }

    #[test]
    fn tt_jd_roundtrip() {
        let jd = Time::<JD>::new(2_445_092.5);
        let back: Time<JD> = jd.to::<TT>().to::<JD>();
        assert!(
            (back.quantity() - jd.quantity()).abs() < Days::new(1e-9),
            "roundtrip error: {} days",
            (back.quantity() - jd.quantity()).abs()
        );
    }
}
