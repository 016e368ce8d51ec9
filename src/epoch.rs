// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named reference epochs.

use crate::JulianDate;

/// One of the fixed epochs a Julian Day can be expressed against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Epoch {
    /// J1900.0: 1900 January 0.5 (JD 2 415 020.0).
    J1900,
    /// B1950.0 reference: 1950 January 1.0 (JD 2 433 282.5).
    J1950,
    /// J2000.0: 2000 January 1.5 (JD 2 451 545.0).
    J2000,
    /// J2100.0: 2100 January 1.5 (JD 2 488 070.0).
    J2100,
}

impl Epoch {
    /// All epochs in chronological order.
    pub const ALL: [Epoch; 4] = [Epoch::J1900, Epoch::J1950, Epoch::J2000, Epoch::J2100];

    /// Julian Day of the epoch.
    pub const fn julian_day(self) -> JulianDate {
        match self {
            Epoch::J1900 => JulianDate::new(2_415_020.0),
            Epoch::J1950 => JulianDate::new(2_433_282.5),
            Epoch::J2000 => JulianDate::new(2_451_545.0),
            Epoch::J2100 => JulianDate::new(2_488_070.0),
        }
    }

    /// The latest epoch not after `jd`.
    ///
    /// Instants before J1950 (including those before J1900) use J1900.
    pub fn containing(jd: JulianDate) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|epoch| jd >= epoch.julian_day())
            .unwrap_or(Epoch::J1900)
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Epoch::J1900 => "1900",
            Epoch::J1950 => "1950",
            Epoch::J2000 => "2000",
            Epoch::J2100 => "2100",
        };
        f.write_str(label)
    }
}
