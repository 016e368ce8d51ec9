// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location.

use qtty::Degrees;

/// Geographic position of an observer on the WGS84 ellipsoid.
///
/// Latitude is positive north, longitude positive east.  Values are taken
/// as given; validation is the caller's concern.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicCoordinate {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl GeographicCoordinate {
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build from plain degree values.
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(Degrees::new(latitude), Degrees::new(longitude))
    }
}
