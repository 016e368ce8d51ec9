// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Directional names for scanned intervals.
//!
//! Every twilight band other than day occurs twice a day, once before and
//! once after noon. Blocks are disambiguated with a morning/evening suffix
//! chosen from the local hour at which they start; the night bands touching
//! the edges of the scanned day become `from_midnight_morning` and
//! `to_midnight_evening`.

use chrono::Timelike;
use chrono_tz::Tz;
use std::fmt;

use crate::period::UtcPeriod;
use crate::scanner::TwilightInterval;
use crate::twilight::TwilightBand;

/// Local hour from which blocks are considered evening blocks.
const NOON_HOUR: u32 = 12;

/// Half of the local day a block starts in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    Morning,
    Evening,
}

impl Phase {
    pub fn from_local_hour(hour: u32) -> Self {
        if hour < NOON_HOUR {
            Phase::Morning
        } else {
            Phase::Evening
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Phase::Morning => "morning",
            Phase::Evening => "evening",
        }
    }
}

/// Name of a block within the scanned day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockName {
    /// Night from the start of the day up to astronomical dawn.
    FromMidnight,
    Day,
    /// Night from astronomical dusk to the end of the day.
    ToMidnight,
    Band(TwilightBand, Phase),
}

impl BlockName {
    pub const MIDNIGHT_TO_ASTRONOMICAL_DAWN: Self = BlockName::FromMidnight;
    pub const ASTRONOMICAL_DAWN: Self = BlockName::Band(TwilightBand::Astronomical, Phase::Morning);
    pub const NAUTICAL_DAWN: Self = BlockName::Band(TwilightBand::Nautical, Phase::Morning);
    pub const CIVIL_DAWN: Self = BlockName::Band(TwilightBand::Civil, Phase::Morning);
    pub const SUNRISE: Self = BlockName::Band(TwilightBand::Sun, Phase::Morning);
    pub const GOLDEN_HOUR_AM: Self = BlockName::Band(TwilightBand::GoldenHour, Phase::Morning);
    pub const DAY: Self = BlockName::Day;
    pub const GOLDEN_HOUR_PM: Self = BlockName::Band(TwilightBand::GoldenHour, Phase::Evening);
    pub const SUNSET: Self = BlockName::Band(TwilightBand::Sun, Phase::Evening);
    pub const CIVIL_DUSK: Self = BlockName::Band(TwilightBand::Civil, Phase::Evening);
    pub const NAUTICAL_DUSK: Self = BlockName::Band(TwilightBand::Nautical, Phase::Evening);
    pub const ASTRONOMICAL_DUSK: Self = BlockName::Band(TwilightBand::Astronomical, Phase::Evening);
    pub const ASTRONOMICAL_DUSK_TO_MIDNIGHT: Self = BlockName::ToMidnight;
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockName::FromMidnight => f.write_str("from_midnight_morning"),
            BlockName::Day => f.write_str("day"),
            BlockName::ToMidnight => f.write_str("to_midnight_evening"),
            BlockName::Band(band, phase) => write!(f, "{}_{}", band.label(), phase.suffix()),
        }
    }
}

/// A scanned interval with its directional name.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedTimeBlock {
    pub name: BlockName,
    pub band: TwilightBand,
    pub interval: UtcPeriod,
    pub seconds: i64,
}

/// Attach directional names to a day's intervals.
///
/// `tz` decides the morning/evening split; the leading and trailing night
/// intervals are named after the day's edges regardless of the hour.
pub fn name_intervals(intervals: &[TwilightInterval], tz: &Tz) -> Vec<NamedTimeBlock> {
    let last = intervals.len().saturating_sub(1);
    intervals
        .iter()
        .enumerate()
        .map(|(index, interval)| {
            let name = match interval.band {
                TwilightBand::Night if index == 0 => BlockName::FromMidnight,
                TwilightBand::Day => BlockName::Day,
                TwilightBand::Night if index == last => BlockName::ToMidnight,
                band => {
                    let hour = interval.from.with_timezone(tz).hour();
                    BlockName::Band(band, Phase::from_local_hour(hour))
                }
            };
            NamedTimeBlock {
                name,
                band: interval.band,
                interval: interval.period(),
                seconds: interval.seconds(),
            }
        })
        .collect()
}
