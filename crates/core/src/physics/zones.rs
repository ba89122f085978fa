//! Recovery zone classification along the core
//!
//! An in-situ combustion tube run organizes itself into a characteristic
//! sequence of zones around the moving front:
//!
//! 1. **Burned zone:** spent matrix well behind the front, oil consumed
//! 2. **Combustion zone:** the narrow band where oxidation happens
//! 3. **Steam zone:** superheated vapor pushed just ahead of the front
//! 4. **Condensation zone:** vapor collapsing back into hot liquid
//! 5. **Oil bank:** mobilized oil accumulating ahead of the thermal wave
//! 6. **Initial reservoir:** undisturbed core the process has not reached
//!
//! Classification combines two kinds of rule. Position rules anchor the
//! burned, combustion, and steam bands to the front coordinate itself,
//! because those regions are defined by where the front has been, not by
//! how hot they currently read. Temperature bands then partition whatever
//! the position rules leave unclaimed. Position rules always win where
//! both could apply.
//!
//! Until the front has traveled a minimum development distance the zone
//! structure has not formed at all and the whole core reads as initial
//! reservoir, even though the temperature profile is already evolving.

use serde::{Deserialize, Serialize};

use crate::core_types::grid::CoreGrid;
use crate::core_types::parameters::ZoneThresholds;
use crate::core_types::units::{Celsius, Centimeters};

/// Recovery zone labels, ordered by process maturity
///
/// The discriminant doubles as the numeric code used in exported profiles,
/// increasing from untouched reservoir (0) to fully burned (5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Zone {
    /// Undisturbed core ahead of every thermal signature
    InitialReservoir = 0,
    /// Mobilized oil accumulating ahead of the thermal wave
    OilBank = 1,
    /// Vapor collapsing back into hot liquid
    CondensationZone = 2,
    /// Superheated vapor driven just ahead of the front
    SteamZone = 3,
    /// Active oxidation band trailing the front
    CombustionZone = 4,
    /// Spent matrix the front has fully swept
    BurnedZone = 5,
}

impl Zone {
    /// Every zone in ascending numeric order
    pub const ALL: [Zone; 6] = [
        Zone::InitialReservoir,
        Zone::OilBank,
        Zone::CondensationZone,
        Zone::SteamZone,
        Zone::CombustionZone,
        Zone::BurnedZone,
    ];

    /// Numeric code of this zone
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Zone for a numeric code, if it names one
    #[must_use]
    pub fn from_index(index: u8) -> Option<Zone> {
        Zone::ALL.get(usize::from(index)).copied()
    }
}

/// Classify every grid sample against the current front position.
///
/// Below the development delay the zone structure has not formed and the
/// whole profile reads [`Zone::InitialReservoir`] regardless of
/// temperature. Past it, each sample takes the first matching rule:
///
/// 1. `x < front - burned_offset` is burned
/// 2. `x < front` is combusting
/// 3. `x < front + steam_reach` with `T > steam_floor` is steam
/// 4. `condensation_floor < T <= steam_floor` is condensing
/// 5. `oil_bank_floor < T <= condensation_floor` is banked oil
/// 6. anything left is initial reservoir
///
/// # Panics
/// Panics if `temperatures` is not the same length as the grid.
#[must_use]
pub fn classify_zones(
    grid: &CoreGrid,
    temperatures: &[Celsius],
    front: Centimeters,
    thresholds: ZoneThresholds,
) -> Vec<Zone> {
    assert_eq!(
        grid.len(),
        temperatures.len(),
        "temperature profile does not match the grid"
    );

    if front < thresholds.development_delay {
        return vec![Zone::InitialReservoir; grid.len()];
    }

    grid.positions()
        .iter()
        .zip(temperatures)
        .map(|(&x, &t)| classify_sample(x, t, front, thresholds))
        .collect()
}

/// One sample through the rule chain; position rules run before
/// temperature rules, first match wins.
fn classify_sample(
    x: Centimeters,
    temperature: Celsius,
    front: Centimeters,
    thresholds: ZoneThresholds,
) -> Zone {
    if x < front - thresholds.burned_offset {
        Zone::BurnedZone
    } else if x < front {
        Zone::CombustionZone
    } else if x < front + thresholds.steam_reach && temperature > thresholds.steam_floor {
        Zone::SteamZone
    } else if temperature > thresholds.condensation_floor
        && temperature <= thresholds.steam_floor
    {
        Zone::CondensationZone
    } else if temperature > thresholds.oil_bank_floor
        && temperature <= thresholds.condensation_floor
    {
        Zone::OilBank
    } else {
        Zone::InitialReservoir
    }
}
