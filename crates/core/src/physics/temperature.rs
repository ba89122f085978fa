//! Axial temperature model around a moving combustion front
//!
//! The profile is piecewise in position relative to the front:
//! a quadratic ramp climbs from the initial reservoir temperature at the
//! inlet to the peak exactly at the front, and an exponential tail relaxes
//! back toward the initial temperature downstream of it.
//!
//! The ramp is normalized to the current front position, so temperatures
//! behind the front fall back toward the initial value as the front moves
//! away and the burned region is left to cool. The tail starts at the
//! front wherever the front sits, including behind the inlet for negative
//! elapsed times.
//!
//! Known model quirk: the hottest samples away from the front sit on the
//! unswept downstream side, while the zone model counts everything behind
//! the front as burned, so the thermal and zone pictures disagree about
//! which side of the front holds the residual heat. The classifier's
//! position rules take precedence where the two overlap.

use crate::core_types::grid::CoreGrid;
use crate::core_types::units::{Celsius, Centimeters};

/// Temperature at position `x` for a front at `front`.
///
/// # Formula
/// ```text
/// T(x) = T_i + (T_peak - T_i) · (x / x_f)²              x ≤ x_f
/// T(x) = T_i + (T_peak - T_i) · exp(-(x - x_f) / L_d)   x > x_f
/// ```
///
/// Where:
/// - **T_i** = Initial reservoir temperature (°C)
/// - **T_peak** = Peak front temperature (°C)
/// - **x_f** = Current front position (cm)
/// - **L_d** = E-folding decay length of the downstream tail (cm)
///
/// At the ignition instant (`x_f` exactly 0) the ramp is degenerate and
/// the whole core still reads the initial temperature.
///
/// # Example
/// ```
/// use isc_sim_core::core_types::units::{Celsius, Centimeters};
/// use isc_sim_core::physics::temperature_at;
///
/// // The peak sits exactly at the front
/// let t = temperature_at(
///     Centimeters::new(50.0),
///     Centimeters::new(50.0),
///     Celsius::new(60.0),
///     Celsius::new(600.0),
///     Centimeters::new(30.0),
/// );
/// assert_eq!(t, Celsius::new(600.0));
/// ```
#[must_use]
pub fn temperature_at(
    x: Centimeters,
    front: Centimeters,
    initial: Celsius,
    peak: Celsius,
    decay_length: Centimeters,
) -> Celsius {
    // Ignition instant: the normalized ramp is undefined with the front at the inlet
    if *front == 0.0 {
        return initial;
    }

    let rise = peak - initial;
    if x <= front {
        let ratio = x / front;
        initial + rise * ratio.powi(2)
    } else {
        let falloff = (-((x - front) / decay_length)).exp();
        initial + rise * falloff
    }
}

/// Evaluate [`temperature_at`] over every grid sample.
#[must_use]
pub fn temperature_profile(
    grid: &CoreGrid,
    front: Centimeters,
    initial: Celsius,
    peak: Celsius,
    decay_length: Centimeters,
) -> Vec<Celsius> {
    grid.positions()
        .iter()
        .map(|&x| temperature_at(x, front, initial, peak, decay_length))
        .collect()
}
