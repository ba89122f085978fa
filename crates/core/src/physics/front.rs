//! Combustion front kinematics

use crate::core_types::units::{Centimeters, CentimetersPerMinute, Minutes};

/// Position of the combustion front after `time` of advance at `velocity`.
///
/// Pure linear kinematics with no clamping: a negative query time places
/// the front behind the inlet and a long run places it past the outlet.
/// Callers decide what an out-of-core front means for them.
///
/// # Example
/// ```
/// use isc_sim_core::core_types::units::{Centimeters, CentimetersPerMinute, Minutes};
/// use isc_sim_core::physics::front_position;
///
/// let front = front_position(CentimetersPerMinute::new(0.5), Minutes::new(100.0));
/// assert_eq!(front, Centimeters::new(50.0));
/// ```
#[must_use]
pub fn front_position(velocity: CentimetersPerMinute, time: Minutes) -> Centimeters {
    velocity * time
}
