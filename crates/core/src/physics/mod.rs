//! Closed-form physics of the combustion front
//!
//! Every function here is pure and stateless: front kinematics, the axial
//! temperature model, the Arrhenius viscosity correlation, and zone
//! classification are each callable on their own, and the engine composes
//! them per query without carrying state between evaluations.

pub mod front;
pub mod temperature;
pub mod viscosity;
pub mod zones;

pub use front::front_position;
pub use temperature::{temperature_at, temperature_profile};
pub use viscosity::{viscosity_at, viscosity_profile};
pub use zones::{classify_zones, Zone};
