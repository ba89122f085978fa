//! ISC Profile Engine Core Library
//!
//! A one-dimensional in-situ combustion (ISC) profile engine for oil
//! recovery tube runs. A combustion front advances through a core sample at
//! constant velocity; for any query time the engine reports the axial
//! temperature profile, the oil viscosity response, and the recovery zone
//! structure around the front.
//!
//! ## Design
//!
//! - Closed-form physics: every profile is a pure function of the query
//!   time, so there is no time stepping and no order dependence between
//!   evaluations
//! - Typed units throughout (centimeters, minutes, Celsius, centipoise)
//! - Batch evaluation parallelized with rayon, bit-identical to the
//!   sequential path

// Core types and utilities
pub mod core_types;

// Shared error type
pub mod error;

// Closed-form physics of the combustion front
pub mod physics;

// Engine and profile snapshots
pub mod simulation;

// Re-export core types
pub use core_types::units::{
    Celsius, CelsiusDelta, Centimeters, CentimetersPerMinute, Centipoise, Kelvin, Minutes,
};
pub use core_types::{CoreGrid, SimulationParameters, ViscosityCoefficients, ZoneThresholds};

// Re-export the physics surface
pub use error::EngineError;
pub use physics::{
    classify_zones, front_position, temperature_at, temperature_profile, viscosity_at,
    viscosity_profile, Zone,
};

// Re-export the engine
pub use simulation::{ProfileEngine, ProfileSnapshot};
