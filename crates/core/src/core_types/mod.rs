//! Core types and utilities

pub mod grid;
pub mod parameters;
pub mod units;

pub use grid::CoreGrid;
pub use parameters::{SimulationParameters, ViscosityCoefficients, ZoneThresholds};
pub use units::*;
