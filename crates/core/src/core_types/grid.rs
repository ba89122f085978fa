//! Spatial discretization of the core sample

use serde::{Deserialize, Serialize};

use crate::core_types::parameters::SimulationParameters;
use crate::core_types::units::Centimeters;
use crate::error::EngineError;

/// Uniform 1-D sampling grid along the core axis
///
/// Positions run from the inlet at x = 0 outward with constant spacing,
/// ending at the last sample at or before the core length. Geometry is
/// validated once at construction so every profile evaluated against the
/// grid shares identical positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreGrid {
    core_length: Centimeters,
    step: Centimeters,
    positions: Vec<Centimeters>,
}

impl CoreGrid {
    /// Build a grid covering `[0, core_length]` with spacing `step`.
    ///
    /// The sample count is `floor(core_length / step) + 1`, so the outlet
    /// point is included exactly when the length is a whole multiple of
    /// the spacing.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidParameters`] if either extent is
    /// non-positive or non-finite.
    pub fn new(core_length: Centimeters, step: Centimeters) -> Result<Self, EngineError> {
        if !core_length.value().is_finite() || core_length.value() <= 0.0 {
            return Err(EngineError::InvalidParameters(format!(
                "core length must be positive and finite, got {core_length}"
            )));
        }
        if !step.value().is_finite() || step.value() <= 0.0 {
            return Err(EngineError::InvalidParameters(format!(
                "grid spacing must be positive and finite, got {step}"
            )));
        }

        let count = (core_length / step).floor() as usize + 1;
        let positions = (0..count).map(|i| step * i as f64).collect();

        Ok(Self {
            core_length,
            step,
            positions,
        })
    }

    /// Build the grid described by a parameter set.
    ///
    /// # Errors
    /// Same conditions as [`CoreGrid::new`].
    pub fn from_parameters(params: &SimulationParameters) -> Result<Self, EngineError> {
        Self::new(params.core_length, params.grid_spacing)
    }

    /// Sample positions from the inlet outward, strictly increasing
    pub fn positions(&self) -> &[Centimeters] {
        &self.positions
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the grid holds no samples (never the case after validation)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Spacing between adjacent samples
    pub fn step(&self) -> Centimeters {
        self.step
    }

    /// Nominal core length the grid was built for
    pub fn core_length(&self) -> Centimeters {
        self.core_length
    }
}
