//! Profile engine orchestrating the closed-form models
//!
//! [`ProfileEngine`] owns a validated parameter set and the grid derived
//! from it. Each query composes the pure physics functions into one
//! immutable snapshot; nothing is carried between queries, so times can be
//! evaluated in any order and batches parallelize trivially.

pub mod snapshot;

pub use snapshot::ProfileSnapshot;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core_types::grid::CoreGrid;
use crate::core_types::parameters::SimulationParameters;
use crate::core_types::units::Minutes;
use crate::error::EngineError;
use crate::physics::front::front_position;
use crate::physics::temperature::temperature_profile;
use crate::physics::viscosity::viscosity_profile;
use crate::physics::zones::classify_zones;

/// Stateless profile engine for one in-situ combustion tube run
pub struct ProfileEngine {
    params: SimulationParameters,
    grid: CoreGrid,
}

impl ProfileEngine {
    /// Build an engine around a validated parameter set.
    ///
    /// The grid is derived once here; every snapshot the engine produces
    /// stays aligned with it.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidParameters`] when a parameter fails
    /// validation.
    pub fn new(params: SimulationParameters) -> Result<Self, EngineError> {
        params.validate()?;
        let grid = CoreGrid::from_parameters(&params)?;
        info!(
            "Profile engine ready: {} samples over {} at {} spacing",
            grid.len(),
            grid.core_length(),
            grid.step()
        );
        Ok(Self { params, grid })
    }

    /// Parameter set the engine was built with
    #[must_use]
    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Grid every snapshot is aligned with
    #[must_use]
    pub fn grid(&self) -> &CoreGrid {
        &self.grid
    }

    /// Evaluate the full profile at one query time.
    ///
    /// Front position, temperatures, viscosities, and zones are computed
    /// from scratch; the engine holds no evolving state, so the same time
    /// always produces a bit-identical snapshot.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidParameters`] for a non-finite query
    /// time, and a viscosity error when the temperature profile reaches
    /// the singular or overflowing range of the correlation.
    pub fn evaluate(&self, time: Minutes) -> Result<ProfileSnapshot, EngineError> {
        // NaN would flow through every downstream array; negative and
        // out-of-core times stay permitted
        if !time.value().is_finite() {
            return Err(EngineError::InvalidParameters(format!(
                "query time must be finite, got {time}"
            )));
        }

        let front = front_position(self.params.front_velocity, time);
        let temperatures = temperature_profile(
            &self.grid,
            front,
            self.params.initial_temperature,
            self.params.peak_temperature,
            self.params.decay_length,
        );
        let viscosities = viscosity_profile(&temperatures, self.params.viscosity)?;
        let zones = classify_zones(&self.grid, &temperatures, front, self.params.zones);

        debug!("Evaluated profile at {time}: front at {front}");

        Ok(ProfileSnapshot {
            time,
            front_position: front,
            temperatures,
            viscosities,
            zones,
        })
    }

    /// Evaluate a batch of query times in parallel.
    ///
    /// Snapshots come back in input order, and because each evaluation is
    /// independent the result is bit-identical to mapping
    /// [`ProfileEngine::evaluate`] over the batch sequentially.
    ///
    /// # Errors
    /// Fails if any single evaluation fails.
    pub fn evaluate_frames(&self, times: &[Minutes]) -> Result<Vec<ProfileSnapshot>, EngineError> {
        debug!("Evaluating {} profile frames in parallel", times.len());
        times.par_iter().map(|&time| self.evaluate(time)).collect()
    }
}
