//! Immutable profile snapshots produced by the engine

use serde::{Deserialize, Serialize};

use crate::core_types::units::{Celsius, Centimeters, Centipoise, Minutes};
use crate::physics::zones::Zone;

/// One fully evaluated profile at a single query time
///
/// The three arrays are aligned 1:1 with the grid the engine was built
/// over: sample `i` of each describes the same axial position. Snapshots
/// are plain data and serialize as-is for export or comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Query time the profile was evaluated at
    pub time: Minutes,
    /// Front position at that time, unclamped to the core
    pub front_position: Centimeters,
    /// Temperature at each grid sample
    pub temperatures: Vec<Celsius>,
    /// Oil viscosity at each grid sample
    pub viscosities: Vec<Centipoise>,
    /// Zone label at each grid sample
    pub zones: Vec<Zone>,
}

impl ProfileSnapshot {
    /// Number of samples in the profile
    #[must_use]
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    /// True when the profile holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_follows_the_arrays() {
        let snapshot = ProfileSnapshot {
            time: Minutes::new(100.0),
            front_position: Centimeters::new(50.0),
            temperatures: vec![Celsius::new(60.0); 3],
            viscosities: vec![Centipoise::new(0.44); 3],
            zones: vec![Zone::InitialReservoir; 3],
        };
        assert_eq!(snapshot.len(), 3);
        assert!(!snapshot.is_empty());
    }
}
