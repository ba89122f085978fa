//! Error types shared across engine construction and profile evaluation

use crate::core_types::units::Celsius;

/// Errors that can occur while building an engine or evaluating a profile
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A parameter failed the physical-plausibility checks
    InvalidParameters(String),
    /// The Arrhenius correlation is singular at 0 K
    AbsoluteZeroViscosity {
        /// Temperature that hit the singularity
        temperature: Celsius,
    },
    /// The Arrhenius exponential left f64 range
    NonFiniteViscosity {
        /// Temperature that overflowed the correlation
        temperature: Celsius,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidParameters(msg) => write!(f, "Invalid parameters: {msg}"),
            EngineError::AbsoluteZeroViscosity { temperature } => write!(
                f,
                "Viscosity is undefined at absolute zero (temperature {temperature})"
            ),
            EngineError::NonFiniteViscosity { temperature } => {
                write!(f, "Viscosity overflowed f64 range at {temperature}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
