//! Arrhenius viscosity correlation for the oil phase
//!
//! Dead-oil viscosity falls steeply with temperature; over the range an
//! in-situ combustion front sweeps (tens to hundreds of °C) the two-constant
//! Arrhenius form captures the behavior well and stays monotonic.

use crate::core_types::parameters::ViscosityCoefficients;
use crate::core_types::units::{Celsius, Centipoise, Kelvin};
use crate::error::EngineError;

/// Oil viscosity at `temperature` under the Arrhenius correlation.
///
/// # Formula
/// ```text
/// mu(T) = A · exp(B / T_K)
/// ```
///
/// Where:
/// - **A** = Pre-exponential factor (cP)
/// - **B** = Activation temperature (K)
/// - **T_K** = Absolute temperature (K)
///
/// # Errors
/// - [`EngineError::AbsoluteZeroViscosity`] at exactly 0 K, where the
///   correlation is singular
/// - [`EngineError::NonFiniteViscosity`] when the exponential overflows
///   f64 range (temperatures within a few Kelvin of absolute zero)
///
/// # Example
/// ```
/// use isc_sim_core::core_types::parameters::ViscosityCoefficients;
/// use isc_sim_core::core_types::units::Celsius;
/// use isc_sim_core::physics::viscosity_at;
///
/// let coefficients = ViscosityCoefficients {
///     prefactor_cp: 0.002,
///     activation_kelvin: 1800.0,
/// };
/// let mu = viscosity_at(Celsius::new(60.0), coefficients)?;
/// assert!((mu.value() - 0.444).abs() < 1e-3);
/// # Ok::<(), isc_sim_core::error::EngineError>(())
/// ```
pub fn viscosity_at(
    temperature: Celsius,
    coefficients: ViscosityCoefficients,
) -> Result<Centipoise, EngineError> {
    let kelvin = temperature.to_kelvin();
    if kelvin == Kelvin::ABSOLUTE_ZERO {
        return Err(EngineError::AbsoluteZeroViscosity { temperature });
    }

    let value = coefficients.prefactor_cp * (coefficients.activation_kelvin / *kelvin).exp();
    if !value.is_finite() {
        return Err(EngineError::NonFiniteViscosity { temperature });
    }

    Ok(Centipoise::new(value))
}

/// Evaluate [`viscosity_at`] over a whole temperature profile.
///
/// # Errors
/// Stops at the first sample that fails, with the same conditions as
/// [`viscosity_at`].
pub fn viscosity_profile(
    temperatures: &[Celsius],
    coefficients: ViscosityCoefficients,
) -> Result<Vec<Centipoise>, EngineError> {
    temperatures
        .iter()
        .map(|&t| viscosity_at(t, coefficients))
        .collect()
}
