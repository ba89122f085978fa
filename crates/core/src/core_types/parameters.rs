//! Simulation parameters and the reference laboratory preset

use serde::{Deserialize, Serialize};

use crate::core_types::units::{Celsius, Centimeters, CentimetersPerMinute};
use crate::error::EngineError;

/// Coefficients of the Arrhenius viscosity correlation
///
/// `mu(T) = prefactor_cp * exp(activation_kelvin / T)` with T in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViscosityCoefficients {
    /// Pre-exponential factor in centipoise
    pub prefactor_cp: f64,
    /// Activation temperature (activation energy over gas constant) in Kelvin
    pub activation_kelvin: f64,
}

/// Positional offsets and temperature cutoffs driving zone classification
///
/// The positional rules are anchored to the moving front; the temperature
/// bands partition everything the positional rules leave unclaimed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    /// Front travel below which the whole core reads as undisturbed reservoir
    pub development_delay: Centimeters,
    /// Width of the combustion band trailing the front
    pub burned_offset: Centimeters,
    /// Reach of the steam window ahead of the front
    pub steam_reach: Centimeters,
    /// Steam requires temperatures strictly above this cutoff
    pub steam_floor: Celsius,
    /// Condensation band spans (condensation_floor, steam_floor]
    pub condensation_floor: Celsius,
    /// Oil bank spans (oil_bank_floor, condensation_floor]
    pub oil_bank_floor: Celsius,
}

/// Full description of one in-situ combustion tube run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Core sample length
    pub core_length: Centimeters,
    /// Grid spacing along the core axis
    pub grid_spacing: Centimeters,
    /// Reservoir temperature before ignition
    pub initial_temperature: Celsius,
    /// Peak temperature reached at the combustion front
    pub peak_temperature: Celsius,
    /// Constant front propagation velocity
    pub front_velocity: CentimetersPerMinute,
    /// E-folding length of the exponential tail ahead of the front
    pub decay_length: Centimeters,
    /// Arrhenius coefficients of the oil phase
    pub viscosity: ViscosityCoefficients,
    /// Zone classification thresholds
    pub zones: ZoneThresholds,
}

impl SimulationParameters {
    /// Reference laboratory tube run: a 3 m core sampled every centimeter,
    /// 60°C reservoir ignited to a 600°C front advancing at 0.5 cm/min
    #[must_use]
    pub const fn laboratory_core() -> Self {
        Self {
            core_length: Centimeters::new(300.0),
            grid_spacing: Centimeters::new(1.0),
            initial_temperature: Celsius::new(60.0),
            peak_temperature: Celsius::new(600.0),
            front_velocity: CentimetersPerMinute::new(0.5),
            decay_length: Centimeters::new(30.0),
            viscosity: ViscosityCoefficients {
                prefactor_cp: 0.002,
                activation_kelvin: 1800.0,
            },
            zones: ZoneThresholds {
                development_delay: Centimeters::new(30.0),
                burned_offset: Centimeters::new(20.0),
                steam_reach: Centimeters::new(20.0),
                steam_floor: Celsius::new(350.0),
                condensation_floor: Celsius::new(200.0),
                oil_bank_floor: Celsius::new(80.0),
            },
        }
    }

    /// Check every field for physical plausibility.
    ///
    /// Temperatures are already bounded by their constructors; this catches
    /// the remaining degenerate geometry and correlation inputs.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidParameters`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), EngineError> {
        require_positive("core length", self.core_length.value())?;
        require_positive("grid spacing", self.grid_spacing.value())?;
        require_positive("decay length", self.decay_length.value())?;
        require_positive("viscosity prefactor", self.viscosity.prefactor_cp)?;
        require_finite("viscosity activation temperature", self.viscosity.activation_kelvin)?;
        require_finite("front velocity", self.front_velocity.value())?;
        require_finite("initial temperature", self.initial_temperature.value())?;
        require_finite("peak temperature", self.peak_temperature.value())?;
        require_finite("development delay", self.zones.development_delay.value())?;
        require_nonnegative("burned zone offset", self.zones.burned_offset.value())?;
        require_nonnegative("steam zone reach", self.zones.steam_reach.value())?;
        require_finite("steam floor", self.zones.steam_floor.value())?;
        require_finite("condensation floor", self.zones.condensation_floor.value())?;
        require_finite("oil bank floor", self.zones.oil_bank_floor.value())?;
        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::laboratory_core()
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidParameters(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), EngineError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidParameters(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn require_nonnegative(name: &str, value: f64) -> Result<(), EngineError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidParameters(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laboratory_preset_matches_reference_run() {
        let params = SimulationParameters::laboratory_core();
        assert_eq!(params.core_length, Centimeters::new(300.0));
        assert_eq!(params.grid_spacing, Centimeters::new(1.0));
        assert_eq!(params.initial_temperature, Celsius::new(60.0));
        assert_eq!(params.peak_temperature, Celsius::new(600.0));
        assert_eq!(params.front_velocity, CentimetersPerMinute::new(0.5));
        assert_eq!(params.decay_length, Centimeters::new(30.0));
        assert_eq!(params.viscosity.prefactor_cp, 0.002);
        assert_eq!(params.viscosity.activation_kelvin, 1800.0);
        assert_eq!(params.zones.development_delay, Centimeters::new(30.0));
        assert_eq!(params.zones.steam_floor, Celsius::new(350.0));
    }

    #[test]
    fn default_is_the_laboratory_preset() {
        assert_eq!(
            SimulationParameters::default(),
            SimulationParameters::laboratory_core()
        );
    }

    #[test]
    fn laboratory_preset_validates() {
        assert!(SimulationParameters::laboratory_core().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_fields() {
        let mut params = SimulationParameters::laboratory_core();
        params.grid_spacing = Centimeters::new(0.0);
        let err = params.validate().expect_err("zero spacing must fail");
        assert!(err.to_string().contains("grid spacing"));

        let mut params = SimulationParameters::laboratory_core();
        params.decay_length = Centimeters::new(-30.0);
        let err = params.validate().expect_err("negative decay must fail");
        assert!(err.to_string().contains("decay length"));

        let mut params = SimulationParameters::laboratory_core();
        params.front_velocity = CentimetersPerMinute::new(f64::NAN);
        let err = params.validate().expect_err("NaN velocity must fail");
        assert!(err.to_string().contains("front velocity"));

        let mut params = SimulationParameters::laboratory_core();
        params.viscosity.prefactor_cp = 0.0;
        let err = params.validate().expect_err("zero prefactor must fail");
        assert!(err.to_string().contains("viscosity prefactor"));
    }

    #[test]
    fn stalled_front_is_permitted() {
        let mut params = SimulationParameters::laboratory_core();
        params.front_velocity = CentimetersPerMinute::new(0.0);
        assert!(params.validate().is_ok());
    }
}
