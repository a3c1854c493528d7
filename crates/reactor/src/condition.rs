use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};
use zeolite_isotherm::{DomainError, IsothermParameters};

use crate::PhysicalConstants;

/// Temperature and (partial) pressure setpoint of one reactor phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingCondition {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

impl OperatingCondition {
    /// Creates a validated operating condition.
    ///
    /// # Errors
    ///
    /// Returns an error if the temperature is not positive or the pressure is negative.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, DomainError> {
        let condition = Self {
            temperature,
            pressure,
        };
        condition.validate()?;
        Ok(condition)
    }

    /// Checks `T > 0` and `p ≥ 0`.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), DomainError> {
        let temperature = self.temperature.get::<kelvin>();
        if temperature.is_nan() || temperature <= 0.0 {
            return Err(DomainError::NonPositiveTemperature { temperature });
        }
        let pressure = self.pressure.get::<pascal>();
        if pressure.is_nan() || pressure < 0.0 {
            return Err(DomainError::NegativePressure { pressure });
        }
        Ok(())
    }

    /// Equilibrium Langmuir loading at this condition, in mol/kg.
    ///
    /// # Errors
    ///
    /// Propagates domain errors from the isotherm.
    pub fn equilibrium_loading(
        &self,
        isotherm: &IsothermParameters,
        constants: &PhysicalConstants,
    ) -> Result<f64, DomainError> {
        isotherm.langmuir_loading(
            constants.gas_constant_si(),
            self.temperature.get::<kelvin>(),
            self.pressure.get::<pascal>(),
        )
    }
}
