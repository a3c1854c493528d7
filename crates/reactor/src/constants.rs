use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{MolarHeatCapacity, MolarMass},
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::kilogram_per_mole,
};
use zeolite_isotherm::DomainError;

use crate::ConfigError;

/// A gas species tracked by the methanation mass balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Hydrogen,
    Water,
    Methane,
    CarbonDioxide,
}

/// Process-wide physical constants.
///
/// Built once at configuration time and shared read-only by every model
/// that needs a molar mass or the gas constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Ideal gas constant `R`.
    pub gas_constant: MolarHeatCapacity,
    pub hydrogen: MolarMass,
    pub water: MolarMass,
    pub methane: MolarMass,
    pub carbon_dioxide: MolarMass,
}

impl PhysicalConstants {
    /// Returns the molar mass of `species`.
    #[must_use]
    pub fn molar_mass(&self, species: Species) -> MolarMass {
        match species {
            Species::Hydrogen => self.hydrogen,
            Species::Water => self.water,
            Species::Methane => self.methane,
            Species::CarbonDioxide => self.carbon_dioxide,
        }
    }

    /// Returns `R` in J/(mol·K).
    #[must_use]
    pub fn gas_constant_si(&self) -> f64 {
        self.gas_constant.get::<joule_per_kelvin_mole>()
    }

    /// Checks that `R` and every molar mass are positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gas_constant = self.gas_constant_si();
        if !gas_constant.is_finite() || gas_constant <= 0.0 {
            return Err(DomainError::NonPositiveGasConstant { gas_constant }.into());
        }

        let masses = [self.hydrogen, self.water, self.methane, self.carbon_dioxide];
        if masses.iter().all(|m| m.value > 0.0 && m.value.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::Invalid {
                field: "constants",
                reason: "molar masses must be positive and finite",
            })
        }
    }
}

impl Default for PhysicalConstants {
    /// CODATA gas constant and standard atomic weights.
    fn default() -> Self {
        Self {
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.314_462_618),
            hydrogen: MolarMass::new::<kilogram_per_mole>(0.002_015_88),
            water: MolarMass::new::<kilogram_per_mole>(0.018_015_28),
            methane: MolarMass::new::<kilogram_per_mole>(0.016_042_46),
            carbon_dioxide: MolarMass::new::<kilogram_per_mole>(0.044_009_5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::molar_mass::gram_per_mole;

    #[test]
    fn looks_up_molar_mass_by_species() {
        let constants = PhysicalConstants::default();
        assert_relative_eq!(
            constants.molar_mass(Species::Water).get::<gram_per_mole>(),
            18.015_28,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            constants.molar_mass(Species::Methane).get::<gram_per_mole>(),
            16.042_46,
            max_relative = 1e-12
        );
    }

    #[test]
    fn defaults_are_valid() {
        assert!(PhysicalConstants::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_values() {
        let constants = PhysicalConstants {
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(0.0),
            ..PhysicalConstants::default()
        };
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::Domain(DomainError::NonPositiveGasConstant { .. }))
        ));

        let constants = PhysicalConstants {
            water: MolarMass::new::<gram_per_mole>(-18.0),
            ..PhysicalConstants::default()
        };
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::Invalid { field: "constants", .. })
        ));
    }
}
