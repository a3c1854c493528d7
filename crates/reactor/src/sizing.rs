//! Plant-level sizing of a swing-adsorption methanation plant.
//!
//! Works back from an annual methane target through the Sabatier reaction
//! `CO₂ + 4 H₂ → CH₄ + 2 H₂O` to the water each reactor must take up per
//! cycle, the adsorbent that requires, and the continuous feed rates.

use uom::si::{
    f64::{AmountOfSubstance, Mass, Time},
    mass::kilogram,
    time::{day, second},
};

use crate::{ConfigError, PhysicalConstants, units::MolarRate};

/// Design targets of a methanation plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantSizing {
    /// Methane produced per year.
    pub annual_methane: Mass,

    /// Water taken up per cycle by one kilogram of adsorbent, in kg/kg.
    pub water_uptake_per_adsorbent: f64,

    /// Duration of one adsorption/desorption cycle.
    pub cycle_time: Time,

    /// Number of reactors sharing the load.
    pub reactors: usize,
}

/// Result of [`PlantSizing::size`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingReport {
    pub annual_methane: AmountOfSubstance,
    pub annual_water: AmountOfSubstance,
    pub annual_carbon_dioxide: AmountOfSubstance,
    pub annual_hydrogen: AmountOfSubstance,

    /// Water one reactor adsorbs during one cycle.
    pub water_per_cycle: Mass,

    /// Adsorbent needed in each reactor.
    pub adsorbent_per_reactor: Mass,

    pub carbon_dioxide_feed: MolarRate,
    pub hydrogen_feed: MolarRate,
}

impl PlantSizing {
    /// A 50 t/yr plant with two reactors on one-hour cycles.
    #[must_use]
    pub fn methanation() -> Self {
        Self {
            annual_methane: Mass::new::<kilogram>(50_000.0),
            water_uptake_per_adsorbent: 0.1,
            cycle_time: Time::new::<second>(3600.0),
            reactors: 2,
        }
    }

    /// Sizes the plant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if any target is not positive and finite,
    /// or if there are no reactors.
    pub fn size(&self, constants: &PhysicalConstants) -> Result<SizingReport, ConfigError> {
        self.validate()?;

        let year = Time::new::<day>(365.0);
        let methane = self.annual_methane / constants.methane;
        let water = 2.0 * methane;
        let carbon_dioxide = methane;
        let hydrogen = 4.0 * methane;

        let cycles = (year / self.cycle_time).value * self.reactors as f64;
        let water_per_cycle = water * constants.water / cycles;

        Ok(SizingReport {
            annual_methane: methane,
            annual_water: water,
            annual_carbon_dioxide: carbon_dioxide,
            annual_hydrogen: hydrogen,
            water_per_cycle,
            adsorbent_per_reactor: water_per_cycle / self.water_uptake_per_adsorbent,
            carbon_dioxide_feed: carbon_dioxide / year,
            hydrogen_feed: hydrogen / year,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = |x: f64| x.is_finite() && x > 0.0;

        let invalid = if !positive(self.annual_methane.value) {
            Some("annual_methane")
        } else if !positive(self.water_uptake_per_adsorbent) {
            Some("water_uptake_per_adsorbent")
        } else if !positive(self.cycle_time.value) {
            Some("cycle_time")
        } else {
            None
        };

        if let Some(field) = invalid {
            return Err(ConfigError::Invalid {
                field,
                reason: "must be finite and positive",
            });
        }
        if self.reactors == 0 {
            return Err(ConfigError::Invalid {
                field: "reactors",
                reason: "at least one reactor is required",
            });
        }
        Ok(())
    }
}
