use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::f64::{Mass, MassRate, MolarMass, Time},
};
use zeolite_core::Model;

use crate::{ConfigError, PhysicalConstants, Species, units::MolarRate};

/// Fixed reaction stoichiometry relative to the limiting feed species.
///
/// Each mole of `feed` yields `adsorbate_per_feed` moles of the species taken
/// up by the bed and `product_per_feed` moles of the product leaving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stoichiometry {
    pub feed: Species,
    pub adsorbate: Species,
    pub product: Species,
    pub adsorbate_per_feed: f64,
    pub product_per_feed: f64,
}

impl Stoichiometry {
    /// Sabatier reaction `CO₂ + 4 H₂ → CH₄ + 2 H₂O` with hydrogen as the limiting feed.
    pub const SABATIER_HYDROGEN_FEED: Self = Self {
        feed: Species::Hydrogen,
        adsorbate: Species::Water,
        product: Species::Methane,
        adsorbate_per_feed: 0.5,
        product_per_feed: 0.25,
    };

    /// Sabatier reaction with carbon dioxide as the limiting feed.
    pub const SABATIER_CARBON_DIOXIDE_FEED: Self = Self {
        feed: Species::CarbonDioxide,
        adsorbate: Species::Water,
        product: Species::Methane,
        adsorbate_per_feed: 2.0,
        product_per_feed: 1.0,
    };

    /// Checks that both coefficients are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a negative or non-finite coefficient.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |x: f64| x.is_finite() && x >= 0.0;
        if valid(self.adsorbate_per_feed) && valid(self.product_per_feed) {
            Ok(())
        } else {
            Err(ConfigError::Invalid {
                field: "stoichiometry",
                reason: "coefficients must be finite and non-negative",
            })
        }
    }
}

impl Default for Stoichiometry {
    fn default() -> Self {
        Self::SABATIER_HYDROGEN_FEED
    }
}

/// Mass change of the bed and of the product stream over one step.
///
/// `adsorbed` is negative when mass leaves the bed during regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassDelta {
    pub adsorbed: Mass,
    pub product: Mass,
}

impl MassDelta {
    /// No mass exchanged.
    pub const ZERO: Self = Self {
        adsorbed: Mass::ZERO,
        product: Mass::ZERO,
    };
}

/// Mass adsorbed and produced while feeding `feed_rate` for `dt`.
///
/// ```text
/// Δm_adsorbed = ν_adsorbate · ṅ_feed · Δt · M_adsorbate
/// Δm_product  = ν_product   · ṅ_feed · Δt · M_product
/// ```
///
/// Both results are non-negative for non-negative inputs.
#[must_use]
pub fn step_delta(
    feed_rate: MolarRate,
    dt: Time,
    stoichiometry: &Stoichiometry,
    constants: &PhysicalConstants,
) -> MassDelta {
    let fed = feed_rate * dt;
    MassDelta {
        adsorbed: stoichiometry.adsorbate_per_feed
            * fed
            * constants.molar_mass(stoichiometry.adsorbate),
        product: stoichiometry.product_per_feed * fed * constants.molar_mass(stoichiometry.product),
    }
}

/// Converts a molar flow into a mass flow.
#[must_use]
pub fn mass_rate(molar_rate: MolarRate, molar_mass: MolarMass) -> MassRate {
    molar_rate * molar_mass
}

/// Input to the [`MassBalance`] model for one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassBalanceInput {
    pub feed_rate: MolarRate,
    pub dt: Time,
}

/// Mass balance of the reacting feed over one time step.
///
/// Wraps [`step_delta`] with the stoichiometry and constants fixed at
/// construction, so a reactor evaluates it with only the feed rate and step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassBalance {
    pub stoichiometry: Stoichiometry,
    pub constants: PhysicalConstants,
}

impl MassBalance {
    /// Molar mass of the adsorbed species.
    #[must_use]
    pub fn adsorbate_molar_mass(&self) -> MolarMass {
        self.constants.molar_mass(self.stoichiometry.adsorbate)
    }

    /// Molar rate at which the adsorbate forms for a given feed rate.
    #[must_use]
    pub fn adsorbate_rate(&self, feed_rate: MolarRate) -> MolarRate {
        self.stoichiometry.adsorbate_per_feed * feed_rate
    }
}

impl Model for MassBalance {
    type Input = MassBalanceInput;
    type Output = MassDelta;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(step_delta(
            input.feed_rate,
            input.dt,
            &self.stoichiometry,
            &self.constants,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass::{gram, kilogram},
        mass_rate::kilogram_per_second,
        molar_mass::gram_per_mole,
        time::second,
    };

    use crate::units::mole_per_second;

    fn constants() -> PhysicalConstants {
        PhysicalConstants {
            water: MolarMass::new::<gram_per_mole>(18.015_28),
            methane: MolarMass::new::<gram_per_mole>(16.042_46),
            ..PhysicalConstants::default()
        }
    }

    #[test]
    fn hydrogen_feed_yields_water_and_methane() {
        let delta = step_delta(
            mole_per_second(1e-4),
            Time::new::<second>(0.1),
            &Stoichiometry::SABATIER_HYDROGEN_FEED,
            &constants(),
        );

        assert_relative_eq!(
            delta.adsorbed.get::<gram>(),
            0.1 * 1e-4 * 0.5 * 18.015_28,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            delta.product.get::<gram>(),
            0.1 * 1e-4 * 0.25 * 16.042_46,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_feed_exchanges_nothing() {
        let delta = step_delta(
            mole_per_second(0.0),
            Time::new::<second>(10.0),
            &Stoichiometry::default(),
            &constants(),
        );
        assert_eq!(delta, MassDelta::ZERO);
    }

    #[test]
    fn carbon_dioxide_feed_is_four_times_hydrogen_feed() {
        let dt = Time::new::<second>(1.0);
        let from_h2 = step_delta(
            mole_per_second(4.0),
            dt,
            &Stoichiometry::SABATIER_HYDROGEN_FEED,
            &constants(),
        );
        let from_co2 = step_delta(
            mole_per_second(1.0),
            dt,
            &Stoichiometry::SABATIER_CARBON_DIOXIDE_FEED,
            &constants(),
        );

        assert_relative_eq!(
            from_h2.adsorbed.get::<kilogram>(),
            from_co2.adsorbed.get::<kilogram>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            from_h2.product.get::<kilogram>(),
            from_co2.product.get::<kilogram>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn model_matches_free_function() {
        let model = MassBalance {
            stoichiometry: Stoichiometry::default(),
            constants: constants(),
        };
        let input = MassBalanceInput {
            feed_rate: mole_per_second(0.3),
            dt: Time::new::<second>(2.0),
        };

        let delta = model.call(&input).unwrap();

        assert_eq!(
            delta,
            step_delta(input.feed_rate, input.dt, &model.stoichiometry, &model.constants)
        );
    }

    #[test]
    fn molar_flow_to_mass_flow() {
        let rate = mass_rate(mole_per_second(2.0), MolarMass::new::<gram_per_mole>(16.0));
        assert_relative_eq!(rate.get::<kilogram_per_second>(), 0.032, max_relative = 1e-12);
    }

    #[test]
    fn rejects_negative_coefficients() {
        let stoichiometry = Stoichiometry {
            product_per_feed: -0.25,
            ..Stoichiometry::default()
        };
        assert!(matches!(
            stoichiometry.validate(),
            Err(ConfigError::Invalid { field: "stoichiometry", .. })
        ));
    }
}
