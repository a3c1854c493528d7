use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, Mass, MolarMass, Pressure, ThermodynamicTemperature, Time},
    mass::kilogram,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    time::second,
};
use zeolite_isotherm::IsothermParameters;

use crate::{
    ConfigError, OperatingCondition, PhysicalConstants, Stoichiometry,
    driver::Horizon,
    units::{MolarRate, StepSize, mole_per_second},
};

/// How the adsorption-phase capacity threshold is determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Capacity {
    /// A fixed adsorbed-mass threshold.
    Mass { threshold: Mass },

    /// Equilibrium Langmuir loading at the adsorption condition, scaled by the
    /// adsorbent mass in the bed.
    Equilibrium { adsorbent_mass: Mass },
}

impl Capacity {
    /// Resolves the threshold as an adsorbed mass.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved threshold is not positive, or if the
    /// isotherm cannot be evaluated at the adsorption condition.
    pub fn threshold(
        &self,
        isotherm: &IsothermParameters,
        adsorption: &OperatingCondition,
        constants: &PhysicalConstants,
        adsorbate_molar_mass: MolarMass,
    ) -> Result<Mass, ConfigError> {
        let threshold = match *self {
            Capacity::Mass { threshold } => threshold,
            Capacity::Equilibrium { adsorbent_mass } => {
                let loading = adsorption.equilibrium_loading(isotherm, constants)?;
                let moles =
                    AmountOfSubstance::new::<mole>(loading * adsorbent_mass.get::<kilogram>());
                moles * adsorbate_molar_mass
            }
        };

        let kg = threshold.get::<kilogram>();
        if kg > 0.0 && kg.is_finite() {
            Ok(threshold)
        } else {
            Err(ConfigError::Invalid {
                field: "capacity",
                reason: "threshold must resolve to a positive, finite mass",
            })
        }
    }
}

/// Everything needed to construct a [`Reactor`](crate::Reactor).
///
/// Quantities are stored as `uom` values and serialized in SI base units
/// (K, Pa, s, kg, kg/mol, mol/s, J/mol, J/(mol·K)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorConfig {
    #[serde(default)]
    pub constants: PhysicalConstants,

    pub isotherm: IsothermParameters,

    #[serde(default)]
    pub stoichiometry: Stoichiometry,

    pub adsorption: OperatingCondition,

    pub desorption: OperatingCondition,

    pub step_size: StepSize,

    /// Molar feed rate of the limiting species.
    pub feed_rate: MolarRate,

    pub capacity: Capacity,

    /// Molar rate at which the adsorbate leaves the bed during desorption.
    ///
    /// Defaults to the adsorbate formation rate of `feed_rate`, fixed when the
    /// reactor is built.
    #[serde(default)]
    pub regeneration_rate: Option<MolarRate>,
}

impl ReactorConfig {
    /// Water removal from a hydrogen-fed Sabatier reactor on zeolite 3A.
    ///
    /// Adsorbs at 250 °C and 150 bar, regenerates at 250 °C and 1 bar, and
    /// treats the full plant hydrogen feed of a 50 t/yr methane plant.
    #[must_use]
    pub fn methanation() -> Self {
        Self {
            constants: PhysicalConstants::default(),
            isotherm: IsothermParameters {
                q_max: 11.0,
                b0: 1e-10,
                delta_e_ads: -45_000.0,
            },
            stoichiometry: Stoichiometry::SABATIER_HYDROGEN_FEED,
            adsorption: OperatingCondition {
                temperature: ThermodynamicTemperature::new::<kelvin>(523.15),
                pressure: Pressure::new::<pascal>(1.5e7),
            },
            desorption: OperatingCondition {
                temperature: ThermodynamicTemperature::new::<kelvin>(523.15),
                pressure: Pressure::new::<pascal>(1e5),
            },
            step_size: StepSize::new_unchecked(Time::new::<second>(0.1)),
            feed_rate: mole_per_second(0.395),
            capacity: Capacity::Equilibrium {
                adsorbent_mass: Mass::new::<kilogram>(64.0),
            },
            regeneration_rate: None,
        }
    }

    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        parse_toml(text)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_toml(path.as_ref())
    }

    /// Checks every invariant a reactor relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constants.validate()?;
        self.isotherm.validate()?;
        self.stoichiometry.validate()?;
        self.adsorption.validate()?;
        self.desorption.validate()?;

        if !is_non_negative(self.feed_rate.value) {
            return Err(ConfigError::Invalid {
                field: "feed_rate",
                reason: "must be finite and non-negative",
            });
        }

        match self.regeneration_rate {
            Some(rate) if !(rate.value.is_finite() && rate.value > 0.0) => {
                Err(ConfigError::Invalid {
                    field: "regeneration_rate",
                    reason: "must be finite and positive",
                })
            }
            _ => Ok(()),
        }
    }
}

/// A reactor configuration together with the run horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub reactor: ReactorConfig,

    /// Simulated duration; runs until stopped when absent.
    #[serde(default)]
    pub duration: Option<Time>,
}

impl SimulationConfig {
    /// Parses a simulation configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        parse_toml(text)
    }

    /// Reads and parses a TOML simulation configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_toml(path.as_ref())
    }

    /// The run horizon implied by `duration`.
    #[must_use]
    pub fn horizon(&self) -> Horizon {
        match self.duration {
            Some(duration) => Horizon::Until(duration),
            None => Horizon::Unbounded,
        }
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn parse_toml<T: DeserializeOwned>(text: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(text)?)
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&text)
}
