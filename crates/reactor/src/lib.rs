//! Cycling adsorption/desorption reactor for sorption-enhanced methanation.
//!
//! A [`Reactor`] alternates between two phases:
//!
//! - **Adsorption**: the Sabatier reaction runs and the zeolite bed takes up
//!   the water it forms until the capacity threshold is reached.
//! - **Desorption**: the bed is regenerated until it is empty again.
//!
//! Each step is one explicit Euler update of the bed's mass balance. The
//! [`driver`] module runs a reactor for a duration or until stopped, and
//! forwards every [`StepReport`] to an [`Observer`](zeolite_core::Observer).
//!
//! Configuration is loaded from TOML through [`ReactorConfig`] and
//! [`SimulationConfig`]; quantities are `uom` values stored in SI base units.

pub mod driver;
pub mod units;

mod condition;
mod config;
mod constants;
mod error;
mod mass_balance;
mod phase;
mod reactor;
mod sizing;

pub use condition::OperatingCondition;
pub use config::{Capacity, ReactorConfig, SimulationConfig};
pub use constants::{PhysicalConstants, Species};
pub use error::{ConfigError, ReactorError};
pub use mass_balance::{
    MassBalance, MassBalanceInput, MassDelta, Stoichiometry, mass_rate, step_delta,
};
pub use phase::{Phase, PhaseSwitch, PhaseSwitchInput};
pub use reactor::{Reactor, ReactorState, RunFor, StepReport};
pub use sizing::{PlantSizing, SizingReport};
