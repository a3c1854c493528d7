//! Adsorption isotherms and packed-bed transport relations.
//!
//! Every function here is pure and works on plain `f64` values in SI units:
//!
//! | Quantity                | Unit        |
//! |-------------------------|-------------|
//! | loading `q`, `q_max`    | mol/kg      |
//! | pressure `p`            | Pa          |
//! | adsorption constant `b` | 1/Pa        |
//! | temperature `T`         | K           |
//! | energy `ΔE_ads`         | J/mol       |
//! | gas constant `R`        | J/(mol·K)   |
//! | velocity `u`            | m/s         |
//! | density `ρ`             | kg/m³       |
//!
//! Inputs outside a function's physical domain are rejected with a
//! [`DomainError`] rather than producing `NaN` or infinities.

mod bed;
mod error;
mod isotherm;
mod selectivity;
mod sweep;

pub use bed::{bed_porosity, propagation_velocity, saturation_time, superficial_velocity};
pub use error::DomainError;
pub use isotherm::{
    IsothermParameters, adsorption_constant, adsorption_constant_from_rates,
    fractional_occupancy, henry_loading, langmuir_loading, langmuir_slope,
};
pub use selectivity::{equilibrium_selectivity, kinetic_selectivity};
pub use sweep::loading_grid;
